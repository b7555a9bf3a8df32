use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, Vec2},
    foundation::math::fnv1a64_str,
    milestone::anchor::MilestoneAnchor,
};

/// Default radius under which an entity is considered to overlap a milestone marker.
pub const DEFAULT_PROXIMITY_RADIUS: f64 = 24.0;
/// Default displacement applied to an overlapping entity.
pub const DEFAULT_OFFSET_DISTANCE: f64 = 32.0;
/// Default number of displacement directions.
pub const DEFAULT_DIRECTIONS: u32 = 8;

/// Outcome of resolving one entity against the milestone anchors.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CollisionOutcome {
    /// Position to render the entity at.
    pub position: Point,
    /// Anchor the entity was pushed away from, if any.
    pub displaced_from: Option<String>,
}

/// Displaces entities that overlap a milestone marker in an identity-derived direction.
///
/// The direction bucket is `fnv1a64(id) mod directions`, so an entity always lands on the same
/// side of the same marker frame after frame, and entities need no shared counter or ordering.
/// Entity-vs-entity overlap is not resolved.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CollisionResolver {
    /// Distance below which an entity collides with an anchor (design units).
    pub proximity_radius: f64,
    /// Fixed displacement radius (design units).
    pub offset_distance: f64,
    /// Number of evenly spaced displacement directions; must be > 0.
    pub directions: u32,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self {
            proximity_radius: DEFAULT_PROXIMITY_RADIUS,
            offset_distance: DEFAULT_OFFSET_DISTANCE,
            directions: DEFAULT_DIRECTIONS,
        }
    }
}

impl CollisionResolver {
    /// Rendered position for `entity_id` at `raw`.
    pub fn resolve(&self, entity_id: &str, raw: Point, anchors: &[MilestoneAnchor]) -> Point {
        self.resolve_detailed(entity_id, raw, anchors).position
    }

    /// Like [`Self::resolve`], also naming the anchor that caused a displacement.
    pub fn resolve_detailed(
        &self,
        entity_id: &str,
        raw: Point,
        anchors: &[MilestoneAnchor],
    ) -> CollisionOutcome {
        match self.nearest_colliding(raw, anchors) {
            Some(anchor) => CollisionOutcome {
                position: raw + self.offset_for(entity_id),
                displaced_from: Some(anchor.id.clone()),
            },
            None => CollisionOutcome {
                position: raw,
                displaced_from: None,
            },
        }
    }

    /// Nearest anchor strictly inside the proximity radius.
    pub fn nearest_colliding<'a>(
        &self,
        raw: Point,
        anchors: &'a [MilestoneAnchor],
    ) -> Option<&'a MilestoneAnchor> {
        anchors
            .iter()
            .map(|a| (a, raw.distance(a.position)))
            .filter(|&(_, d)| d < self.proximity_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(a, _)| a)
    }

    /// Direction bucket for `entity_id` in `0..directions`.
    pub fn bucket_for(&self, entity_id: &str) -> u32 {
        let k = u64::from(self.directions.max(1));
        (fnv1a64_str(entity_id) % k) as u32
    }

    /// Displacement vector applied to `entity_id` on collision.
    pub fn offset_for(&self, entity_id: &str) -> Vec2 {
        let k = f64::from(self.directions.max(1));
        let angle = f64::from(self.bucket_for(entity_id)) * (TAU / k);
        Vec2::from_angle(angle) * self.offset_distance
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collision/resolver.rs"]
mod tests;
