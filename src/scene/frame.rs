use std::sync::Arc;

use crate::{
    foundation::core::{Point, Viewport},
    foundation::error::TrailResult,
    milestone::anchor::{Milestone, MilestoneAnchors, PlacementMode},
    path::checkpoint::{Checkpoint, CheckpointTable},
    path::resolver::InterpolationResolver,
    scene::{config::TrailConfig, entity::Entity},
    viewport::transform::{ScalePolicy, ViewportState, ViewportTransform},
};

/// Milestone marker resolved for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedMilestone {
    /// Milestone identifier.
    pub id: String,
    /// Milestone rank.
    pub ordinal_rank: i64,
    /// Anchor in design space.
    pub position: Point,
    /// Anchor in screen space.
    pub screen: Point,
    /// Destination marker: the final milestone in ordinal mode.
    pub is_terminal: bool,
}

/// Entity marker resolved for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedEntity {
    /// Entity identifier.
    pub id: String,
    /// Scalar progress (sum of components).
    pub progress: f64,
    /// Position on the path before collision handling (design space).
    pub path_position: Point,
    /// Rendered position after collision handling (design space).
    pub position: Point,
    /// Rendered position in screen space.
    pub screen: Point,
    /// Milestone the entity was displaced away from, if any.
    pub displaced_from: Option<String>,
}

/// Everything the host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrailFrame {
    /// Viewport the frame was laid out for.
    pub viewport: Viewport,
    /// Scaling policy in effect.
    pub policy: ScalePolicy,
    /// Uniform design-to-screen scale.
    pub scale: f64,
    /// Milestone placement mode in effect.
    pub mode: PlacementMode,
    /// Milestones in rank order.
    pub milestones: Vec<PlacedMilestone>,
    /// Entities in input order.
    pub entities: Vec<PlacedEntity>,
}

/// Frame output, or a placeholder when the trail cannot be drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FrameLayout {
    /// A laid-out frame.
    Ready(TrailFrame),
    /// Static placeholder shown instead of the trail.
    Placeholder {
        /// Human-readable cause.
        reason: String,
    },
}

impl FrameLayout {
    /// The laid-out frame, if any.
    pub fn frame(&self) -> Option<&TrailFrame> {
        match self {
            Self::Ready(f) => Some(f),
            Self::Placeholder { .. } => None,
        }
    }
}

/// A validated trail: checkpoint table, deployment config and live viewport.
///
/// The table is shared read-only; only the viewport changes after construction.
#[derive(Clone, Debug)]
pub struct TrailMap {
    table: Arc<CheckpointTable>,
    config: TrailConfig,
    viewport: ViewportState,
}

impl TrailMap {
    /// Create a map after validating `config`.
    pub fn new(table: CheckpointTable, config: TrailConfig, viewport: Viewport) -> TrailResult<Self> {
        config.validate()?;
        let transform = ViewportTransform::new(config.design);
        Ok(Self {
            table: Arc::new(table),
            config,
            viewport: ViewportState::new(transform, viewport),
        })
    }

    /// Checkpoint table.
    pub fn table(&self) -> &CheckpointTable {
        &self.table
    }

    /// Deployment configuration.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Viewport and derived scale.
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Interpolation resolver over the table.
    pub fn resolver(&self) -> InterpolationResolver<'_> {
        InterpolationResolver::new(&self.table)
    }

    /// Resize notification from the host.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport.on_resize(viewport);
    }

    /// Place `milestones` without laying out a frame.
    ///
    /// Hosts call this when the milestone list changes to surface
    /// [`crate::TrailError::AmbiguousMilestoneMode`] at configuration time.
    pub fn anchors(&self, milestones: &[Milestone]) -> TrailResult<MilestoneAnchors> {
        MilestoneAnchors::build(
            milestones,
            self.config.milestone_mode,
            &self.resolver(),
            self.config.trailing_span,
        )
    }

    /// Lay out one frame.
    #[tracing::instrument(skip_all, fields(milestones = milestones.len(), entities = entities.len()))]
    pub fn layout(&self, milestones: &[Milestone], entities: &[Entity]) -> TrailResult<TrailFrame> {
        let resolver = self.resolver();
        let anchors = self.anchors(milestones)?;
        let collision = &self.config.collision;

        let count = anchors.anchors().len();
        let ordinal = anchors.mode() == PlacementMode::Ordinal;
        let placed_milestones = anchors
            .anchors()
            .iter()
            .enumerate()
            .map(|(i, a)| PlacedMilestone {
                id: a.id.clone(),
                ordinal_rank: a.ordinal_rank,
                position: a.position,
                screen: self.viewport.to_screen(a.position),
                is_terminal: ordinal && i + 1 == count,
            })
            .collect();

        let placed_entities = entities
            .iter()
            .map(|e| {
                let progress = e.total_progress();
                let path_position = anchors.entity_position(&resolver, progress);
                let outcome = collision.resolve_detailed(&e.id, path_position, anchors.anchors());
                PlacedEntity {
                    id: e.id.clone(),
                    progress,
                    path_position,
                    position: outcome.position,
                    screen: self.viewport.to_screen(outcome.position),
                    displaced_from: outcome.displaced_from,
                }
            })
            .collect::<Vec<_>>();

        let displaced = placed_entities
            .iter()
            .filter(|e| e.displaced_from.is_some())
            .count();
        tracing::debug!(displaced, scale = self.viewport.scale(), "frame laid out");

        Ok(TrailFrame {
            viewport: self.viewport.viewport(),
            policy: self.viewport.policy(),
            scale: self.viewport.scale(),
            mode: anchors.mode(),
            milestones: placed_milestones,
            entities: placed_entities,
        })
    }
}

/// Host-facing wrapper that never fails: an unusable trail renders as a placeholder.
#[derive(Clone, Debug)]
pub enum TrailView {
    /// Trail is drawable.
    Ready(TrailMap),
    /// Trail could not be built.
    Degraded {
        /// Construction failure.
        reason: String,
    },
}

impl TrailView {
    /// Build a view from raw checkpoints, degrading on any construction error.
    pub fn build(checkpoints: Vec<Checkpoint>, config: TrailConfig, viewport: Viewport) -> Self {
        let built =
            CheckpointTable::new(checkpoints).and_then(|t| TrailMap::new(t, config, viewport));
        match built {
            Ok(map) => Self::Ready(map),
            Err(err) => {
                tracing::error!(error = %err, "trail unavailable; showing placeholder");
                Self::Degraded {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// `true` when showing the placeholder.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Forward a resize notification; ignored while degraded.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if let Self::Ready(map) = self {
            map.on_resize(viewport);
        }
    }

    /// Lay out one frame, or a placeholder.
    pub fn layout(&self, milestones: &[Milestone], entities: &[Entity]) -> FrameLayout {
        match self {
            Self::Ready(map) => match map.layout(milestones, entities) {
                Ok(frame) => FrameLayout::Ready(frame),
                Err(err) => {
                    tracing::error!(error = %err, "frame layout failed; showing placeholder");
                    FrameLayout::Placeholder {
                        reason: err.to_string(),
                    }
                }
            },
            Self::Degraded { reason } => FrameLayout::Placeholder {
                reason: reason.clone(),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
