use crate::{
    foundation::core::Point,
    foundation::error::{TrailError, TrailResult},
    milestone::ordinal::OrdinalLayout,
    path::resolver::InterpolationResolver,
};

/// How milestones are placed on the path. One mode per deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Anchor at the path position of the milestone's own required progress.
    Threshold,
    /// Anchor at a rank-proportional fraction of the path's point sequence.
    Ordinal,
}

/// A named, ranked stage in the progression. Owned by the milestone collaborator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Milestone {
    /// Stable identifier.
    pub id: String,
    /// Position in the global milestone order.
    pub ordinal_rank: i64,
    /// Progress required to reach this milestone.
    pub required_progress: f64,
    /// Placement mode the collaborator declared for this milestone, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementMode>,
}

impl Milestone {
    /// Create a milestone without a declared placement mode.
    pub fn new(id: impl Into<String>, ordinal_rank: i64, required_progress: f64) -> Self {
        Self {
            id: id.into(),
            ordinal_rank,
            required_progress,
            placement: None,
        }
    }
}

/// A milestone resolved to a design-space position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MilestoneAnchor {
    /// Milestone identifier.
    pub id: String,
    /// Milestone rank.
    pub ordinal_rank: i64,
    /// Position on the path in design space.
    pub position: Point,
}

/// Milestone anchors for one frame, plus the progress mapping entities follow.
#[derive(Clone, Debug)]
pub struct MilestoneAnchors {
    mode: PlacementMode,
    anchors: Vec<MilestoneAnchor>,
    ordinal: Option<OrdinalLayout>,
}

impl MilestoneAnchors {
    /// Place `milestones` on the path.
    ///
    /// `configured` wins when set; otherwise the mode the milestones declare unanimously is used,
    /// defaulting to [`PlacementMode::Threshold`]. A milestone declaring any other mode fails
    /// with [`TrailError::AmbiguousMilestoneMode`].
    pub fn build(
        milestones: &[Milestone],
        configured: Option<PlacementMode>,
        resolver: &InterpolationResolver<'_>,
        trailing_span: f64,
    ) -> TrailResult<Self> {
        let mode = resolve_mode(milestones, configured)?;

        let mut sorted = milestones.to_vec();
        sorted.sort_by(|a, b| {
            a.ordinal_rank
                .cmp(&b.ordinal_rank)
                .then_with(|| a.id.cmp(&b.id))
        });

        let (positions, ordinal): (Vec<Point>, _) = match mode {
            PlacementMode::Threshold => (
                sorted
                    .iter()
                    .map(|m| resolver.position_at(m.required_progress))
                    .collect(),
                None,
            ),
            PlacementMode::Ordinal => {
                let layout = OrdinalLayout::new(&sorted, trailing_span);
                let positions = layout
                    .anchor_fractions()
                    .iter()
                    .map(|&f| resolver.point_along_sequence(f))
                    .collect();
                (positions, Some(layout))
            }
        };

        let anchors = sorted
            .into_iter()
            .zip(positions)
            .map(|(m, position)| MilestoneAnchor {
                id: m.id,
                ordinal_rank: m.ordinal_rank,
                position,
            })
            .collect();

        Ok(Self {
            mode,
            anchors,
            ordinal,
        })
    }

    /// The placement mode in effect.
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Anchors in rank order.
    pub fn anchors(&self) -> &[MilestoneAnchor] {
        &self.anchors
    }

    /// Ordinal spacing, when in [`PlacementMode::Ordinal`].
    pub fn ordinal_layout(&self) -> Option<&OrdinalLayout> {
        self.ordinal.as_ref()
    }

    /// Design-space position for an entity with scalar `progress`.
    pub fn entity_position(&self, resolver: &InterpolationResolver<'_>, progress: f64) -> Point {
        match &self.ordinal {
            None => resolver.position_at(progress),
            Some(layout) => resolver.point_along_sequence(layout.fraction_for(progress)),
        }
    }
}

fn resolve_mode(
    milestones: &[Milestone],
    configured: Option<PlacementMode>,
) -> TrailResult<PlacementMode> {
    let mut declared = milestones.iter().filter_map(|m| m.placement.map(|p| (m, p)));
    let mode = match configured {
        Some(mode) => mode,
        None => match declared.clone().next() {
            Some((_, p)) => p,
            None => PlacementMode::Threshold,
        },
    };

    if let Some((m, p)) = declared.find(|&(_, p)| p != mode) {
        return Err(TrailError::ambiguous_mode(format!(
            "milestone '{}' declares {:?} placement but the deployment uses {:?}",
            m.id, p, mode
        )));
    }
    Ok(mode)
}

#[cfg(test)]
#[path = "../../tests/unit/milestone/anchor.rs"]
mod tests;
