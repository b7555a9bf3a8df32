use std::path::Path;

use anyhow::Context as _;

use crate::{
    collision::resolver::CollisionResolver,
    foundation::error::{TrailError, TrailResult},
    milestone::anchor::PlacementMode,
    viewport::transform::DesignSpace,
};

/// Progress span assumed past the final milestone in ordinal mode.
pub const DEFAULT_TRAILING_SPAN: f64 = 100.0;

/// Deployment configuration for a trail map.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Milestone placement mode; `None` infers it from milestone declarations.
    pub milestone_mode: Option<PlacementMode>,
    /// Ordinal mode: progress span from the final milestone to the terminal point.
    pub trailing_span: f64,
    /// Entity-vs-milestone overlap handling.
    pub collision: CollisionResolver,
    /// Design-space extents for viewport scaling.
    pub design: DesignSpace,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            milestone_mode: None,
            trailing_span: DEFAULT_TRAILING_SPAN,
            collision: CollisionResolver::default(),
            design: DesignSpace::default(),
        }
    }
}

impl TrailConfig {
    /// Check value ranges.
    pub fn validate(&self) -> TrailResult<()> {
        if !self.trailing_span.is_finite() || self.trailing_span < 0.0 {
            return Err(TrailError::validation(format!(
                "trailing_span must be finite and >= 0, got {}",
                self.trailing_span
            )));
        }
        let c = &self.collision;
        if c.directions == 0 {
            return Err(TrailError::validation("collision directions must be > 0"));
        }
        if !c.proximity_radius.is_finite() || c.proximity_radius < 0.0 {
            return Err(TrailError::validation(
                "collision proximity_radius must be finite and >= 0",
            ));
        }
        if !c.offset_distance.is_finite() {
            return Err(TrailError::validation(
                "collision offset_distance must be finite",
            ));
        }
        self.design.validate()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> TrailResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| TrailError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> TrailResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
