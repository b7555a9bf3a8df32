use std::collections::BTreeMap;

/// A tracked participant. Only the sum of its progress components matters for positioning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    /// Identity, stable across frames.
    pub id: String,
    /// Progress broken down by category.
    #[serde(default)]
    pub progress_components: BTreeMap<String, f64>,
}

impl Entity {
    /// Create an entity with no progress.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            progress_components: BTreeMap::new(),
        }
    }

    /// Builder-style helper adding one progress component.
    pub fn with_component(mut self, category: impl Into<String>, value: f64) -> Self {
        self.progress_components.insert(category.into(), value);
        self
    }

    /// Scalar progress: the sum of all finite components.
    pub fn total_progress(&self) -> f64 {
        self.progress_components
            .values()
            .copied()
            .filter(|v| v.is_finite())
            .sum()
    }
}
