/// Convenience result type used across trailmap.
pub type TrailResult<T> = Result<T, TrailError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Out-of-range progress is deliberately absent: progress is clamped, never rejected.
#[derive(thiserror::Error, Debug)]
pub enum TrailError {
    /// The checkpoint table cannot describe a path (too few points, duplicate progress).
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Milestones declare more than one placement mode for the same deployment.
    #[error("ambiguous milestone mode: {0}")]
    AmbiguousMilestoneMode(String),

    /// Invalid configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrailError {
    /// Build a [`TrailError::InvalidPath`] value.
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Build a [`TrailError::AmbiguousMilestoneMode`] value.
    pub fn ambiguous_mode(msg: impl Into<String>) -> Self {
        Self::AmbiguousMilestoneMode(msg.into())
    }

    /// Build a [`TrailError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrailError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
