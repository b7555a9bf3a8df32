use crate::{
    foundation::core::Point,
    foundation::error::{TrailError, TrailResult},
    path::resolver::InterpolationResolver,
};

/// An anchor of known progress and known 2D position defining the path's shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Checkpoint {
    /// Integer progress value this checkpoint sits at.
    pub progress: i64,
    /// Position in design space.
    pub position: Point,
}

impl Checkpoint {
    /// Create a checkpoint at `progress` with position `(x, y)`.
    pub fn new(progress: i64, x: f64, y: f64) -> Self {
        Self {
            progress,
            position: Point::new(x, y),
        }
    }
}

/// Sparse, sorted checkpoint table describing the path polyline.
///
/// Immutable after construction. Intermediate progress values are never stored; they are
/// interpolated on demand by [`InterpolationResolver`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Checkpoint>", into = "Vec<Checkpoint>")]
pub struct CheckpointTable {
    points: Vec<Checkpoint>, // sorted, strictly increasing progress
}

impl CheckpointTable {
    /// Build a validated table.
    ///
    /// Input order is irrelevant; the table is sorted by progress. Fails when fewer than two
    /// checkpoints are supplied, when two share a progress value, or when a position is not
    /// finite.
    pub fn new(mut points: Vec<Checkpoint>) -> TrailResult<Self> {
        if points.len() < 2 {
            return Err(TrailError::invalid_path(format!(
                "need at least 2 checkpoints, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points
            .iter()
            .find(|c| !c.position.x.is_finite() || !c.position.y.is_finite())
        {
            return Err(TrailError::invalid_path(format!(
                "checkpoint at progress {} has a non-finite position",
                bad.progress
            )));
        }

        points.sort_by_key(|c| c.progress);
        if let Some(w) = points.windows(2).find(|w| w[0].progress == w[1].progress) {
            return Err(TrailError::invalid_path(format!(
                "duplicate checkpoint progress {}",
                w[0].progress
            )));
        }

        Ok(Self { points })
    }

    /// Build a table from `(progress, (x, y))` pairs.
    pub fn from_pairs<I>(pairs: I) -> TrailResult<Self>
    where
        I: IntoIterator<Item = (i64, (f64, f64))>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(p, (x, y))| Checkpoint::new(p, x, y))
                .collect(),
        )
    }

    /// Sorted checkpoints.
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.points
    }

    /// Number of checkpoints (always `>= 2`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Path start.
    pub fn first(&self) -> Checkpoint {
        self.points[0]
    }

    /// Path terminal point.
    pub fn last(&self) -> Checkpoint {
        self.points[self.points.len() - 1]
    }

    /// Smallest checkpoint progress.
    pub fn min_progress(&self) -> i64 {
        self.first().progress
    }

    /// Largest checkpoint progress.
    pub fn max_progress(&self) -> i64 {
        self.last().progress
    }

    /// Positions in path order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.points.iter().map(|c| c.position)
    }

    /// Sample the path at every integer progress in `[min_progress, max]`.
    ///
    /// Produces the legacy dense lookup shape (one entry per integer) for export to
    /// consumers that cannot interpolate. Values past the last checkpoint hold the
    /// terminal position.
    pub fn densify(&self, max: i64) -> Vec<Point> {
        let resolver = InterpolationResolver::new(self);
        (self.min_progress()..=max)
            .map(|p| resolver.position_at(p as f64))
            .collect()
    }
}

impl TryFrom<Vec<Checkpoint>> for CheckpointTable {
    type Error = TrailError;

    fn try_from(points: Vec<Checkpoint>) -> TrailResult<Self> {
        Self::new(points)
    }
}

impl From<CheckpointTable> for Vec<Checkpoint> {
    fn from(table: CheckpointTable) -> Self {
        table.points
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/checkpoint.rs"]
mod tests;
