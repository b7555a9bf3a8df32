use crate::{foundation::core::Point, foundation::math::lerp_point, path::checkpoint::CheckpointTable};

/// Location of a progress value on the polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHit {
    /// Index of the segment's first checkpoint.
    pub index: usize,
    /// Position inside the segment in `[0, 1]`.
    pub fraction: f64,
}

/// Maps progress values to positions on the path by piecewise-linear interpolation.
///
/// Borrowing view over a [`CheckpointTable`]; every query is a pure function of its input and
/// the table.
#[derive(Clone, Copy, Debug)]
pub struct InterpolationResolver<'a> {
    table: &'a CheckpointTable,
}

impl<'a> InterpolationResolver<'a> {
    /// Create a resolver over `table`.
    pub fn new(table: &'a CheckpointTable) -> Self {
        Self { table }
    }

    /// The table this resolver reads from.
    pub fn table(&self) -> &'a CheckpointTable {
        self.table
    }

    /// Position on the path for `progress`.
    ///
    /// Progress outside the table's range is clamped, never extrapolated. NaN maps to the
    /// path start.
    pub fn position_at(&self, progress: f64) -> Point {
        let hit = self.segment_at(progress);
        let pts = self.table.checkpoints();
        if hit.fraction == 0.0 {
            return pts[hit.index].position;
        }
        if hit.fraction == 1.0 {
            return pts[hit.index + 1].position;
        }
        lerp_point(
            pts[hit.index].position,
            pts[hit.index + 1].position,
            hit.fraction,
        )
    }

    /// Bracketing segment and in-segment fraction for `progress`.
    ///
    /// An exact checkpoint hit reports that checkpoint with fraction `0` (the terminal
    /// checkpoint reports the last segment with fraction `1`).
    pub fn segment_at(&self, progress: f64) -> SegmentHit {
        let pts = self.table.checkpoints();
        let last = pts.len() - 1;
        let min = self.table.min_progress() as f64;
        let max = self.table.max_progress() as f64;

        if progress.is_nan() || progress <= min {
            return SegmentHit {
                index: 0,
                fraction: 0.0,
            };
        }
        if progress >= max {
            return SegmentHit {
                index: last - 1,
                fraction: 1.0,
            };
        }

        // First checkpoint strictly above `progress`; always in 1..=last here.
        let next = pts.partition_point(|c| (c.progress as f64) <= progress);
        let prev = next - 1;
        let p0 = pts[prev].progress as f64;
        if p0 == progress {
            return SegmentHit {
                index: prev,
                fraction: 0.0,
            };
        }
        let p1 = pts[next].progress as f64;
        SegmentHit {
            index: prev,
            fraction: (progress - p0) / (p1 - p0),
        }
    }

    /// Sample the raw point sequence at `fraction` of its length in index space.
    ///
    /// Ignores progress labels: `0` is the first point, `1` the terminal point, and the
    /// fractional index `fraction * (len - 1)` is interpolated between its two bracketing
    /// points.
    pub fn point_along_sequence(&self, fraction: f64) -> Point {
        let pts = self.table.checkpoints();
        let segments = pts.len() - 1;
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        let precise = fraction * segments as f64;
        let seg = (precise.floor() as usize).min(segments - 1);
        let t = precise - seg as f64;
        if t >= 1.0 {
            return pts[seg + 1].position;
        }
        lerp_point(pts[seg].position, pts[seg + 1].position, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/resolver.rs"]
mod tests;
