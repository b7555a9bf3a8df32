use crate::milestone::anchor::Milestone;

/// A point where entity progress pins to a known fraction of the path's point sequence.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OrdinalStop {
    /// Progress at which an entity reaches this stop.
    pub progress: f64,
    /// Fraction of the point sequence in `[0, 1]`.
    pub fraction: f64,
}

/// Rank-proportional milestone spacing along the path's point sequence.
///
/// Milestone `k` of `n` (rank order) sits at fraction `k / n`; the final milestone is the
/// destination and its marker sits at `1.0`. Entities reach fraction `k / n` at milestone
/// `k`'s threshold and travel between consecutive stops in proportion to their progress.
/// The open stretch from the final milestone's threshold (fraction `(n - 1) / n`) into the
/// terminal point spans `trailing_span` progress, so entities beyond every declared milestone
/// keep moving instead of snapping to the end.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalLayout {
    anchor_fractions: Vec<f64>,
    stops: Vec<OrdinalStop>,
}

impl OrdinalLayout {
    /// Build the layout for milestones already sorted by rank.
    pub fn new(sorted: &[Milestone], trailing_span: f64) -> Self {
        let n = sorted.len();
        let anchor_fractions: Vec<f64> = (0..n).map(|k| Self::anchor_fraction(k, n)).collect();

        let mut stops: Vec<OrdinalStop> = sorted
            .iter()
            .enumerate()
            .map(|(k, m)| OrdinalStop {
                progress: m.required_progress,
                fraction: k as f64 / n as f64,
            })
            .collect();
        if let Some(last) = sorted.last() {
            stops.push(OrdinalStop {
                progress: last.required_progress + trailing_span,
                fraction: 1.0,
            });
        }

        Self {
            anchor_fractions,
            stops,
        }
    }

    /// Sequence fraction for the milestone at rank position `k` of `n`.
    pub fn anchor_fraction(k: usize, n: usize) -> f64 {
        if n == 0 || k + 1 >= n {
            return 1.0;
        }
        k as f64 / n as f64
    }

    /// Anchor fractions in rank order.
    pub fn anchor_fractions(&self) -> &[f64] {
        &self.anchor_fractions
    }

    /// Progress stops entities travel between.
    pub fn stops(&self) -> &[OrdinalStop] {
        &self.stops
    }

    /// Sequence fraction reached by an entity with `progress`.
    pub fn fraction_for(&self, progress: f64) -> f64 {
        let Some(first) = self.stops.first() else {
            return 0.0;
        };
        if self.stops.len() == 1 || progress.is_nan() {
            return first.fraction;
        }

        // First segment whose end the entity has not yet reached; past every stop the final
        // segment is used and saturates at its end.
        let segments = self.stops.len() - 1;
        let seg = (0..segments)
            .find(|&i| progress < self.stops[i + 1].progress)
            .unwrap_or(segments - 1);

        let a = self.stops[seg];
        let b = self.stops[seg + 1];
        let span = b.progress - a.progress;
        let t = if span > 0.0 {
            ((progress - a.progress) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        a.fraction + t * (b.fraction - a.fraction)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/milestone/ordinal.rs"]
mod tests;
