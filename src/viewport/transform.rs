use crate::{
    foundation::core::{Point, Viewport},
    foundation::error::{TrailError, TrailResult},
};

/// Fixed design-space extents of the trail artwork.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DesignSpace {
    /// Horizontal extent of the usable trail region (fit-width policy).
    pub trail_width: f64,
    /// Full design canvas width (cover policy).
    pub width: f64,
    /// Full design canvas height (cover policy).
    pub height: f64,
}

impl Default for DesignSpace {
    fn default() -> Self {
        Self {
            trail_width: 650.0,
            width: 1000.0,
            height: 800.0,
        }
    }
}

impl DesignSpace {
    /// Check that every extent is finite and positive.
    pub fn validate(&self) -> TrailResult<()> {
        for (name, v) in [
            ("trail_width", self.trail_width),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(TrailError::validation(format!(
                    "design space {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Scaling policy chosen from the viewport's orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalePolicy {
    /// Portrait: the trail region spans the viewport width.
    FitWidth,
    /// Landscape (and square): the design canvas covers the viewport, no letterboxing.
    Cover,
}

impl ScalePolicy {
    /// Policy for `viewport`.
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_portrait() {
            Self::FitWidth
        } else {
            Self::Cover
        }
    }
}

/// Maps design-space points to screen pixels with a uniform scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportTransform {
    design: DesignSpace,
}

impl ViewportTransform {
    /// Create a transform for `design`.
    pub fn new(design: DesignSpace) -> Self {
        Self { design }
    }

    /// Design space in use.
    pub fn design(&self) -> DesignSpace {
        self.design
    }

    /// Uniform scale for `viewport`. Unusable viewports scale to `0`.
    pub fn scale_for(&self, viewport: Viewport) -> f64 {
        if !viewport.is_usable() {
            return 0.0;
        }
        match ScalePolicy::for_viewport(viewport) {
            ScalePolicy::FitWidth => viewport.width / self.design.trail_width,
            ScalePolicy::Cover => (viewport.width / self.design.width)
                .max(viewport.height / self.design.height),
        }
    }

    /// Scale `point` into screen space. Both axes use the same factor.
    pub fn to_screen(&self, point: Point, scale: f64) -> Point {
        Point::new(point.x * scale, point.y * scale)
    }
}

/// Current viewport plus its derived scale.
///
/// The host calls [`ViewportState::on_resize`] from its resize notification; the scale is
/// recomputed synchronously so it is never stale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    transform: ViewportTransform,
    viewport: Viewport,
    scale: f64,
}

impl ViewportState {
    /// Initial state for `viewport`.
    pub fn new(transform: ViewportTransform, viewport: Viewport) -> Self {
        Self {
            transform,
            viewport,
            scale: transform.scale_for(viewport),
        }
    }

    /// Replace the viewport and recompute the scale.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scale = self.transform.scale_for(viewport);
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            scale = self.scale,
            "viewport resized"
        );
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current scaling policy.
    pub fn policy(&self) -> ScalePolicy {
        ScalePolicy::for_viewport(self.viewport)
    }

    /// Map a design-space point with the current scale.
    pub fn to_screen(&self, point: Point) -> Point {
        self.transform.to_screen(point, self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/transform.rs"]
mod tests;
