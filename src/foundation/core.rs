pub use kurbo::{Point, Size, Vec2};

/// Live viewport dimensions in screen pixels.
///
/// Owned by the host; replaced wholesale on every resize notification.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from its pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when the viewport is strictly taller than wide.
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    /// `true` when both dimensions are finite and strictly positive.
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Dimensions as a kurbo [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
