use super::*;

#[test]
fn portrait_requires_strictly_taller() {
    assert!(Viewport::new(400.0, 900.0).is_portrait());
    assert!(!Viewport::new(1600.0, 900.0).is_portrait());
    assert!(!Viewport::new(500.0, 500.0).is_portrait());
}

#[test]
fn unusable_viewports_are_detected() {
    assert!(Viewport::new(1.0, 1.0).is_usable());
    assert!(!Viewport::new(0.0, 600.0).is_usable());
    assert!(!Viewport::new(800.0, f64::NAN).is_usable());
    assert!(!Viewport::new(-5.0, 600.0).is_usable());
}
