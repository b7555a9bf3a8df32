use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = TrailConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, TrailConfig::default());
    assert_eq!(cfg.trailing_span, DEFAULT_TRAILING_SPAN);
    assert_eq!(cfg.milestone_mode, None);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = TrailConfig::from_json_str(
        r#"{"milestone_mode":"ordinal","collision":{"directions":6},"design":{"trail_width":500}}"#,
    )
    .unwrap();
    assert_eq!(cfg.milestone_mode, Some(PlacementMode::Ordinal));
    assert_eq!(cfg.collision.directions, 6);
    assert_eq!(cfg.collision.offset_distance, CollisionResolver::default().offset_distance);
    assert_eq!(cfg.design.trail_width, 500.0);
    assert_eq!(cfg.design.width, DesignSpace::default().width);
}

#[test]
fn zero_directions_is_rejected() {
    let err = TrailConfig::from_json_str(r#"{"collision":{"directions":0}}"#).unwrap_err();
    assert!(matches!(err, TrailError::Validation(_)));
}

#[test]
fn negative_trailing_span_is_rejected() {
    let err = TrailConfig::from_json_str(r#"{"trailing_span":-1}"#).unwrap_err();
    assert!(err.to_string().contains("trailing_span"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = TrailConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, TrailError::Serde(_)));
}
