use super::*;

fn anchor(id: &str, x: f64, y: f64) -> MilestoneAnchor {
    MilestoneAnchor {
        id: id.to_string(),
        ordinal_rank: 0,
        position: Point::new(x, y),
    }
}

#[test]
fn far_entities_pass_through_unmodified() {
    let r = CollisionResolver::default();
    let anchors = [anchor("m1", 0.0, 0.0)];
    let raw = Point::new(100.0, 100.0);
    assert_eq!(r.resolve("alice", raw, &anchors), raw);
    assert_eq!(r.resolve("alice", raw, &[]), raw);
}

#[test]
fn overlapping_entity_moves_by_offset_distance() {
    let r = CollisionResolver::default();
    let anchors = [anchor("m1", 10.0, 10.0)];
    let raw = Point::new(12.0, 10.0);
    let out = r.resolve_detailed("bob", raw, &anchors);
    assert_eq!(out.displaced_from.as_deref(), Some("m1"));
    assert!((raw.distance(out.position) - DEFAULT_OFFSET_DISTANCE).abs() < 1e-9);
}

#[test]
fn bucket_zero_points_along_positive_x() {
    let r = CollisionResolver::default();
    assert_eq!(r.bucket_for("s2"), 0);
    let out = r.resolve("s2", Point::new(0.0, 0.0), &[anchor("m", 0.0, 0.0)]);
    assert_eq!(out, Point::new(DEFAULT_OFFSET_DISTANCE, 0.0));
}

#[test]
fn bucket_angles_follow_fnv1a() {
    let r = CollisionResolver::default();
    assert_eq!(r.bucket_for("alice"), 7);
    assert_eq!(r.bucket_for("bob"), 4);
    assert_eq!(r.bucket_for("carol"), 2);

    let v = r.offset_for("bob");
    assert!((v.x + DEFAULT_OFFSET_DISTANCE).abs() < 1e-9);
    assert!(v.y.abs() < 1e-9);
}

#[test]
fn resolution_is_stable_across_calls() {
    let r = CollisionResolver::default();
    let anchors = [anchor("m1", 0.0, 0.0)];
    let raw = Point::new(1.0, 1.0);
    let a = r.resolve("carol", raw, &anchors);
    let b = r.resolve("carol", raw, &anchors);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
}

#[test]
fn distinct_ids_spread_across_buckets() {
    let r = CollisionResolver::default();
    let buckets: std::collections::BTreeSet<u32> =
        (0..16).map(|i| r.bucket_for(&format!("s{i}"))).collect();
    assert_eq!(buckets.len(), 8);
    assert_ne!(r.offset_for("alice"), r.offset_for("bob"));
}

#[test]
fn nearest_anchor_wins() {
    let r = CollisionResolver::default();
    let anchors = [anchor("far", 20.0, 0.0), anchor("near", 3.0, 0.0)];
    let out = r.resolve_detailed("alice", Point::new(0.0, 0.0), &anchors);
    assert_eq!(out.displaced_from.as_deref(), Some("near"));
}

#[test]
fn radius_boundary_is_exclusive() {
    let r = CollisionResolver {
        proximity_radius: 5.0,
        ..CollisionResolver::default()
    };
    let anchors = [anchor("m", 5.0, 0.0)];
    assert!(r.nearest_colliding(Point::new(0.0, 0.0), &anchors).is_none());
}
