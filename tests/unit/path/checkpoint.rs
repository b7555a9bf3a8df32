use super::*;

fn three_point_table() -> CheckpointTable {
    CheckpointTable::from_pairs([
        (1000, (0.0, 100.0)),
        (0, (0.0, 0.0)),
        (500, (10.0, 50.0)),
    ])
    .unwrap()
}

#[test]
fn new_sorts_by_progress() {
    let table = three_point_table();
    let order: Vec<i64> = table.checkpoints().iter().map(|c| c.progress).collect();
    assert_eq!(order, vec![0, 500, 1000]);
    assert_eq!(table.min_progress(), 0);
    assert_eq!(table.max_progress(), 1000);
    assert_eq!(table.last().position, Point::new(0.0, 100.0));
}

#[test]
fn fewer_than_two_checkpoints_is_invalid() {
    let err = CheckpointTable::new(vec![]).unwrap_err();
    assert!(matches!(err, TrailError::InvalidPath(_)));

    let err = CheckpointTable::new(vec![Checkpoint::new(0, 1.0, 1.0)]).unwrap_err();
    assert!(err.to_string().contains("at least 2"));
}

#[test]
fn duplicate_progress_is_invalid() {
    let err = CheckpointTable::from_pairs([(0, (0.0, 0.0)), (10, (1.0, 1.0)), (10, (2.0, 2.0))])
        .unwrap_err();
    assert!(matches!(err, TrailError::InvalidPath(ref m) if m.contains("duplicate")));
}

#[test]
fn non_finite_position_is_invalid() {
    let err = CheckpointTable::from_pairs([(0, (0.0, f64::NAN)), (10, (1.0, 1.0))]).unwrap_err();
    assert!(matches!(err, TrailError::InvalidPath(_)));
}

#[test]
fn deserialize_goes_through_validation() {
    let ok: CheckpointTable = serde_json::from_str(
        r#"[{"progress":10,"position":{"x":1.0,"y":2.0}},{"progress":0,"position":{"x":0.0,"y":0.0}}]"#,
    )
    .unwrap();
    assert_eq!(ok.min_progress(), 0);

    let bad = serde_json::from_str::<CheckpointTable>(
        r#"[{"progress":0,"position":{"x":0.0,"y":0.0}}]"#,
    );
    assert!(bad.is_err());
}

#[test]
fn densify_produces_one_entry_per_integer() {
    let table = CheckpointTable::from_pairs([(0, (0.0, 0.0)), (4, (4.0, 8.0))]).unwrap();
    let dense = table.densify(6);
    assert_eq!(dense.len(), 7);
    assert_eq!(dense[2], Point::new(2.0, 4.0));
    assert_eq!(dense[6], Point::new(4.0, 8.0));
}
