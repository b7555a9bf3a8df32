use super::*;
use crate::foundation::core::Point;

#[test]
fn parses_and_sorts_valid_lines() {
    let text = "500,10,50\n0,0,0\n\n1000, 0.0 , 100.5\n";
    let report = parse_checkpoints(text, &IngestOptions::default()).unwrap();
    let progress: Vec<i64> = report
        .table
        .checkpoints()
        .iter()
        .map(|c| c.progress)
        .collect();
    assert_eq!(progress, vec![0, 500, 1000]);
    assert_eq!(report.table.last().position, Point::new(0.0, 100.5));
    assert!(report.malformed_lines.is_empty());
}

#[test]
fn malformed_lines_are_discarded_and_reported() {
    let text = "0,0,0\nnot,a,line\n5,1\n7.5,1,1\n10,1,1\n";
    let report = parse_checkpoints(text, &IngestOptions::default()).unwrap();
    assert_eq!(report.table.len(), 2);
    assert_eq!(report.malformed_lines, vec![2, 3, 4]);
}

#[test]
fn max_progress_window_discards_out_of_range() {
    let opts = IngestOptions {
        max_progress: Some(1000),
        ..IngestOptions::default()
    };
    let text = "-1,0,0\n0,0,0\n1000,1,1\n1001,2,2\n";
    let report = parse_checkpoints(text, &opts).unwrap();
    assert_eq!(report.table.len(), 2);
    assert_eq!(report.malformed_lines, vec![1, 4]);
}

#[test]
fn duplicates_are_rejected_by_default() {
    let text = "0,0,0\n10,1,1\n10,2,2\n";
    let err = parse_checkpoints(text, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, TrailError::InvalidPath(ref m) if m.contains("lines 2 and 3")));
}

#[test]
fn duplicates_can_be_flagged_instead() {
    let opts = IngestOptions {
        duplicates: DuplicatePolicy::Flag,
        ..IngestOptions::default()
    };
    let text = "0,0,0\n10,1,1\n10,2,2\n";
    let report = parse_checkpoints(text, &opts).unwrap();
    assert_eq!(report.table.len(), 2);
    assert_eq!(report.table.last().position, Point::new(1.0, 1.0));
    assert_eq!(
        report.duplicates,
        vec![DuplicateLine {
            progress: 10,
            first_line: 2,
            line: 3
        }]
    );
}

#[test]
fn too_few_valid_lines_is_invalid_path() {
    let err = parse_checkpoints("0,0,0\ngarbage\n", &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, TrailError::InvalidPath(_)));
}
