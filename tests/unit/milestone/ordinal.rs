use super::*;

fn lessons() -> Vec<Milestone> {
    vec![
        Milestone::new("L1", 1, 0.0),
        Milestone::new("L2", 2, 50.0),
        Milestone::new("L3", 3, 150.0),
        Milestone::new("L4", 4, 300.0),
    ]
}

#[test]
fn anchors_are_rank_proportional_with_terminal_final() {
    let layout = OrdinalLayout::new(&lessons(), 100.0);
    assert_eq!(layout.anchor_fractions(), &[0.0, 0.25, 0.5, 1.0]);
}

#[test]
fn entity_fraction_interpolates_between_milestone_thresholds() {
    let layout = OrdinalLayout::new(&lessons(), 100.0);
    assert_eq!(layout.fraction_for(0.0), 0.0);
    assert_eq!(layout.fraction_for(25.0), 0.125);
    assert_eq!(layout.fraction_for(50.0), 0.25);
    assert_eq!(layout.fraction_for(100.0), 0.375);
}

#[test]
fn final_stretch_uses_trailing_span() {
    let layout = OrdinalLayout::new(&lessons(), 100.0);
    let stops: Vec<(f64, f64)> = layout.stops().iter().map(|s| (s.progress, s.fraction)).collect();
    assert_eq!(
        stops,
        vec![(0.0, 0.0), (50.0, 0.25), (150.0, 0.5), (300.0, 0.75), (400.0, 1.0)]
    );
    assert_eq!(layout.fraction_for(300.0), 0.75);
    assert_eq!(layout.fraction_for(350.0), 0.875);
    assert_eq!(layout.fraction_for(400.0), 1.0);
    assert_eq!(layout.fraction_for(10_000.0), 1.0);
}

#[test]
fn final_threshold_paces_its_own_segment() {
    let ms = vec![
        Milestone::new("L1", 1, 0.0),
        Milestone::new("L2", 2, 50.0),
        Milestone::new("L3", 3, 1000.0),
    ];
    let layout = OrdinalLayout::new(&ms, 100.0);

    assert_eq!(layout.fraction_for(1000.0), 2.0 / 3.0);
    let halfway = layout.fraction_for(525.0);
    assert!((halfway - 0.5).abs() < 1e-12, "halfway={halfway}");
    let trailing = layout.fraction_for(1050.0);
    assert!((trailing - 5.0 / 6.0).abs() < 1e-12, "trailing={trailing}");
    assert_eq!(layout.fraction_for(1100.0), 1.0);
    // The marker still sits on the terminal point.
    assert_eq!(layout.anchor_fractions()[2], 1.0);
}

#[test]
fn progress_below_first_threshold_stays_at_first_stop() {
    let ms = vec![Milestone::new("a", 1, 20.0), Milestone::new("b", 2, 40.0)];
    let layout = OrdinalLayout::new(&ms, 10.0);
    assert_eq!(layout.fraction_for(-5.0), 0.0);
    assert_eq!(layout.fraction_for(20.0), 0.0);
}

#[test]
fn non_increasing_thresholds_count_as_completed_segments() {
    let ms = vec![
        Milestone::new("a", 1, 10.0),
        Milestone::new("b", 2, 10.0),
        Milestone::new("c", 3, 30.0),
    ];
    let layout = OrdinalLayout::new(&ms, 100.0);
    let f = layout.fraction_for(10.0);
    assert!((f - 1.0 / 3.0).abs() < 1e-12, "f={f}");
}

#[test]
fn single_and_empty_sequences() {
    let one = OrdinalLayout::new(&[Milestone::new("only", 1, 10.0)], 100.0);
    assert_eq!(one.anchor_fractions(), &[1.0]);
    assert_eq!(one.fraction_for(10.0), 0.0);
    assert_eq!(one.fraction_for(60.0), 0.5);

    let none = OrdinalLayout::new(&[], 100.0);
    assert!(none.anchor_fractions().is_empty());
    assert_eq!(none.fraction_for(500.0), 0.0);
}
