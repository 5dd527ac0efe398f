use super::*;

#[test]
fn defaults_are_valid() {
    Tuning::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let json = r#"{ "timing": { "sweep_duration_ms": 900 }, "pie": { "radius": 60 } }"#;
    let t = Tuning::from_json_str(json).unwrap();
    assert_eq!(t.timing.sweep_duration_ms, 900);
    assert_eq!(t.timing.sweep_delay_ms, 500);
    assert_eq!(t.pie.radius, 60.0);
    assert_eq!(t.pie.center_x, 90.0);
    assert_eq!(t.scatter, ScatterTuning::default());
}

#[test]
fn sweep_ease_round_trips_through_json() {
    let t = Tuning::from_json_str(r#"{ "timing": { "sweep_ease": "Linear" } }"#).unwrap();
    assert!(matches!(t.timing.sweep_ease, Ease::Linear));
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = Tuning::from_json_str(r#"{ "scatter": { "bounds": { "min_x": 10, "max_x": -10 } } }"#)
        .unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
}

#[test]
fn zero_item_count_is_rejected() {
    let mut t = Tuning::default();
    t.scatter.default_item_count = 0;
    assert!(t.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Tuning::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, ChartError::Serde(_)));
}

#[test]
fn timing_helpers_convert_to_durations() {
    let t = TimingTuning::default();
    assert_eq!(t.completion_delay(), Duration::from_millis(4500));
    assert_eq!(t.resize_debounce(), Duration::from_millis(100));
}
