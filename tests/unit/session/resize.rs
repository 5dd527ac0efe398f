use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn burst_collapses_to_one_relayout() {
    let mut rc = ResizeCoordinator::new(ms(100));
    rc.notify(1, ms(0));
    rc.notify(2, ms(40));
    rc.notify(3, ms(80));
    assert!(!rc.poll(ms(100)));
    assert!(!rc.poll(ms(179)));
    assert!(rc.poll(ms(180)));
    assert!(!rc.poll(ms(500)));
    assert_eq!(rc.relayout_count(), 1);
}

#[test]
fn stale_sequence_numbers_do_not_rearm() {
    let mut rc = ResizeCoordinator::new(ms(100));
    rc.notify(1, ms(0));
    assert!(rc.poll(ms(100)));
    rc.notify(1, ms(0));
    assert_eq!(rc.deadline(), None);
}

#[test]
fn cancel_drops_pending_deadline() {
    let mut rc = ResizeCoordinator::new(ms(100));
    rc.notify(1, ms(0));
    rc.cancel();
    assert!(!rc.poll(ms(1000)));
    assert_eq!(rc.relayout_count(), 0);
}

#[test]
fn offsets_are_bounded_per_axis() {
    let bounds = OffsetBounds::default();
    let positions = [
        ScatterPosition {
            x_percent: -1000.0,
            y_percent: 10.0,
            rotation_deg: 0.0,
            delay_secs: 0.0,
        },
        ScatterPosition {
            x_percent: 200.0,
            y_percent: -200.0,
            rotation_deg: 0.0,
            delay_secs: 0.0,
        },
    ];
    assert_eq!(
        bounded_offsets(&positions, &bounds),
        vec![PercentOffset::new(-810.0, 10.0), PercentOffset::new(180.0, -180.0)]
    );
}
