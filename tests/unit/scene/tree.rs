use super::*;
use crate::chart::sector::PieGeometry;
use crate::foundation::core::ContainerSize;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn fixture(images: &[String]) -> SceneTree {
    let tuning = Tuning::default();
    let dims = Dimensions::resolve(ContainerSize::new(480.0, 350.0), &tuning);
    let positions = vec![
        ScatterPosition {
            x_percent: 30.0,
            y_percent: -20.0,
            rotation_deg: 10.0,
            delay_secs: 0.0,
        },
        ScatterPosition {
            x_percent: -900.0,
            y_percent: 250.0,
            rotation_deg: -5.0,
            delay_secs: 0.1,
        },
    ];
    build_scene(dims, &positions, images, &tuning)
}

#[test]
fn missing_and_empty_images_become_placeholders() {
    let scene = fixture(&["a.png".to_owned(), String::new()]);
    assert_eq!(scene.items[0].source, ImageSource::Url("a.png".to_owned()));
    match &scene.items[1].source {
        ImageSource::Placeholder(p) => assert_eq!(p.label, "Image 2"),
        other => panic!("unexpected source {other:?}"),
    }
}

#[test]
fn initial_sectors_follow_the_tuned_pie() {
    let mut tuning = Tuning::default();
    tuning.pie.view_box = 100.0;
    tuning.pie.center_x = 50.0;
    tuning.pie.center_y = 50.0;
    tuning.pie.radius = 40.0;
    let dims = Dimensions::resolve(ContainerSize::new(480.0, 350.0), &tuning);
    let scene = build_scene(dims, &[], &[], &tuning);
    let expected = PieGeometry::from_tuning(&tuning.pie).sectors(0.0);
    assert_eq!(scene.chart.sectors, expected);
    assert_ne!(scene.chart.sectors, PieGeometry::from_tuning(&Tuning::default().pie).sectors(0.0));
}

#[test]
fn items_start_hidden_and_collapsed() {
    let scene = fixture(&[]);
    let v = scene.item_visual(0, ms(10_000)).unwrap();
    assert_eq!(v.opacity, 0.0);
    assert_eq!(v.transform, ItemTransform::collapsed());
    assert_eq!(scene.items[1].final_offset, PercentOffset::new(-900.0, 250.0));
}

#[test]
fn reveal_transitions_after_item_delay() {
    let mut scene = fixture(&[]);
    scene.reveal_items(ms(1000));
    assert!(scene.items.iter().all(|i| i.animated));

    // Item 1 has a 100ms delay: still collapsed at 1050ms.
    let waiting = scene.item_visual(1, ms(1050)).unwrap();
    assert_eq!(waiting.transform.scale, 0.0);

    let mid = scene.item_visual(0, ms(1100)).unwrap();
    assert!(mid.transform.scale > 0.0);

    let done = scene.item_visual(1, ms(1400)).unwrap();
    assert_eq!(done.transform.scale, 1.0);
    assert_eq!(done.opacity, 1.0);
    assert_eq!(done.transform.offset, PercentOffset::new(-900.0, 250.0));
}

#[test]
fn relayout_updates_offsets_and_moves_animated_items() {
    let mut scene = fixture(&[]);
    let tuning = Tuning::default();
    let bigger = Dimensions::resolve(ContainerSize::new(800.0, 600.0), &tuning);
    let offsets = [PercentOffset::new(1.0, 2.0), PercentOffset::new(-810.0, 180.0)];

    scene.relayout(bigger, &offsets, ms(0));
    assert_eq!(scene.dims, bigger);
    assert_eq!(scene.items[1].final_offset, offsets[1]);
    // Not animated yet: transform untouched.
    assert_eq!(scene.items[1].transform, ItemTransform::collapsed());

    scene.reveal_items(ms(100));
    scene.relayout(bigger, &[PercentOffset::new(5.0, 5.0)], ms(1000));
    assert_eq!(scene.items[0].transform.offset, PercentOffset::new(5.0, 5.0));
    assert_eq!(scene.items[1].transform.offset, offsets[1]);
    let v = scene.item_visual(0, ms(2000)).unwrap();
    assert_eq!(v.transform.offset, PercentOffset::new(5.0, 5.0));
}

#[test]
fn chart_reveal_scales_from_zero() {
    let mut scene = fixture(&[]);
    assert_eq!(scene.chart_visual(ms(5000)).scale, 0.0);
    scene.reveal_chart(ms(200));
    assert_eq!(scene.chart_visual(ms(200)).scale, 0.0);
    let done = scene.chart_visual(ms(800));
    assert_eq!(done.scale, 1.0);
    assert_eq!(done.opacity, 1.0);

    // A second reveal keeps the first start time.
    scene.reveal_chart(ms(5000));
    assert_eq!(scene.chart.revealed_at, Some(ms(200)));
}

#[test]
fn separation_transitions_between_offsets() {
    let mut scene = fixture(&[]);
    let geom = PieGeometry::default();
    let first = geom.separation(75.0, 6.0);
    scene.separate(first, ms(2200));
    assert_eq!(scene.chart_visual(ms(2200)).offset_a, Vec2::ZERO);
    assert_eq!(scene.chart_visual(ms(2700)).offset_a, first.a);

    let second = geom.separation(40.0, 6.0);
    scene.separate(second, ms(3000));
    assert_eq!(scene.chart_visual(ms(3000)).offset_b, first.b);
    assert_eq!(scene.chart_visual(ms(3500)).offset_b, second.b);
}

#[test]
fn progress_handles_edges() {
    assert_eq!(transition_progress(ms(5), ms(10), ms(100)), 0.0);
    assert_eq!(transition_progress(ms(10), ms(10), Duration::ZERO), 1.0);
    assert!((transition_progress(ms(60), ms(10), ms(100)) - 0.5).abs() < 1e-12);
    assert_eq!(transition_progress(ms(500), ms(10), ms(100)), 1.0);
}
