use std::cell::Cell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::foundation::core::ContainerSize;
use crate::scene::tree::ImageSource;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn container() -> Container {
    Container::new(ContainerSize::new(480.0, 350.0))
}

fn build(options: WidgetOptions) -> ChartWidget {
    let mut styles = StyleRegistry::new();
    let mut rng = StdRng::seed_from_u64(7);
    ChartWidget::with_rng(options, &mut styles, ms(0), &mut rng).unwrap()
}

fn drive(w: &mut ChartWidget, from: u64, until: u64) {
    let mut t = from;
    while t < until {
        w.tick(ms(t));
        t += 16;
    }
    w.tick(ms(until));
}

#[test]
fn missing_container_is_rejected() {
    let mut styles = StyleRegistry::new();
    let err = ChartWidget::new(WidgetOptions::default(), &mut styles, ms(0)).unwrap_err();
    assert!(matches!(err, ChartError::InvalidArgument(_)));
    assert!(styles.is_empty());
}

#[test]
fn invalid_tuning_mounts_nothing() {
    let c = container();
    let mut tuning = Tuning::default();
    tuning.scatter.default_item_count = 0;
    let mut styles = StyleRegistry::new();
    let options = WidgetOptions::new(c.clone()).with_tuning(tuning);
    let err = ChartWidget::new(options, &mut styles, ms(0)).unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
    assert_eq!(c.mounted_count(), 0);
    assert_eq!(c.listener_count(), 0);
}

#[test]
fn stylesheet_is_registered_once_per_registry() {
    let mut styles = StyleRegistry::new();
    let a = ChartWidget::new(WidgetOptions::new(container()), &mut styles, ms(0)).unwrap();
    let b = ChartWidget::new(WidgetOptions::new(container()), &mut styles, ms(0)).unwrap();
    assert_eq!(styles.len(), 1);
    assert!(!a.is_destroyed() && !b.is_destroyed());
}

#[test]
fn item_count_follows_images() {
    let w = build(WidgetOptions::new(container()).with_images(["a.png", "b.png", "c.png"]));
    let scene = w.snapshot().unwrap();
    assert_eq!(scene.items.len(), 3);
    assert_eq!(w.positions().len(), 3);
    assert!(matches!(scene.items[2].source, ImageSource::Url(ref u) if u == "c.png"));

    let w = build(WidgetOptions::new(container()));
    assert_eq!(w.snapshot().unwrap().items.len(), 7);
}

#[test]
fn auto_play_off_waits_for_start() {
    let mut w = build(WidgetOptions::new(container()).with_auto_play(false));
    drive(&mut w, 0, 3000);
    assert_eq!(w.phase(), AnimationPhase::Idle);
    assert_eq!(w.next_deadline(), None);

    w.start_animation();
    assert_eq!(w.phase(), AnimationPhase::ScatterRevealing);
    assert!(w.snapshot().unwrap().items.iter().all(|i| i.animated));
}

#[test]
fn auto_play_runs_to_completion_once() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let mut w =
        build(WidgetOptions::new(container()).on_complete(move || seen.set(seen.get() + 1)));

    drive(&mut w, 0, 2800);
    assert_eq!(w.phase(), AnimationPhase::SeparatingSectors);
    assert!((w.displayed_percentage() - 75.0).abs() < 1e-9);
    let scene = w.snapshot().unwrap();
    assert!(scene.chart.revealed);
    assert_eq!(scene.chart.sectors.percentage, 75.0);
    assert_ne!(scene.chart.offsets.a, crate::foundation::core::Vec2::ZERO);

    drive(&mut w, 2800, 6000);
    assert_eq!(w.phase(), AnimationPhase::Complete);
    assert_eq!(calls.get(), 1);
}

#[test]
fn custom_pie_tuning_shapes_the_first_paint() {
    let mut tuning = Tuning::default();
    tuning.pie.view_box = 100.0;
    tuning.pie.center_x = 50.0;
    tuning.pie.center_y = 50.0;
    tuning.pie.radius = 40.0;
    let w = build(
        WidgetOptions::new(container())
            .with_auto_play(false)
            .with_tuning(tuning.clone()),
    );
    let scene = w.snapshot().unwrap();
    let expected = crate::chart::sector::PieGeometry::from_tuning(&tuning.pie).sectors(0.0);
    assert_eq!(scene.chart.sectors, expected);
}

#[test]
fn resize_relayouts_after_debounce() {
    let c = container();
    let mut w = build(WidgetOptions::new(c.clone()).with_auto_play(false));
    w.start_animation();

    c.resize(ContainerSize::new(1000.0, 800.0), ms(100));
    w.tick(ms(150));
    assert_eq!(w.dimensions().modal_width, 480.0);
    c.resize(ContainerSize::new(900.0, 800.0), ms(160));
    w.tick(ms(200));
    w.tick(ms(259));
    assert_eq!(w.dimensions().modal_width, 480.0);
    w.tick(ms(260));
    assert_eq!(w.dimensions().modal_width, 900.0);

    let bounds = w.tuning().scatter.bounds;
    let scene = w.snapshot().unwrap();
    assert_eq!(scene.dims.modal_width, 900.0);
    for (item, pos) in scene.items.iter().zip(w.positions()) {
        assert_eq!(item.final_offset, pos.bounded(&bounds));
        assert_eq!(item.transform.offset, pos.bounded(&bounds));
    }
}

#[test]
fn destroy_detaches_but_timers_keep_running() {
    let c = container();
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let mut w = build(WidgetOptions::new(c.clone()).on_complete(move || seen.set(seen.get() + 1)));

    drive(&mut w, 0, 1500);
    w.destroy();
    w.destroy();
    assert!(w.is_destroyed());
    assert_eq!(c.mounted_count(), 0);
    assert_eq!(c.listener_count(), 0);
    assert!(w.snapshot().is_none());

    c.resize(ContainerSize::new(1000.0, 800.0), ms(1600));
    drive(&mut w, 1500, 6000);
    assert_eq!(w.dimensions().modal_width, 480.0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn host_clearing_the_container_is_tolerated() {
    let c = container();
    let mut w = build(WidgetOptions::new(c.clone()));
    drive(&mut w, 0, 1000);
    c.clear();
    drive(&mut w, 1000, 3000);
    assert_eq!(w.phase(), AnimationPhase::SeparatingSectors);
    assert!(w.snapshot().is_none());
}
