use super::*;

#[test]
fn degenerate_sizes_are_detected() {
    assert!(ContainerSize::new(0.0, 350.0).is_degenerate());
    assert!(ContainerSize::new(480.0, f64::NAN).is_degenerate());
    assert!(ContainerSize::new(-1.0, 10.0).is_degenerate());
    assert!(!ContainerSize::new(480.0, 350.0).is_degenerate());
}

#[test]
fn lerp_hits_endpoints() {
    let to = ItemTransform {
        offset: PercentOffset::new(40.0, -20.0),
        rotation_deg: 8.0,
        scale: 1.0,
    };
    let from = ItemTransform::collapsed();
    assert_eq!(from.lerp(to, 0.0), from);
    assert_eq!(from.lerp(to, 1.0), to);
    let mid = from.lerp(to, 0.5);
    assert_eq!(mid.offset, PercentOffset::new(20.0, -10.0));
    assert_eq!(mid.scale, 0.5);
}

#[test]
fn collapsed_affine_maps_everything_to_anchor() {
    let a = ItemTransform::collapsed().to_affine(
        Point::new(100.0, 50.0),
        Vec2::new(20.0, 10.0),
        Vec2::new(200.0, 100.0),
    );
    let p = a * Point::new(7.0, 3.0);
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - 50.0).abs() < 1e-9);
}

#[test]
fn offset_resolves_against_percent_base() {
    let t = ItemTransform {
        offset: PercentOffset::new(50.0, -10.0),
        rotation_deg: 0.0,
        scale: 1.0,
    };
    let a = t.to_affine(Point::ZERO, Vec2::new(20.0, 10.0), Vec2::new(200.0, 100.0));
    // Item center lands at the anchor shifted by 50% of 200 and -10% of 100.
    let c = a * Point::new(10.0, 5.0);
    assert!((c.x - 100.0).abs() < 1e-9);
    assert!((c.y + 10.0).abs() < 1e-9);
}
