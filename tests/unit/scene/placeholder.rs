use super::*;
use crate::foundation::config::Tuning;
use crate::foundation::core::ContainerSize;

#[test]
fn placeholder_is_sized_from_dimensions() {
    let tuning = Tuning::default();
    let dims = Dimensions::resolve(ContainerSize::new(480.0, 350.0), &tuning);
    let p = placeholder(2, &dims, &tuning.layout);
    assert_eq!(p.label, "Image 3");
    // 70 * 0.55 = 38.5 -> 39; font max(10, round(108 * 0.08 = 8.64)) = 10.
    assert!(p.svg.contains(r#"width="108" height="39""#));
    assert!(p.svg.contains(r#"font-size="10""#));
    assert!(p.svg.contains(">Image 3</text>"));
}

#[test]
fn large_cards_get_larger_labels() {
    let tuning = Tuning::default();
    let dims = Dimensions::resolve(ContainerSize::new(2000.0, 1000.0), &tuning);
    let p = placeholder(0, &dims, &tuning.layout);
    assert!(p.svg.contains(r#"font-size="12""#));
}
