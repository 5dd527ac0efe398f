//! Static SVG snapshots of a scene.
//!
//! The document mirrors what a browser would paint at one instant: item cards over the pie, each
//! sampled mid-transition. Sector overlays stand in for the video textures with flat fills.

use crate::foundation::core::{Affine, Duration, Point, Vec2};
use crate::scene::tree::{ImageSource, ItemNode, SceneTree, SectorSlot};

const BACKGROUND: &str = "#111827";
const CARD_FILL: &str = "#ffffff";
const CARD_RADIUS: f64 = 16.0;
const CARD_PADDING: f64 = 4.0;
const PIE_MAX_SIDE: f64 = 180.0;
const PIE_CHART_RATIO: f64 = 0.375;
const SECTOR_A_STOPS: [(&str, &str); 3] = [("0", "#ff5f6d"), ("0.5", "#ffc371"), ("1", "#47cacc")];
const SECTOR_B_FILL: &str = "#d1d5db";

/// Render `scene` as it appears at logical time `now`.
pub fn render_svg(scene: &SceneTree, now: Duration) -> String {
    let dims = &scene.dims;
    let (w, h) = (dims.modal_width, dims.modal_height);
    let chart_origin = Point::new((w - dims.chart_width) / 2.0, (h - dims.chart_height) / 2.0);
    let chart_center = chart_origin + Vec2::new(dims.chart_width / 2.0, dims.chart_height / 2.0);

    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    ));
    out.push_str(&format!(r#"<rect width="{w}" height="{h}" fill="{BACKGROUND}"/>"#));

    write_pie(&mut out, scene, chart_center, now);

    let card = scene.card_size();
    for item in &scene.items {
        write_item(&mut out, scene, item, chart_center, card, now);
    }

    out.push_str("</svg>");
    out
}

fn write_pie(out: &mut String, scene: &SceneTree, center: Point, now: Duration) {
    let visual = scene.chart_visual(now);
    if visual.opacity <= 0.0 && visual.scale == 0.0 {
        return;
    }
    let side = (scene.dims.chart_width * PIE_CHART_RATIO).min(PIE_MAX_SIDE);
    let xf = Affine::translate(center.to_vec2())
        * Affine::scale(visual.scale)
        * Affine::translate(Vec2::new(-side / 2.0, -side / 2.0));
    let vb = scene.view_box;

    out.push_str(&format!(
        r#"<g class="pie-chart-container" transform="{}" opacity="{}">"#,
        svg_matrix(xf),
        visual.opacity
    ));
    out.push_str(&format!(
        r#"<svg width="{side}" height="{side}" viewBox="0 0 {vb} {vb}"><defs><linearGradient id="overlay-a" x1="0" y1="0" x2="1" y2="1">"#
    ));
    for (offset, color) in SECTOR_A_STOPS {
        out.push_str(&format!(r#"<stop offset="{offset}" stop-color="{color}"/>"#));
    }
    out.push_str("</linearGradient></defs>");

    for overlay in scene.chart.overlays {
        let (d, offset, fill) = match overlay.mask {
            SectorSlot::A => (&scene.chart.sectors.path_a, visual.offset_a, "url(#overlay-a)"),
            SectorSlot::B => (&scene.chart.sectors.path_b, visual.offset_b, SECTOR_B_FILL),
        };
        if d.is_empty() {
            continue;
        }
        let class = match overlay.mask {
            SectorSlot::A => "path-a",
            SectorSlot::B => "path-b",
        };
        out.push_str(&format!(
            r#"<path class="{class}" d="{d}" fill="{fill}" transform="translate({} {})"/>"#,
            offset.x, offset.y
        ));
    }
    out.push_str("</svg></g>");
}

fn write_item(
    out: &mut String,
    scene: &SceneTree,
    item: &ItemNode,
    anchor: Point,
    card: Vec2,
    now: Duration,
) {
    let Some(visual) = scene.item_visual(item.index, now) else {
        return;
    };
    if visual.opacity <= 0.0 || visual.transform.scale == 0.0 {
        return;
    }
    let xf = visual.transform.to_affine(anchor, card, card);
    out.push_str(&format!(
        r#"<g class="animated-image" transform="{}" opacity="{}">"#,
        svg_matrix(xf),
        visual.opacity
    ));
    out.push_str(&format!(
        r#"<rect width="{}" height="{}" rx="{CARD_RADIUS}" fill="{CARD_FILL}"/>"#,
        card.x, card.y
    ));

    let inner = Vec2::new(
        (card.x - 2.0 * CARD_PADDING).max(0.0),
        (card.y - 2.0 * CARD_PADDING).max(0.0),
    );
    match &item.source {
        ImageSource::Url(url) => {
            out.push_str(&format!(
                r#"<image x="{CARD_PADDING}" y="{CARD_PADDING}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice" href="{}"/>"#,
                inner.x,
                inner.y,
                escape_xml(url)
            ));
        }
        ImageSource::Placeholder(p) => {
            // Nested document keeps its own viewport; place it inside the card padding.
            if let Some(rest) = p.svg.strip_prefix("<svg ") {
                out.push_str(&format!(r#"<svg x="{CARD_PADDING}" y="{CARD_PADDING}" {rest}"#));
            }
        }
    }
    out.push_str("</g>");
}

fn svg_matrix(xf: Affine) -> String {
    let [a, b, c, d, e, f] = xf.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
