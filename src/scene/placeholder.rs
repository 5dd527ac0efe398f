use crate::foundation::config::LayoutTuning;
use crate::foundation::math::round_half_up;
use crate::layout::dimensions::Dimensions;

/// Stand-in artwork for an item that has no image source.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placeholder {
    /// Zero-based item index.
    pub index: usize,
    /// Visible label (`Image N`, one-based).
    pub label: String,
    /// Self-contained SVG document.
    pub svg: String,
}

/// Build the placeholder for item `index` sized from the current dimensions.
pub fn placeholder(index: usize, dims: &Dimensions, layout: &LayoutTuning) -> Placeholder {
    let width = dims.image_width;
    let height = round_half_up(dims.image_height * layout.placeholder_height_ratio);
    let font_size =
        round_half_up(width * layout.placeholder_font_ratio).max(layout.placeholder_min_font);
    let label = format!("Image {}", index + 1);
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r##"<rect width="{w}" height="{h}" fill="#f3f4f6"/>"##,
            r##"<text x="{cx}" y="{cy}" text-anchor="middle" dy=".3em" fill="#9ca3af" font-family="Arial, sans-serif" font-size="{fs}">{label}</text>"##,
            "</svg>"
        ),
        w = width,
        h = height,
        cx = round_half_up(width / 2.0),
        cy = round_half_up(height / 2.0),
        fs = font_size,
        label = label,
    );
    Placeholder { index, label, svg }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/placeholder.rs"]
mod tests;
