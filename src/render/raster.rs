use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Duration;
use crate::foundation::error::{ChartError, ChartResult};
use crate::render::svg::render_svg;
use crate::scene::tree::SceneTree;

const MAX_DIM: u32 = 16_384;

/// Options for rasterizing snapshot documents.
#[derive(Clone, Debug)]
pub struct RasterOptions {
    /// Directory relative image references resolve against.
    pub resources_dir: Option<PathBuf>,
    /// Load system fonts so placeholder labels render.
    pub system_fonts: bool,
    /// Uniform scale applied to the document size.
    pub scale: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            resources_dir: None,
            system_fonts: true,
            scale: 1.0,
        }
    }
}

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8, not premultiplied.
    pub rgba8: Vec<u8>,
}

impl RasterFrame {
    /// Pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> ChartResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.rgba8.clone())
            .ok_or_else(|| ChartError::render("pixel buffer does not match frame size"))?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode png")?;
        Ok(buf)
    }
}

/// Rasterize an SVG document.
#[tracing::instrument(skip(svg, opts), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str, opts: &RasterOptions) -> ChartResult<RasterFrame> {
    let mut usvg_opts = usvg::Options {
        resources_dir: opts.resources_dir.clone(),
        ..Default::default()
    };
    if opts.system_fonts {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        usvg_opts.fontdb = Arc::new(db);
    }
    let tree = usvg::Tree::from_str(svg, &usvg_opts)
        .map_err(|e| ChartError::render(format!("parse snapshot svg: {e}")))?;

    let scale = if opts.scale.is_finite() && opts.scale > 0.0 {
        opts.scale
    } else {
        1.0
    };
    let width = to_px(tree.size().width() * scale)?;
    let height = to_px(tree.size().height() * scale)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ChartError::render("failed to allocate snapshot pixmap"))?;
    let sx = width as f32 / tree.size().width();
    let sy = height as f32 / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba8);
    tracing::debug!(width, height, "snapshot rasterized");
    Ok(RasterFrame {
        width,
        height,
        rgba8,
    })
}

/// Rasterize an SVG document straight to PNG bytes.
pub fn rasterize_png(svg: &str, opts: &RasterOptions) -> ChartResult<Vec<u8>> {
    rasterize_svg(svg, opts)?.encode_png()
}

/// Render `scene` at `now` and rasterize it.
pub fn render_frame(
    scene: &SceneTree,
    now: Duration,
    opts: &RasterOptions,
) -> ChartResult<RasterFrame> {
    rasterize_svg(&render_svg(scene, now), opts)
}

/// Render `scene` at `now` straight to PNG bytes.
pub fn render_png(scene: &SceneTree, now: Duration, opts: &RasterOptions) -> ChartResult<Vec<u8>> {
    render_frame(scene, now, opts)?.encode_png()
}

fn to_px(v: f32) -> ChartResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ChartError::render("snapshot has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(ChartError::render(format!(
            "snapshot size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
