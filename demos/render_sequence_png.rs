use std::path::PathBuf;

use anyhow::Context;
use chartburst::{
    ChartWidget, Container, ContainerSize, Duration, RasterOptions, StyleRegistry, WidgetOptions,
    render_png,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/chartburst-frames"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let container = Container::new(ContainerSize::new(480.0, 350.0));
    let mut styles = StyleRegistry::new();
    let mut widget = ChartWidget::new(
        WidgetOptions::new(container.clone())
            .with_percentage(75.0)
            .on_complete(|| tracing::info!("animation complete")),
        &mut styles,
        Duration::ZERO,
    )?;

    let opts = RasterOptions::default();
    let frame_step = Duration::from_millis(100);
    for frame in 0..50u32 {
        let now = frame_step * frame;
        widget.tick(now);
        let Some(scene) = widget.snapshot() else {
            break;
        };
        let png = render_png(&scene, now, &opts)?;
        let path = out_dir.join(format!("frame_{frame:03}.png"));
        std::fs::write(&path, png).with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!(
        "wrote frames to {} (phase {:?}, {:.1}%)",
        out_dir.display(),
        widget.phase(),
        widget.displayed_percentage()
    );
    Ok(())
}
