// File: crates/demo/src/main.rs
// Summary: Demo sweeps the zoom through several decades and writes PNG frames
// showing the minor-grid fade, label precision, and the pointer marker.

use anyhow::{Context, Result};
use std::path::PathBuf;
use supergrid_core::{theme, GridConfig, Point, Transform, ViewState};

fn main() -> Result<()> {
    let out_dir = PathBuf::from(
        std::env::args().nth(1).unwrap_or_else(|| "target/demo_out".to_string()),
    );
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "light".to_string());
    let cfg = GridConfig::with_theme(&theme::find(&theme_name));

    // Sweep across three decades; mid-decade frames show the minor fade.
    let scales = [0.05, 0.2, 0.5, 1.0, 2.0, 5.0, 8.0, 10.0, 20.0, 80.0];
    for (i, &scale) in scales.iter().enumerate() {
        let view = ViewState {
            transform: Transform::from_scale_translate(scale, 500.0, 500.0),
            pointer: None,
        };
        let out = out_dir.join(format!("zoom_{i:02}_x{scale}.png"));
        supergrid_skia::render_to_png(&cfg, &view, &out)
            .with_context(|| format!("render scale {scale}"))?;
        println!("Wrote {}", out.display());
    }

    // One panned frame with a snapped pointer marker.
    let transform = Transform::from_scale_translate(1.0, 137.0, -42.0);
    let pointer = supergrid_core::snapshot_from_release(
        &transform,
        Point::new(500.0, 500.0),
        cfg.screen_space_cell_size,
    );
    let view = ViewState { transform, pointer };
    let out = out_dir.join("pointer_marker.png");
    supergrid_skia::render_to_png(&cfg, &view, &out).context("render pointer frame")?;
    println!("Wrote {}", out.display());

    Ok(())
}
