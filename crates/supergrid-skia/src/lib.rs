// File: crates/supergrid-skia/src/lib.rs
// Summary: Replays grid draw commands onto Skia CPU raster surfaces; PNG/RGBA helpers.

use anyhow::{Context, Result};
use skia_safe as skia;
use thiserror::Error;

use supergrid_core::{render, DrawCommand, GridConfig, Rgba, ViewState};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error("pixel readback failed")]
    Readback,
}

fn to_skia(color: Rgba, alpha: f32) -> skia::Color {
    let c = color.with_alpha(alpha);
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Replay an ordered command list against a canvas. The caller owns the
/// canvas exclusively for the duration of one replay; a `Clear` command
/// wipes whatever the previous redraw left behind.
pub fn replay(canvas: &skia::Canvas, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear { color, .. } => {
                canvas.clear(to_skia(*color, 1.0));
            }
            DrawCommand::Line { from, to, color, alpha } => {
                if *alpha <= 0.0 {
                    continue;
                }
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(1.0);
                paint.set_color(to_skia(*color, *alpha));
                canvas.draw_line(
                    (from.x as f32, from.y as f32),
                    (to.x as f32, to.y as f32),
                    &paint,
                );
            }
            DrawCommand::Text { text, at, color, alpha, size } => {
                if *alpha <= 0.0 {
                    continue;
                }
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(to_skia(*color, *alpha));
                let mut font = skia::Font::default();
                font.set_size(*size);
                canvas.draw_str(text, (at.x as f32, at.y as f32), &font, &paint);
            }
            DrawCommand::RectStroke { center, half, color, alpha } => {
                if *alpha <= 0.0 {
                    continue;
                }
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(1.0);
                paint.set_color(to_skia(*color, *alpha));
                let rect = skia::Rect::from_ltrb(
                    (center.x - half) as f32,
                    (center.y - half) as f32,
                    (center.x + half) as f32,
                    (center.y + half) as f32,
                );
                canvas.draw_rect(rect, &paint);
            }
        }
    }
}

/// CPU raster surface wrapper. One instance per redraw target; the host
/// reuses it across frames but never across threads.
pub struct RasterSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
        let surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or(RenderError::SurfaceCreation { width, height })?;
        Ok(Self { surface, width: width.max(1), height: height.max(1) })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn replay(&mut self, commands: &[DrawCommand]) {
        replay(self.surface.canvas(), commands);
    }

    /// Encode the current contents as PNG bytes.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read back the current contents as tightly packed RGBA8.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Readback);
        }
        Ok((pixels, self.width, self.height, stride))
    }
}

/// Render one grid frame to a fresh raster surface.
pub fn render_frame(cfg: &GridConfig, view: &ViewState) -> Result<RasterSurface, RenderError> {
    let mut surface = RasterSurface::new(cfg.width as i32, cfg.height as i32)?;
    surface.replay(&render(cfg, view));
    Ok(surface)
}

/// Render one grid frame straight to PNG bytes.
pub fn render_to_png_bytes(cfg: &GridConfig, view: &ViewState) -> Result<Vec<u8>> {
    let mut surface = render_frame(cfg, view)?;
    Ok(surface.png_bytes()?)
}

/// Render one grid frame to a PNG file, creating parent directories.
pub fn render_to_png(
    cfg: &GridConfig,
    view: &ViewState,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(cfg, view)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Render one grid frame to a tightly packed RGBA8 buffer.
pub fn render_to_rgba8(cfg: &GridConfig, view: &ViewState) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = render_frame(cfg, view)?;
    Ok(surface.rgba8()?)
}
