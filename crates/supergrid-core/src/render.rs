// File: crates/supergrid-core/src/render.rs
// Summary: Full-frame command emission: major/minor lines, labels, pointer marker.

use crate::bounds::{overscan_cells, GridBounds};
use crate::command::DrawCommand;
use crate::format::{format_coord, CoordFormatter};
use crate::lod::ZoomLevel;
use crate::theme::Theme;
use crate::transform::Transform;
use crate::types::{Point, Rgba, HEIGHT, WIDTH};

/// Pixel offset of a label from its lattice point (just above-right).
const LABEL_OFFSET: (f64, f64) = (2.0, -2.0);

/// Grid appearance and sizing. All fields have usable defaults; the reduced
/// variants of the component are expressed by turning `draw_labels` and
/// `pointer_marker` off rather than by separate code paths.
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Surface size in pixels.
    pub width: f64,
    pub height: f64,
    /// Desired screen-pixel size of one major cell.
    pub screen_space_cell_size: f64,
    /// Major cells per label lattice step.
    pub label_cells: f64,
    pub background: Rgba,
    pub major_color: Rgba,
    pub minor_color: Rgba,
    pub label_color: Rgba,
    pub marker_color: Rgba,
    pub label_size: f32,
    /// Half-extent of the pointer marker square, in pixels.
    pub marker_half: f64,
    pub draw_labels: bool,
    pub pointer_marker: bool,
    /// Override for the coordinate label text; defaults to `format_coord`.
    pub stringify: Option<CoordFormatter>,
}

impl Default for GridConfig {
    fn default() -> Self {
        let theme = Theme::light();
        Self {
            width: WIDTH as f64,
            height: HEIGHT as f64,
            screen_space_cell_size: 200.0,
            label_cells: 5.0,
            background: theme.background,
            major_color: theme.major,
            minor_color: theme.minor,
            label_color: theme.label,
            marker_color: theme.marker,
            label_size: 12.0,
            marker_half: 5.0,
            draw_labels: true,
            pointer_marker: true,
            stringify: None,
        }
    }
}

impl GridConfig {
    /// Default config recolored from `theme`.
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            background: theme.background,
            major_color: theme.major,
            minor_color: theme.minor,
            label_color: theme.label,
            marker_color: theme.marker,
            ..Self::default()
        }
    }

    /// The minimal variant: a 50px unlabeled grid.
    pub fn minimal() -> Self {
        Self {
            screen_space_cell_size: 50.0,
            draw_labels: false,
            pointer_marker: false,
            ..Self::default()
        }
    }
}

/// Everything that changes between redraws: the world->screen transform and
/// the last snapped pointer position (world space), if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub transform: Transform,
    pub pointer: Option<Point>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { transform: Transform::IDENTITY, pointer: None }
    }
}

/// Emit one full redraw as an ordered command list.
///
/// Deterministic: identical inputs yield an identical list. Stage order is
/// clear, major lines, labels, minor lines, sub-labels, pointer marker; the
/// minor sets fade with the zoom phase so decade crossings are seamless.
pub fn render(cfg: &GridConfig, view: &ViewState) -> Vec<DrawCommand> {
    let mut out = vec![DrawCommand::Clear {
        width: cfg.width.max(0.0),
        height: cfg.height.max(0.0),
        color: cfg.background,
    }];
    if cfg.width <= 0.0 || cfg.height <= 0.0 {
        return out;
    }
    let Some(inverse) = view.transform.invert() else {
        return out;
    };

    let zoom = ZoomLevel::from_scale(view.transform.a, cfg.screen_space_cell_size);
    let cells_x = overscan_cells(cfg.width, cfg.screen_space_cell_size);
    let cells_y = overscan_cells(cfg.height, cfg.screen_space_cell_size);

    let line_bounds = GridBounds::compute(&inverse, zoom.pitch, cells_x, cells_y);
    let label_pitch = zoom.pitch * cfg.label_cells;
    let label_bounds = GridBounds::compute(&inverse, label_pitch, cells_x, cells_y);

    emit_lines(&mut out, &view.transform, zoom.pitch, &line_bounds, cfg.major_color, 1.0);
    if cfg.draw_labels {
        emit_labels(&mut out, cfg, &view.transform, label_pitch, &label_bounds, 1.0, zoom.pitch);
    }

    emit_lines(
        &mut out,
        &view.transform,
        zoom.pitch / 10.0,
        &line_bounds,
        cfg.minor_color,
        zoom.minor_alpha(),
    );
    if cfg.draw_labels {
        let alpha = zoom.sub_label_alpha();
        if alpha > 0.0 {
            emit_labels(
                &mut out,
                cfg,
                &view.transform,
                label_pitch / 10.0,
                &label_bounds,
                alpha,
                zoom.pitch,
            );
        }
    }

    if cfg.pointer_marker {
        if let Some(world) = view.pointer {
            emit_marker(&mut out, cfg, &view.transform, world, zoom.pitch);
        }
    }
    out
}

/// Vertical lines left to right, then horizontal top to bottom. The order
/// carries no meaning but is fixed so command lists compare exactly.
fn emit_lines(
    out: &mut Vec<DrawCommand>,
    tf: &Transform,
    pitch: f64,
    bounds: &GridBounds,
    color: Rgba,
    alpha: f32,
) {
    let GridBounds { start, end } = *bounds;
    for i in 0..=bounds.steps_x(pitch) {
        let x = start.x + pitch * i as f64;
        out.push(DrawCommand::Line {
            from: tf.apply(Point::new(x, start.y)),
            to: tf.apply(Point::new(x, end.y)),
            color,
            alpha,
        });
    }
    for j in 0..=bounds.steps_y(pitch) {
        let y = start.y + pitch * j as f64;
        out.push(DrawCommand::Line {
            from: tf.apply(Point::new(start.x, y)),
            to: tf.apply(Point::new(end.x, y)),
            color,
            alpha,
        });
    }
}

fn emit_labels(
    out: &mut Vec<DrawCommand>,
    cfg: &GridConfig,
    tf: &Transform,
    pitch: f64,
    bounds: &GridBounds,
    alpha: f32,
    z: f64,
) {
    let stringify = cfg.stringify.unwrap_or(format_coord);
    let GridBounds { start, .. } = *bounds;
    for i in 0..=bounds.steps_x(pitch) {
        let x = start.x + pitch * i as f64;
        for j in 0..=bounds.steps_y(pitch) {
            let y = start.y + pitch * j as f64;
            let at = tf.apply(Point::new(x, y));
            out.push(DrawCommand::Text {
                text: stringify(x, y, z),
                at: Point::new(at.x + LABEL_OFFSET.0, at.y + LABEL_OFFSET.1),
                color: cfg.label_color,
                alpha,
                size: cfg.label_size,
            });
        }
    }
}

fn emit_marker(out: &mut Vec<DrawCommand>, cfg: &GridConfig, tf: &Transform, world: Point, z: f64) {
    let stringify = cfg.stringify.unwrap_or(format_coord);
    let center = tf.apply(world);
    out.push(DrawCommand::RectStroke {
        center,
        half: cfg.marker_half,
        color: cfg.marker_color,
        alpha: 0.5,
    });
    out.push(DrawCommand::Text {
        text: stringify(world.x, world.y, z),
        at: Point::new(center.x + LABEL_OFFSET.0, center.y + LABEL_OFFSET.1),
        color: cfg.marker_color,
        alpha: 0.5,
        size: cfg.label_size,
    });
}
