// File: crates/supergrid-core/src/command.rs
// Summary: Renderer-agnostic draw commands; one redraw is one ordered command list.

use crate::types::{Point, Rgba};

/// A single primitive draw call, in screen pixels. A full redraw is a
/// `Vec<DrawCommand>` beginning with `Clear`; backends replay the list in
/// order against a real surface, which keeps the core golden-testable
/// without one.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface to `color`.
    Clear { width: f64, height: f64, color: Rgba },
    /// Stroke a 1px line from `from` to `to`.
    Line { from: Point, to: Point, color: Rgba, alpha: f32 },
    /// Fill `text` with its left baseline at `at`.
    Text { text: String, at: Point, color: Rgba, alpha: f32, size: f32 },
    /// Stroke an axis-aligned square outline centered on `center` with the
    /// given half-extent.
    RectStroke { center: Point, half: f64, color: Rgba, alpha: f32 },
}
