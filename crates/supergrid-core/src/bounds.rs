// File: crates/supergrid-core/src/bounds.rs
// Summary: World-space iteration bounds, rounded outward to the grid lattice.

use crate::transform::Transform;
use crate::types::Point;

/// World-space rectangle whose lattice points at a given pitch cover the
/// whole viewport with at least one cell of overscan on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBounds {
    pub start: Point,
    pub end: Point,
}

impl GridBounds {
    /// Compute bounds at `pitch` for a viewport spanning `cells_x` x `cells_y`
    /// screen cells. `inverse` is the screen->world transform.
    ///
    /// The start corner is the world point under screen (0,0), rounded down
    /// to the lattice and padded by one extra pitch; the end corner extends
    /// `cells` steps from there. Translation can leave fractional cells at
    /// the viewport edges, hence the outward rounding.
    pub fn compute(inverse: &Transform, pitch: f64, cells_x: f64, cells_y: f64) -> Self {
        let top_left = inverse.apply(Point::new(0.0, 0.0));
        let start = Point::new(
            ((top_left.x - pitch) / pitch).floor() * pitch,
            ((top_left.y - pitch) / pitch).floor() * pitch,
        );
        let end = Point::new(start.x + pitch * cells_x, start.y + pitch * cells_y);
        Self { start, end }
    }

    /// Number of whole `step`-sized intervals between start and end on x.
    /// Start and end are constructed as lattice multiples, so the division
    /// is exact up to float rounding.
    pub fn steps_x(&self, step: f64) -> i64 {
        ((self.end.x - self.start.x) / step).round() as i64
    }

    /// Same on y.
    pub fn steps_y(&self, step: f64) -> i64 {
        ((self.end.y - self.start.y) / step).round() as i64
    }
}

/// How many grid cells are needed to span `dimension` pixels at
/// `cell_size` pixels per cell, plus one cell of overscan.
pub fn overscan_cells(dimension: f64, cell_size: f64) -> f64 {
    if dimension <= 0.0 {
        return 0.0;
    }
    (dimension / cell_size).ceil() + 1.0
}
