// File: crates/supergrid-core/src/transform.rs
// Summary: Affine world->screen transform with inversion and pan/zoom hooks.

use crate::types::Point;

/// Affine map in the usual 2D matrix form:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
///
/// The grid assumes uniform positive scale (`a == d`, `b == c == 0`); the
/// shear terms are carried so arbitrary matrices round-trip through
/// `invert`, but LOD math reads only `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Uniform scale plus translation, the only shape the grid is specified for.
    pub const fn from_scale_translate(scale: f64, tx: f64, ty: f64) -> Self {
        Self { a: scale, b: 0.0, c: 0.0, d: scale, e: tx, f: ty }
    }

    /// Map a world point into screen space.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn invert(&self) -> Option<Transform> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < 1e-12 {
            return None;
        }
        Some(Transform {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    /// Translate in screen space.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.e += dx;
        self.f += dy;
    }

    /// Zoom by `factor` keeping the world point under `cursor` fixed on screen.
    pub fn zoom_at(&mut self, cursor: Point, factor: f64) {
        let new_scale = (self.a * factor).clamp(1e-6, 1e6);
        let factor = new_scale / self.a;
        self.a = new_scale;
        self.d = new_scale;
        // solve for new translation so the cursor's world point stays put
        self.e = cursor.x - factor * (cursor.x - self.e);
        self.f = cursor.y - factor * (cursor.y - self.f);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
