// File: crates/supergrid-core/src/pointer.rs
// Summary: Pointer-release snapping for the interactive marker.

use crate::lod::ZoomLevel;
use crate::transform::Transform;
use crate::types::Point;

/// Round both coordinates to the nearest multiple of `pitch`.
pub fn snap_to_pitch(p: Point, pitch: f64) -> Point {
    Point::new((p.x / pitch).round() * pitch, (p.y / pitch).round() * pitch)
}

/// Turn a pointer-release at `screen` into a world-space snapshot, snapped
/// to one tenth of the grid pitch at the gesture-time zoom. Returns `None`
/// when the transform cannot be inverted.
pub fn snapshot_from_release(tf: &Transform, screen: Point, cell_size: f64) -> Option<Point> {
    let world = tf.invert()?.apply(screen);
    let zoom = ZoomLevel::from_scale(tf.a, cell_size);
    Some(snap_to_pitch(world, zoom.pitch / 10.0))
}
