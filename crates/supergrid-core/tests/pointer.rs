// File: crates/supergrid-core/tests/pointer.rs
// Purpose: Validate pointer-release snapping at gesture-time zoom.

use supergrid_core::{snap_to_pitch, snapshot_from_release, Point, Transform};

#[test]
fn snap_rounds_to_nearest_multiple() {
    assert_eq!(snap_to_pitch(Point::new(503.0, 497.0), 20.0), Point::new(500.0, 500.0));
    assert_eq!(snap_to_pitch(Point::new(-9.0, 11.0), 20.0), Point::new(-0.0, 20.0));
}

#[test]
fn release_on_lattice_is_identity() {
    // identity transform, cell 200: snap pitch is Z/10 = 20 and (500,500)
    // is already on the fine lattice
    let snap = snapshot_from_release(&Transform::IDENTITY, Point::new(500.0, 500.0), 200.0);
    assert_eq!(snap, Some(Point::new(500.0, 500.0)));
}

#[test]
fn release_near_lattice_snaps_to_it() {
    let snap = snapshot_from_release(&Transform::IDENTITY, Point::new(503.0, 497.0), 200.0);
    assert_eq!(snap, Some(Point::new(500.0, 500.0)));
}

#[test]
fn snap_pitch_tracks_gesture_time_zoom() {
    // scale 10: Z = 20, snap pitch 2; screen (503, 497) -> world (50.3, 49.7)
    let tf = Transform::from_scale_translate(10.0, 0.0, 0.0);
    let snap = snapshot_from_release(&tf, Point::new(503.0, 497.0), 200.0).unwrap();
    assert!((snap.x - 50.0).abs() < 1e-9);
    assert!((snap.y - 50.0).abs() < 1e-9);
}

#[test]
fn singular_transform_yields_no_snapshot() {
    let tf = Transform { a: 0.0, b: 0.0, c: 0.0, d: 0.0, e: 0.0, f: 0.0 };
    assert_eq!(snapshot_from_release(&tf, Point::new(1.0, 1.0), 200.0), None);
}
