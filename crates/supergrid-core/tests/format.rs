// File: crates/supergrid-core/tests/format.rs
// Purpose: Validate SI coordinate formatting branch-by-branch, including boundaries.

use supergrid_core::{format_coord, format_si};

#[test]
fn near_zero_collapses_to_zero_meters() {
    assert_eq!(format_si(0.0, 1.0), "0m");
    assert_eq!(format_si(0.00005, 1.0), "0m");
    assert_eq!(format_si(-0.00005, 1.0), "0m");
}

#[test]
fn negative_values_prefix_a_sign() {
    assert_eq!(format_si(-2.5, 1.0), "-3m");
    assert_eq!(format_si(-400.0, 200.0), "-400m");
    assert_eq!(format_si(-1500.0, 1.0), "-1km");
}

#[test]
fn kilometers_floor_above_one_thousand() {
    assert_eq!(format_si(1500.0, 1.0), "1km");
    assert_eq!(format_si(2999.0, 1.0), "2km");
    // exactly 1000 still reads in meters
    assert_eq!(format_si(1000.0, 2.0), "1000m");
}

#[test]
fn meter_precision_tracks_pitch() {
    // coarse pitch: integer meters
    assert_eq!(format_si(2.0, 200.0), "2m");
    assert_eq!(format_si(2.4, 200.0), "2m");
    // pitch exactly 1: zero decimals, ties round away from zero
    assert_eq!(format_si(2.5, 1.0), "3m");
    // finer pitch: one decimal per missing decade
    assert_eq!(format_si(12.34, 0.01), "12.34m");
    assert_eq!(format_si(5.0, 0.1), "5.0m");
}

#[test]
fn millimeters_below_one_meter() {
    assert_eq!(format_si(0.25, 1.0), "250mm");
    assert_eq!(format_si(0.0005, 0.001), "1mm");
    // boundary: 1e-4 itself is not "near zero" and lands in the mm branch
    assert_eq!(format_si(0.0001, 1.0), "0mm");
    // sub-mm pitch shows fractional millimeters
    assert_eq!(format_si(0.25, 0.0001), "250.0mm");
}

#[test]
fn coord_pairs_both_axes() {
    assert_eq!(format_coord(200.0, -400.0, 200.0), "200m, -400m");
    assert_eq!(format_coord(0.0, 1500.0, 1.0), "0m, 1km");
}
