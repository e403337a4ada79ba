// File: crates/supergrid-core/tests/zoom.rs
// Purpose: Validate zoom decomposition: decade-snapped pitch, phase range, fade alphas.

use supergrid_core::ZoomLevel;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

#[test]
fn identity_scale_sits_on_decade() {
    let z = ZoomLevel::from_scale(1.0, 200.0);
    assert!(close(z.pitch, 200.0));
    assert!(close(z.exact, 200.0));
    assert!(close(z.phase, 1.0));
    assert_eq!(z.minor_alpha(), 0.0);
    assert_eq!(z.sub_label_alpha(), 0.0);
}

#[test]
fn pitch_snaps_down_within_decade() {
    // scale 2: exact cell is 100 world units but pitch stays at the decade
    let z = ZoomLevel::from_scale(2.0, 200.0);
    assert!(close(z.pitch, 200.0));
    assert!(close(z.exact, 100.0));
    assert!(close(z.phase, 0.5));
    assert!((z.minor_alpha() - 0.5).abs() < 1e-6);
    assert_eq!(z.sub_label_alpha(), 0.0);
}

#[test]
fn decade_crossing_resnaps_pitch() {
    let z = ZoomLevel::from_scale(10.0, 200.0);
    assert!(close(z.pitch, 20.0));
    assert!(close(z.phase, 1.0));

    let z = ZoomLevel::from_scale(0.5, 200.0);
    assert!(close(z.pitch, 2000.0));
    assert!(close(z.exact, 400.0));
    assert!(close(z.phase, 0.2));
}

#[test]
fn sub_labels_fade_in_late() {
    // phase 0.5: still in the first four fifths of the fade
    assert_eq!(ZoomLevel::from_scale(2.0, 200.0).sub_label_alpha(), 0.0);
    // phase 0.125: (1 - 0.125) * 10 - 8 = 0.75
    let z = ZoomLevel::from_scale(8.0, 200.0);
    assert!((z.sub_label_alpha() - 0.75).abs() < 1e-6);
}

#[test]
fn phase_is_a_sawtooth_over_decades() {
    // sweep several orders of magnitude; phase must stay in (0.1, 1]
    let mut scale = 0.003;
    while scale < 3000.0 {
        let z = ZoomLevel::from_scale(scale, 200.0);
        assert!(
            z.phase > 0.1 - 1e-9 && z.phase <= 1.0 + 1e-9,
            "phase {} out of range at scale {}",
            z.phase,
            scale
        );
        // pitch is cell_size over a power of ten
        let decades = (200.0 / z.pitch).log10();
        assert!(
            (decades - decades.round()).abs() < 1e-9,
            "pitch {} not decade-aligned at scale {}",
            z.pitch,
            scale
        );
        scale *= 1.37;
    }
}

#[test]
fn out_of_contract_scales_clamp_to_finite_pitch() {
    // a > 0 is the caller's contract, but violations must not turn into
    // NaN/inf geometry downstream
    for bad in [
        -2.0,
        0.0,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MIN_POSITIVE,
    ] {
        let z = ZoomLevel::from_scale(bad, 200.0);
        assert!(z.pitch.is_finite() && z.pitch > 0.0, "pitch {} for scale {bad}", z.pitch);
        assert!(z.exact.is_finite() && z.exact > 0.0, "exact {} for scale {bad}", z.exact);
        assert!(z.phase.is_finite(), "phase {} for scale {bad}", z.phase);
        assert!((0.0..=1.0).contains(&z.minor_alpha()));
    }
}

#[test]
fn alphas_stay_in_unit_range() {
    let mut scale = 0.01;
    while scale < 100.0 {
        let z = ZoomLevel::from_scale(scale, 200.0);
        assert!((0.0..=1.0).contains(&z.minor_alpha()));
        assert!((0.0..=1.0).contains(&z.sub_label_alpha()));
        scale *= 1.13;
    }
}
