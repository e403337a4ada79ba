// File: crates/supergrid-core/tests/color.rs
// Purpose: Validate RGBA alpha scaling and framebuffer word packing.

use supergrid_core::Rgba;

#[test]
fn to_argb_packs_channels_in_order() {
    assert_eq!(Rgba::new(0x11, 0x22, 0x33, 0x44).to_argb(), 0x4411_2233);
    // opaque colors land with a full alpha byte, blue in the low byte
    assert_eq!(Rgba::opaque(255, 0, 0).to_argb(), 0xFFFF_0000);
    assert_eq!(Rgba::opaque(0, 0, 255).to_argb(), 0xFF00_00FF);
}

#[test]
fn with_alpha_scales_and_clamps() {
    let c = Rgba::new(10, 20, 30, 200);
    assert_eq!(c.with_alpha(0.5).a, 100);
    assert_eq!(c.with_alpha(0.0).a, 0);
    // out-of-range factors clamp instead of wrapping
    assert_eq!(c.with_alpha(2.0).a, 200);
    assert_eq!(c.with_alpha(-1.0).a, 0);
    // color channels are untouched
    assert_eq!(c.with_alpha(0.5).r, 10);
}
