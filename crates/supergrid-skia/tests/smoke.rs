// File: crates/supergrid-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use supergrid_core::{GridConfig, Point, Transform, ViewState};

#[test]
fn render_smoke_png() {
    let cfg = GridConfig::default();
    let view = ViewState {
        transform: Transform::from_scale_translate(1.7, 120.0, -45.0),
        pointer: Some(Point::new(100.0, 100.0)),
    };

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    supergrid_skia::render_to_png(&cfg, &view, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = supergrid_skia::render_to_png_bytes(&cfg, &view).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
