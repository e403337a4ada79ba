// File: crates/supergrid-core/src/theme.rs
// Summary: Light/Dark theming for grid rendering colors.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub major: Rgba,
    pub minor: Rgba,
    pub label: Rgba,
    pub marker: Rgba,
}

impl Theme {
    /// Semi-transparent black strokes on a near-white surface, the reference
    /// component's defaults.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(250, 250, 252),
            major: Rgba::new(0, 0, 0, 51),
            minor: Rgba::new(0, 0, 0, 26),
            label: Rgba::new(20, 20, 30, 200),
            marker: Rgba::opaque(200, 60, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            major: Rgba::new(235, 235, 245, 60),
            minor: Rgba::new(235, 235, 245, 30),
            label: Rgba::new(210, 210, 220, 220),
            marker: Rgba::opaque(220, 80, 80),
        }
    }

    pub fn blueprint() -> Self {
        Self {
            name: "blueprint",
            background: Rgba::opaque(0x10, 0x2a, 0x43),
            major: Rgba::new(0xcf, 0xe8, 0xff, 70),
            minor: Rgba::new(0xcf, 0xe8, 0xff, 34),
            label: Rgba::new(0xcf, 0xe8, 0xff, 210),
            marker: Rgba::opaque(0xff, 0xd3, 0x66),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::blueprint()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
