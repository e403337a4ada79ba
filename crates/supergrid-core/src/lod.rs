// File: crates/supergrid-core/src/lod.rs
// Summary: Zoom decomposition; derives the decade-snapped grid pitch and fade phase.

/// Grid pitch derived from the current zoom scale.
///
/// `pitch` (Z) is the world-space size of one screen-sized cell, snapped to
/// the power-of-ten decade at or below the exact size, so grid lines always
/// land on round world coordinates. `exact` (Za) is the un-snapped size, and
/// `phase` = Za / Z lies in (0.1, 1]: exactly 1 when the scale sits on a
/// decade boundary, falling toward 0.1 as the zoom approaches the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLevel {
    pub pitch: f64,
    pub exact: f64,
    pub phase: f64,
}

impl ZoomLevel {
    /// Decompose `scale` (the transform's `a` component) at the configured
    /// screen-space cell size.
    ///
    /// Precondition: `scale > 0` and finite; `log10` is undefined otherwise.
    /// Out-of-contract values are clamped into a range whose derived pitch
    /// stays finite, rather than letting NaN propagate into drawn geometry.
    pub fn from_scale(scale: f64, cell_size: f64) -> Self {
        let scale = if scale.is_nan() { 1.0 } else { scale.clamp(1e-12, 1e12) };
        let pitch = cell_size / 10f64.powf(scale.log10().floor());
        let exact = cell_size / scale;
        Self { pitch, exact, phase: exact / pitch }
    }

    /// Opacity of the minor (pitch/10) line set. Zero at a decade boundary,
    /// rising to 0.9 just before the next decade snaps in.
    pub fn minor_alpha(&self) -> f32 {
        ((1.0 - self.phase).clamp(0.0, 1.0)) as f32
    }

    /// Opacity of the sub-decade label set; fades in only over the last
    /// fifth of the decade.
    pub fn sub_label_alpha(&self) -> f32 {
        (((1.0 - self.phase) * 10.0 - 8.0).clamp(0.0, 1.0)) as f32
    }
}
