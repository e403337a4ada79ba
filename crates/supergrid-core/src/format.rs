// File: crates/supergrid-core/src/format.rs
// Summary: SI-style coordinate formatter; precision tracks the current grid pitch.

/// Signature for coordinate label formatters: (x, y, pitch) -> text.
pub type CoordFormatter = fn(f64, f64, f64) -> String;

/// Format one world coordinate with a metric suffix, showing only as much
/// precision as a grid at pitch `z` resolves.
///
/// Branches, in order:
/// - |v| < 1e-4       -> "0m"
/// - v < 0            -> "-" + format(|v|)
/// - v > 1000         -> whole kilometers, floored
/// - 1 <= v <= 1000   -> integer meters when z > 1, else ceil(-log10 z) decimals
/// - 0 < v < 1        -> integer millimeters when z >= 0.001, else fractional mm
pub fn format_si(v: f64, z: f64) -> String {
    if v.abs() < 1e-4 {
        return "0m".to_string();
    }
    if v < 0.0 {
        return format!("-{}", format_si(-v, z));
    }
    if v > 1000.0 {
        return format!("{}km", (v / 1000.0).floor() as i64);
    }
    if v >= 1.0 {
        let digits = if z > 1.0 { 0 } else { (-z.log10()).ceil().max(0.0) as usize };
        if digits == 0 {
            // f64::round ties away from zero, matching the integer-meter rule
            return format!("{}m", v.round() as i64);
        }
        return format!("{v:.digits$}m");
    }
    let mm = v * 1000.0;
    if z >= 0.001 {
        return format!("{}mm", mm.round() as i64);
    }
    let digits = (-(z * 1000.0).log10()).ceil().max(0.0) as usize;
    format!("{mm:.digits$}mm")
}

/// Default label text for a lattice point: both axes through `format_si`.
pub fn format_coord(x: f64, y: f64, z: f64) -> String {
    format!("{}, {}", format_si(x, z), format_si(y, z))
}
