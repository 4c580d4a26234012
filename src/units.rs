//! Unit-aware SGV formatting.
//!
//! The render policy delegates glucose display to this module so the
//! mg/dL ↔ mmol/L decision stays in one place, shared with any other
//! surface that prints a glucose value.

use core::fmt::Write;

use heapless::String;

/// Conversion factor between the two display units.
pub const MGDL_PER_MMOL: f32 = 18.0;

/// Format a glucose value for display.
///
/// mmol/L mode divides by 18 and keeps one decimal; mg/dL mode renders
/// the integer as-is. No padding here — callers align the field.
pub fn format_sgv(sgv_mgdl: u16, mmol: bool) -> String<8> {
    let mut out = String::new();
    if mmol {
        let _ = write!(out, "{:.1}", f32::from(sgv_mgdl) / MGDL_PER_MMOL);
    } else {
        let _ = write!(out, "{}", sgv_mgdl);
    }
    out
}

/// Display label for the active unit preference.
pub fn unit_label(mmol: bool) -> &'static str {
    if mmol {
        "mmol/L"
    } else {
        "mg/dL"
    }
}
