//! Ticker configuration.
//!
//! User-facing preference (display unit) plus the timing knob of the
//! refresh chain. Loaded from the companion app's settings store in
//! production; the simulator reads a JSON file or falls back to defaults.

use serde::{Deserialize, Serialize};

/// Configuration consumed by the refresh controller and render policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlanceConfig {
    /// Display glucose in mmol/L instead of mg/dL.
    pub mmol_per_litre: bool,
    /// Delay between scheduled re-renders while the screen is on (ms).
    pub refresh_interval_ms: u32,
}

impl Default for GlanceConfig {
    fn default() -> Self {
        Self {
            mmol_per_litre: false,
            refresh_interval_ms: 60_000, // once per minute
        }
    }
}
