//! Pump status records consumed from the uploader's store.
//!
//! The pump communication stack owns these; the ticker only reads them.
//! Records arrive with monotone non-decreasing `cgm_date_ms` — the most
//! recent reading is always the one with the greatest timestamp.

use serde::{Deserialize, Serialize};

/// CGM trend direction reported alongside a sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CgmTrend {
    DoubleUp,
    SingleUp,
    FortyFiveUp,
    Flat,
    FortyFiveDown,
    SingleDown,
    DoubleDown,
    Unknown,
}

/// One pump status record.
///
/// `sgv == 0` is the pump's "no reading" sentinel and must be treated as
/// stale even when the record is otherwise valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpStatusEvent {
    /// Wall-clock timestamp of the sensor reading, in milliseconds.
    pub cgm_date_ms: u64,
    /// Whether the reading is usable at all.
    pub valid_sgv: bool,
    /// Serum glucose value in mg/dL. `0` means "no reading".
    pub sgv: u16,
    /// Trend direction over recent history.
    pub cgm_trend: CgmTrend,
    /// Insulin on board, in units. Non-negative.
    pub active_insulin: f32,
}

impl PumpStatusEvent {
    /// A plain valid reading, useful for adapters and tests.
    pub fn reading(cgm_date_ms: u64, sgv: u16, cgm_trend: CgmTrend, active_insulin: f32) -> Self {
        Self {
            cgm_date_ms,
            valid_sgv: true,
            sgv,
            cgm_trend,
            active_insulin,
        }
    }
}
