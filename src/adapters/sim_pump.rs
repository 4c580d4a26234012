//! Simulated pump feed.
//!
//! Dev seam for exercising the ticker without a pump: emits random but
//! plausible readings, stamped by the caller on the CGM's five-minute
//! cadence (or with gaps, to exercise the stale branch).

use rand::Rng;

use crate::pump::{CgmTrend, PumpStatusEvent};

/// Generates a stream of pump status records.
pub struct SimulatedPump<R: Rng> {
    rng: R,
    sgv: u16,
    iob: f32,
}

impl<R: Rng> SimulatedPump<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            sgv: 120,
            iob: 1.5,
        }
    }

    /// Next reading, stamped with the given wall-clock time.
    ///
    /// The SGV random-walks within the sensor's plausible range and the
    /// trend is derived from the step, so consecutive readings look like
    /// a real trace rather than white noise.
    pub fn next_reading(&mut self, cgm_date_ms: u64) -> PumpStatusEvent {
        let step: i16 = self.rng.gen_range(-18..=18);
        self.sgv = self.sgv.saturating_add_signed(step).clamp(40, 400);
        self.iob = (self.iob + self.rng.gen_range(-0.3..=0.2f32)).clamp(0.0, 10.0);

        let cgm_trend = match step {
            i16::MIN..=-13 => CgmTrend::DoubleDown,
            -12..=-8 => CgmTrend::SingleDown,
            -7..=-3 => CgmTrend::FortyFiveDown,
            -2..=2 => CgmTrend::Flat,
            3..=7 => CgmTrend::FortyFiveUp,
            8..=12 => CgmTrend::SingleUp,
            13..=i16::MAX => CgmTrend::DoubleUp,
        };

        PumpStatusEvent::reading(cgm_date_ms, self.sgv, cgm_trend, self.iob)
    }
}
