//! Render policy: pump reading → styled glance.
//!
//! [`render`] is a pure function of (latest reading, now, unit
//! preference). It never touches ports, clocks or shared state, which is
//! what makes the whole presentation layer testable on the host.
//!
//! The policy emits [`ColorToken`]s, not platform colors; adapters map
//! them (Ok → green-800, Warn → deep-orange-800, Invalid → grey-500 on
//! the mobile surface, ANSI escapes in the terminal simulator).

use core::fmt::Write;

use heapless::String;

use crate::pump::{CgmTrend, PumpStatusEvent};
use crate::units;

/// A reading older than this is presented as stale.
pub const STALE_AFTER_MS: u64 = 15 * 60 * 1000;

/// SGV strictly below this (mg/dL) colors the value as abnormal (~4.2 mmol/L).
pub const WARN_BELOW_MGDL: u16 = 76;

/// SGV strictly above this (mg/dL) colors the value as abnormal (~12 mmol/L).
pub const WARN_ABOVE_MGDL: u16 = 216;

/// Semantic color of one glance field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Ok,
    Warn,
    Invalid,
}

/// Per-field colors of a rendered glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldColors {
    pub sgv: ColorToken,
    pub trend: ColorToken,
    pub age: ColorToken,
    pub iob: ColorToken,
}

impl FieldColors {
    const fn all(token: ColorToken) -> Self {
        Self {
            sgv: token,
            trend: token,
            age: token,
            iob: token,
        }
    }
}

/// View model handed to the notification sink.
///
/// Field widths are fixed so the glance lines up in a monospace layout:
/// sgv and iob right-aligned to 5, age to 2, trend is a single glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlanceView {
    pub sgv_text: String<8>,
    pub trend_symbol: String<4>,
    pub iob_text: String<12>,
    pub age_text: String<4>,
    pub unit_text: &'static str,
    pub colors: FieldColors,
}

/// Glyph for a trend direction.
pub fn trend_symbol(trend: CgmTrend) -> &'static str {
    match trend {
        CgmTrend::DoubleUp => "\u{21c8}",
        CgmTrend::SingleUp => "\u{2191}",
        CgmTrend::FortyFiveUp => "\u{2197}",
        CgmTrend::Flat => "\u{2192}",
        CgmTrend::FortyFiveDown => "\u{2198}",
        CgmTrend::SingleDown => "\u{2193}",
        CgmTrend::DoubleDown => "\u{21ca}",
        CgmTrend::Unknown => "\u{2014}",
    }
}

/// Map the latest reading to a glance.
///
/// Freshness: a reading counts as valid when it exists, its `sgv` is not
/// the `0` sentinel, and it is younger than [`STALE_AFTER_MS`]. Everything
/// else — no reading at all, the sentinel, a stale timestamp — collapses
/// into the same greyed-out "no data" presentation.
pub fn render(latest: Option<&PumpStatusEvent>, now_ms: u64, mmol: bool) -> GlanceView {
    let fresh = latest.filter(|ev| {
        let last_good_ms = if ev.sgv != 0 { ev.cgm_date_ms } else { 0 };
        last_good_ms > 0 && now_ms.saturating_sub(last_good_ms) < STALE_AFTER_MS
    });
    let Some(ev) = fresh else {
        return invalid_view(mmol);
    };
    let age_ms = now_ms.saturating_sub(ev.cgm_date_ms);

    // The write!s below cannot overflow their capacities (sgv fits u16,
    // age < 15 min, IOB is pump-bounded); a failed write truncates the field.

    let mut sgv_text = String::new();
    let _ = write!(sgv_text, "{:>5}", units::format_sgv(ev.sgv, mmol).as_str());

    let mut trend = String::new();
    let _ = trend.push_str(trend_symbol(ev.cgm_trend));

    let mut iob_text = String::new();
    let mut iob_raw: String<10> = String::new();
    let _ = write!(iob_raw, "{:.2}U", ev.active_insulin);
    let _ = write!(iob_text, "{:>5}", iob_raw.as_str());

    let mut age_text = String::new();
    let _ = write!(age_text, "{:>2}", age_ms / 60_000);

    let mut colors = FieldColors::all(ColorToken::Ok);
    if ev.sgv > WARN_ABOVE_MGDL || ev.sgv < WARN_BELOW_MGDL {
        colors.sgv = ColorToken::Warn;
        colors.trend = ColorToken::Warn;
    }

    GlanceView {
        sgv_text,
        trend_symbol: trend,
        iob_text,
        age_text,
        unit_text: units::unit_label(mmol),
        colors,
    }
}

fn invalid_view(mmol: bool) -> GlanceView {
    let mut view = GlanceView {
        sgv_text: String::new(),
        trend_symbol: String::new(),
        iob_text: String::new(),
        age_text: String::new(),
        unit_text: units::unit_label(mmol),
        colors: FieldColors::all(ColorToken::Invalid),
    };
    let _ = view.sgv_text.push_str("  --  ");
    let _ = view.trend_symbol.push_str("   ");
    let _ = view.iob_text.push_str(" -- ");
    let _ = view.age_text.push_str(">15");
    view.colors.age = ColorToken::Warn;
    view
}
