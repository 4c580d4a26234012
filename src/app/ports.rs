//! Port traits — the boundary between the ticker core and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GlanceService (domain)
//! ```
//!
//! Driven adapters (record store, notification manager, alarm scheduler,
//! clock) implement these traits. The service consumes them via generics,
//! so the core never touches platform APIs directly and every behavior is
//! testable with mock adapters.

use crate::app::events::GlanceEvent;
use crate::app::kicks::Kick;
use crate::pump::PumpStatusEvent;
use crate::render::GlanceView;

// ───────────────────────────────────────────────────────────────
// Reading store (driven adapter: pump stack → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port over the store the pump stack writes into.
pub trait ReadingStore {
    /// The record with the greatest `cgm_date_ms` among those with
    /// `valid_sgv == true`, or `None` on a fresh install.
    fn most_recent_valid(&self) -> Result<Option<PumpStatusEvent>, StoreError>;
}

// ───────────────────────────────────────────────────────────────
// Notification sink (driven adapter: domain → lock screen)
// ───────────────────────────────────────────────────────────────

/// Single-slot publish into the platform notification surface.
///
/// Publishing under an already-used slot replaces the previous glance
/// rather than stacking a second notification. Tap routing (deep link
/// into the app with a synthetic back-stack) is the adapter's concern.
pub trait NotificationPort {
    fn publish(&mut self, slot: u32, view: &GlanceView) -> Result<(), PublishError>;
}

// ───────────────────────────────────────────────────────────────
// Alarm scheduler (driven adapter: domain → wall-clock wakeups)
// ───────────────────────────────────────────────────────────────

/// Coalescing one-shot scheduler that delivers a [`Kick::TimerTick`]
/// (via whatever dispatch the adapter uses) at the given wall-clock
/// instant.
///
/// Arming is set-not-add: a new deadline replaces any pending one, so at
/// most one tick is ever outstanding. Wakeups are non-exact; the
/// platform may coalesce them by minutes, and exact alarms must not be
/// requested just to refresh a glance.
pub trait AlarmPort {
    fn arm(&mut self, deadline_ms: u64);
}

// ───────────────────────────────────────────────────────────────
// Clock
// ───────────────────────────────────────────────────────────────

/// Wall-clock time source. Reading ages are wall-clock deltas, so this
/// is deliberately not a monotonic clock.
pub trait WallClock {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Kick dispatch (observer → controller)
// ───────────────────────────────────────────────────────────────

/// Dispatch handle the screen observer (and the pump stack) use to hand
/// kicks to the controller. A handle, not ownership — the controller owns
/// the observer registration, never the other way around.
pub trait KickSink {
    fn kick(&mut self, kick: Kick);
}

// ───────────────────────────────────────────────────────────────
// Event sink (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The service emits structured [`GlanceEvent`]s through this port.
/// Adapters decide where they go (serial log, debug overlay, metrics).
pub trait EventSink {
    fn emit(&mut self, event: &GlanceEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ReadingStore`] operations. All of them recover into the
/// "no data" presentation; none are surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be opened or queried.
    Unavailable,
    /// A record failed to deserialize.
    Corrupted,
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from [`NotificationPort::publish`]. Logged at debug; the next
/// tick retries implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    /// The platform rejected the publish.
    Rejected,
    /// The notification surface is not available right now.
    Unavailable,
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "store unavailable"),
            Self::Corrupted => write!(f, "record corrupted"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for PublishError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Rejected => write!(f, "publish rejected"),
            Self::Unavailable => write!(f, "notification surface unavailable"),
        }
    }
}
