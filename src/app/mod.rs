//! Application core of the lock-screen ticker.
//!
//! ```text
//!  ReadingStore ──▶ ┌──────────────────────┐ ──▶ NotificationPort
//!  WallClock   ──▶  │    GlanceService      │ ──▶ AlarmPort
//!  Kick (inbound) ─▶│  controller + policy  │ ──▶ EventSink
//!                   └──────────────────────┘
//! ```
//!
//! The service consumes port traits via generics, so the core never
//! touches the platform notification manager, the record store, or the
//! alarm scheduler directly.

pub mod events;
pub mod kicks;
pub mod ports;
pub mod service;
