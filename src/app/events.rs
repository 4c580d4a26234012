//! Outbound application events.
//!
//! The [`GlanceService`](super::service::GlanceService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them — log them, feed a debug
//! overlay, count them.

/// Structured events emitted by the ticker core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlanceEvent {
    /// A render completed and was handed to the notification sink.
    Rendered { valid: bool, screen_on: bool },

    /// A minute tick was armed at the given wall-clock deadline.
    TickArmed { deadline_ms: u64 },

    /// Screen is off; the rearm chain stopped after this render.
    ChainStopped,

    /// The notification sink rejected a publish.
    PublishFailed,
}
