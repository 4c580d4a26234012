//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured ticker events to the
//! logger. A debug overlay or metrics adapter would implement the same
//! trait.

use log::{debug, info};

use crate::app::events::GlanceEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`GlanceEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &GlanceEvent) {
        match event {
            GlanceEvent::Rendered { valid, screen_on } => {
                info!("RENDER | valid={valid} screen_on={screen_on}");
            }
            GlanceEvent::TickArmed { deadline_ms } => {
                debug!("TICK   | armed at {deadline_ms}");
            }
            GlanceEvent::ChainStopped => {
                debug!("TICK   | chain stopped (screen off)");
            }
            GlanceEvent::PublishFailed => {
                debug!("NOTIFY | publish failed, retrying on next tick");
            }
        }
    }
}
