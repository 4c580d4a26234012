//! In-memory reading store.
//!
//! Stands in for the uploader's record database: the pump stack (here,
//! the simulated feed) pushes records, the controller queries the most
//! recent valid one.

use crate::app::ports::{ReadingStore, StoreError};
use crate::pump::PumpStatusEvent;

/// Append-only record store backed by a `Vec`.
#[derive(Debug, Default)]
pub struct MemoryReadingStore {
    records: Vec<PumpStatusEvent>,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record as the pump stack would.
    pub fn push(&mut self, event: PumpStatusEvent) {
        self.records.push(event);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ReadingStore for MemoryReadingStore {
    fn most_recent_valid(&self) -> Result<Option<PumpStatusEvent>, StoreError> {
        // Equivalent of "valid records ordered by cgm_date ascending,
        // take last": on a timestamp tie the later insertion wins.
        let mut newest: Option<&PumpStatusEvent> = None;
        for record in self.records.iter().filter(|r| r.valid_sgv) {
            if newest.map_or(true, |best| record.cgm_date_ms >= best.cgm_date_ms) {
                newest = Some(record);
            }
        }
        Ok(newest.cloned())
    }
}
