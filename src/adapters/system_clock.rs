//! Host wall-clock adapter.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::ports::WallClock;

/// Wall clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl WallClock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A clock before 1970 is not a state this process can work in.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
