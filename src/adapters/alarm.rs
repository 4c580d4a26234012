//! Host alarm adapter.
//!
//! The simulator's dispatch loop polls the stored deadline and delivers
//! a [`Kick::TimerTick`](crate::app::kicks::Kick) when it passes — a
//! coalescing, non-exact wakeup, like the RTC alarm it stands in for.

use crate::app::ports::AlarmPort;

/// Single-slot alarm: arming replaces any pending deadline.
#[derive(Debug, Default)]
pub struct HostAlarm {
    deadline_ms: Option<u64>,
}

impl HostAlarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the deadline if it has passed. At most one tick per arm.
    pub fn take_if_due(&mut self, now_ms: u64) -> Option<u64> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.deadline_ms.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<u64> {
        self.deadline_ms
    }
}

impl AlarmPort for HostAlarm {
    fn arm(&mut self, deadline_ms: u64) {
        self.deadline_ms = Some(deadline_ms);
    }
}
