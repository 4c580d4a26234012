//! Host adapters for the port traits.
//!
//! On the phone these would be the record store binding, the platform
//! notification manager and the RTC alarm manager. Here they are the
//! in-memory / terminal implementations used by the simulator binary and
//! the integration tests.

pub mod alarm;
pub mod log_sink;
pub mod memory_store;
pub mod sim_pump;
pub mod system_clock;
pub mod terminal;
