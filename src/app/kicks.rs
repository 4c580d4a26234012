//! Inbound triggers for the refresh controller.
//!
//! Every kick causes exactly one render; only the continuation (rearming
//! the minute tick) depends on the screen state.

/// A reason to render now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kick {
    /// The device screen turned on or off. Updates the stored screen
    /// state before rendering.
    ScreenState { on: bool },

    /// The armed minute tick fired.
    TimerTick,

    /// Something outside the ticker wants a render — typically a fresh
    /// pump event landing in the store. The optional payload overrides
    /// the stored screen state first.
    External { screen_on: Option<bool> },
}
