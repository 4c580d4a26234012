//! Screen-state observer.
//!
//! Mirrors the platform's "screen turned on" / "screen turned off"
//! broadcasts into kicks. The observer records the new state and
//! forwards it through a [`KickSink`] handle; it holds no timers, does
//! no rendering, and is safe to invoke between controller kicks (the
//! controller serializes the actual work).

use log::debug;

use crate::app::kicks::Kick;
use crate::app::ports::KickSink;

/// Forwards screen transitions to the refresh controller.
#[derive(Debug, Default)]
pub struct ScreenObserver {
    screen_on: bool,
}

impl ScreenObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The device screen turned on.
    pub fn screen_turned_on(&mut self, sink: &mut dyn KickSink) {
        self.forward(true, sink);
    }

    /// The device screen turned off.
    pub fn screen_turned_off(&mut self, sink: &mut dyn KickSink) {
        self.forward(false, sink);
    }

    /// Last state this observer saw.
    pub fn screen_on(&self) -> bool {
        self.screen_on
    }

    fn forward(&mut self, on: bool, sink: &mut dyn KickSink) {
        self.screen_on = on;
        debug!("screen broadcast: on={on}");
        sink.kick(Kick::ScreenState { on });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        kicks: Vec<Kick>,
    }
    impl KickSink for RecordingSink {
        fn kick(&mut self, kick: Kick) {
            self.kicks.push(kick);
        }
    }

    #[test]
    fn forwards_each_transition_as_one_kick() {
        let mut observer = ScreenObserver::new();
        let mut sink = RecordingSink::default();

        observer.screen_turned_on(&mut sink);
        observer.screen_turned_off(&mut sink);
        observer.screen_turned_on(&mut sink);

        assert_eq!(
            sink.kicks,
            vec![
                Kick::ScreenState { on: true },
                Kick::ScreenState { on: false },
                Kick::ScreenState { on: true },
            ]
        );
        assert!(observer.screen_on());
    }

    #[test]
    fn starts_with_screen_treated_as_off() {
        let observer = ScreenObserver::new();
        assert!(!observer.screen_on());
    }
}
