//! Refresh controller — the hexagonal core of the ticker.
//!
//! [`GlanceService`] couples three trigger sources (screen transitions,
//! the minute tick, external kicks from the pump stack) into single
//! "render now" decisions, publishes the result under a fixed
//! notification slot, and rearms the tick while the screen stays on.
//!
//! Kicks are serialized by `&mut self`: each one runs to completion
//! before the next, so no two renders ever observe interleaved state.

use log::{debug, warn};

use crate::app::events::GlanceEvent;
use crate::app::kicks::Kick;
use crate::app::ports::{AlarmPort, EventSink, KickSink, NotificationPort, ReadingStore, WallClock};
use crate::config::GlanceConfig;
use crate::render;

/// Fixed notification slot: successive publishes replace, never stack.
pub const GLANCE_SLOT: u32 = 1;

/// Controller scheduling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No pending tick.
    Idle,
    /// A tick is pending at the given wall-clock deadline.
    Armed { deadline_ms: u64 },
}

/// The refresh controller.
pub struct GlanceService {
    config: GlanceConfig,
    /// Last known screen state. Unknown is treated as off so nothing is
    /// scheduled before the observer has spoken.
    screen_on: bool,
    /// Deadline of the pending tick, if any.
    armed_at: Option<u64>,
    kick_count: u64,
}

impl GlanceService {
    pub fn new(config: GlanceConfig) -> Self {
        Self {
            config,
            screen_on: false,
            armed_at: None,
            kick_count: 0,
        }
    }

    // ── Kick handling ─────────────────────────────────────────

    /// Process one kick: update screen state if the kick carries it,
    /// render the most recent valid reading, publish, reschedule.
    ///
    /// Every kick produces exactly one publish. Store failures, empty
    /// stores and stale readings all collapse into the greyed-out "no
    /// data" glance; publish failures are logged and retried implicitly
    /// on the next tick. Nothing here can break the scheduling chain.
    pub fn handle_kick(
        &mut self,
        kick: Kick,
        store: &impl ReadingStore,
        clock: &impl WallClock,
        notifier: &mut impl NotificationPort,
        alarm: &mut impl AlarmPort,
        sink: &mut impl EventSink,
    ) {
        self.kick_count += 1;

        match kick {
            Kick::ScreenState { on } => self.screen_on = on,
            Kick::External { screen_on } => {
                if let Some(on) = screen_on {
                    self.screen_on = on;
                }
            }
            Kick::TimerTick => self.armed_at = None,
        }
        debug!("kick {:?}, screen_on={}", kick, self.screen_on);

        self.refresh(store, clock, notifier, alarm, sink);
    }

    fn refresh(
        &mut self,
        store: &impl ReadingStore,
        clock: &impl WallClock,
        notifier: &mut impl NotificationPort,
        alarm: &mut impl AlarmPort,
        sink: &mut impl EventSink,
    ) {
        let now_ms = clock.now_ms();

        let latest = match store.most_recent_valid() {
            Ok(latest) => latest,
            Err(e) => {
                // Treated as no data; the next kick tries again.
                warn!("reading store unavailable: {e}");
                None
            }
        };

        let view = render::render(latest.as_ref(), now_ms, self.config.mmol_per_litre);
        let valid = view.colors.sgv != render::ColorToken::Invalid;

        if let Err(e) = notifier.publish(GLANCE_SLOT, &view) {
            debug!("notification publish failed: {e}");
            sink.emit(&GlanceEvent::PublishFailed);
        }
        sink.emit(&GlanceEvent::Rendered {
            valid,
            screen_on: self.screen_on,
        });

        if self.screen_on {
            let deadline_ms = now_ms + u64::from(self.config.refresh_interval_ms);
            alarm.arm(deadline_ms);
            self.armed_at = Some(deadline_ms);
            sink.emit(&GlanceEvent::TickArmed { deadline_ms });
            debug!("glance updated, next tick at {deadline_ms}");
        } else {
            // No eager cancel: an already-armed platform alarm may still
            // deliver one harmless render, after which the chain stops.
            self.armed_at = None;
            sink.emit(&GlanceEvent::ChainStopped);
            debug!("glance updated, screen off, no tick armed");
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current scheduling state.
    pub fn state(&self) -> ControllerState {
        match self.armed_at {
            Some(deadline_ms) => ControllerState::Armed { deadline_ms },
            None => ControllerState::Idle,
        }
    }

    /// Deadline of the pending tick, if one is armed.
    pub fn pending_tick(&self) -> Option<u64> {
        self.armed_at
    }

    /// Last known screen state.
    pub fn screen_on(&self) -> bool {
        self.screen_on
    }

    /// Kicks processed since construction.
    pub fn kick_count(&self) -> u64 {
        self.kick_count
    }

    /// Live configuration (for preference read-back).
    pub fn config(&self) -> &GlanceConfig {
        &self.config
    }

    /// Replace the configuration (preference UI changed the unit).
    /// Takes effect on the next render.
    pub fn set_config(&mut self, config: GlanceConfig) {
        self.config = config;
    }
}

/// Queue-backed [`KickSink`] for single-threaded dispatch loops: the
/// observer pushes, the loop drains into [`GlanceService::handle_kick`].
#[derive(Debug, Default)]
pub struct KickQueue {
    pending: std::collections::VecDeque<Kick>,
}

impl KickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&mut self) -> Option<Kick> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl KickSink for KickQueue {
    fn kick(&mut self, kick: Kick) {
        self.pending.push_back(kick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::{PublishError, StoreError};
    use crate::pump::{CgmTrend, PumpStatusEvent};
    use crate::render::GlanceView;

    struct FixedStore(Result<Option<PumpStatusEvent>, StoreError>);
    impl ReadingStore for FixedStore {
        fn most_recent_valid(&self) -> Result<Option<PumpStatusEvent>, StoreError> {
            self.0.clone()
        }
    }

    struct FixedClock(u64);
    impl WallClock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        published: Vec<(u32, GlanceView)>,
        reject: bool,
    }
    impl NotificationPort for RecordingNotifier {
        fn publish(&mut self, slot: u32, view: &GlanceView) -> Result<(), PublishError> {
            if self.reject {
                return Err(PublishError::Rejected);
            }
            self.published.push((slot, view.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingAlarm {
        deadline: Option<u64>,
        arms: usize,
    }
    impl AlarmPort for RecordingAlarm {
        fn arm(&mut self, deadline_ms: u64) {
            self.deadline = Some(deadline_ms);
            self.arms += 1;
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<GlanceEvent>,
    }
    impl EventSink for RecordingSink {
        fn emit(&mut self, event: &GlanceEvent) {
            self.events.push(*event);
        }
    }

    const NOW: u64 = 1_700_000_000_000;

    fn fresh_store() -> FixedStore {
        FixedStore(Ok(Some(PumpStatusEvent::reading(
            NOW - 60_000,
            120,
            CgmTrend::Flat,
            1.2,
        ))))
    }

    fn fixture() -> (
        GlanceService,
        FixedClock,
        RecordingNotifier,
        RecordingAlarm,
        RecordingSink,
    ) {
        (
            GlanceService::new(GlanceConfig::default()),
            FixedClock(NOW),
            RecordingNotifier::default(),
            RecordingAlarm::default(),
            RecordingSink::default(),
        )
    }

    #[test]
    fn starts_idle_with_screen_off() {
        let svc = GlanceService::new(GlanceConfig::default());
        assert_eq!(svc.state(), ControllerState::Idle);
        assert!(!svc.screen_on());
    }

    #[test]
    fn screen_on_kick_renders_and_arms() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        svc.handle_kick(
            Kick::ScreenState { on: true },
            &fresh_store(),
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(notifier.published.len(), 1);
        assert_eq!(notifier.published[0].0, GLANCE_SLOT);
        assert_eq!(alarm.deadline, Some(NOW + 60_000));
        assert_eq!(
            svc.state(),
            ControllerState::Armed {
                deadline_ms: NOW + 60_000
            }
        );
    }

    #[test]
    fn screen_off_kick_renders_without_arming() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        svc.handle_kick(
            Kick::ScreenState { on: false },
            &fresh_store(),
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(notifier.published.len(), 1);
        assert_eq!(alarm.arms, 0);
        assert_eq!(svc.state(), ControllerState::Idle);
    }

    #[test]
    fn external_kick_overrides_screen_state() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        svc.handle_kick(
            Kick::External {
                screen_on: Some(true),
            },
            &fresh_store(),
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert!(svc.screen_on());
        assert_eq!(alarm.arms, 1);
    }

    #[test]
    fn external_kick_without_payload_keeps_screen_state() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        svc.handle_kick(
            Kick::External { screen_on: None },
            &fresh_store(),
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert!(!svc.screen_on());
        assert_eq!(notifier.published.len(), 1);
        assert_eq!(alarm.arms, 0);
    }

    #[test]
    fn store_failure_renders_no_data_glance() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        let store = FixedStore(Err(StoreError::Unavailable));
        svc.handle_kick(
            Kick::External { screen_on: None },
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(notifier.published.len(), 1);
        assert_eq!(notifier.published[0].1.sgv_text.as_str(), "  --  ");
    }

    #[test]
    fn empty_store_renders_no_data_glance() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        let store = FixedStore(Ok(None));
        svc.handle_kick(
            Kick::TimerTick,
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(notifier.published[0].1.age_text.as_str(), ">15");
    }

    #[test]
    fn publish_failure_does_not_break_rearm() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        notifier.reject = true;
        svc.handle_kick(
            Kick::ScreenState { on: true },
            &fresh_store(),
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert!(sink.events.contains(&GlanceEvent::PublishFailed));
        assert_eq!(alarm.arms, 1, "publish failure must not stop the chain");
    }

    #[test]
    fn timer_tick_rearms_while_screen_on() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        let store = fresh_store();
        svc.handle_kick(
            Kick::ScreenState { on: true },
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        svc.handle_kick(
            Kick::TimerTick,
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(notifier.published.len(), 2);
        assert_eq!(alarm.arms, 2);
        assert_eq!(svc.pending_tick(), Some(NOW + 60_000));
    }

    #[test]
    fn screen_off_stops_the_chain() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        let store = fresh_store();
        svc.handle_kick(
            Kick::ScreenState { on: true },
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        svc.handle_kick(
            Kick::ScreenState { on: false },
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(svc.state(), ControllerState::Idle);
        // A pending platform alarm may still fire once; it must not rearm.
        svc.handle_kick(
            Kick::TimerTick,
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(svc.state(), ControllerState::Idle);
        assert_eq!(alarm.arms, 1);
    }

    #[test]
    fn set_config_takes_effect_on_next_render() {
        let (mut svc, clock, mut notifier, mut alarm, mut sink) = fixture();
        let store = fresh_store();
        svc.set_config(GlanceConfig {
            mmol_per_litre: true,
            ..GlanceConfig::default()
        });
        svc.handle_kick(
            Kick::External { screen_on: None },
            &store,
            &clock,
            &mut notifier,
            &mut alarm,
            &mut sink,
        );
        assert_eq!(notifier.published[0].1.unit_text, "mmol/L");
    }

    #[test]
    fn kick_queue_preserves_fifo_order() {
        let mut queue = KickQueue::new();
        queue.kick(Kick::ScreenState { on: true });
        queue.kick(Kick::TimerTick);
        assert_eq!(queue.pop(), Some(Kick::ScreenState { on: true }));
        assert_eq!(queue.pop(), Some(Kick::TimerTick));
        assert!(queue.is_empty());
    }
}
