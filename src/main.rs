//! PumpGlance simulator.
//!
//! Drives the ticker against a simulated pump and a terminal
//! "lock screen": readings land every five minutes of simulated time,
//! the screen toggles on and off, and the minute tick rearms while it
//! is on. Useful for eyeballing the glance layout and the color policy
//! without a device.
//!
//! ```text
//!  SimulatedPump ─▶ MemoryReadingStore ─▶ ┌───────────────┐
//!  ScreenObserver ─▶ KickQueue ─────────▶ │ GlanceService │ ─▶ TerminalNotifier
//!  HostAlarm ──────▶ TimerTick ─────────▶ └───────────────┘ ─▶ LogEventSink
//! ```

use anyhow::Result;
use log::info;
use rand::SeedableRng;

use pumpglance::adapters::alarm::HostAlarm;
use pumpglance::adapters::log_sink::LogEventSink;
use pumpglance::adapters::memory_store::MemoryReadingStore;
use pumpglance::adapters::sim_pump::SimulatedPump;
use pumpglance::adapters::terminal::TerminalNotifier;
use pumpglance::app::kicks::Kick;
use pumpglance::app::ports::{KickSink, WallClock};
use pumpglance::app::service::{GlanceService, KickQueue};
use pumpglance::config::GlanceConfig;
use pumpglance::screen::ScreenObserver;

/// Simulated time runs this much faster than the wall clock.
const TIME_SCALE: u64 = 60;

/// Total simulated span: one hour of device time.
const RUN_MS: u64 = 60 * 60 * 1000;

/// One pump reading per five simulated minutes.
const PUMP_PERIOD_MS: u64 = 5 * 60 * 1000;

/// Scaled wall clock so a simulated hour takes a terminal minute.
struct ScaledClock {
    origin: std::time::Instant,
    epoch_ms: u64,
}

impl ScaledClock {
    fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
            epoch_ms: 1_700_000_000_000,
        }
    }
}

impl WallClock for ScaledClock {
    fn now_ms(&self) -> u64 {
        self.epoch_ms + self.origin.elapsed().as_millis() as u64 * TIME_SCALE
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    info!(
        "simulator starting, unit={}",
        pumpglance::units::unit_label(config.mmol_per_litre)
    );

    let clock = ScaledClock::new();
    let mut store = MemoryReadingStore::new();
    let mut pump = SimulatedPump::new(rand::rngs::StdRng::seed_from_u64(0x5eed));
    let mut notifier = TerminalNotifier::new();
    let mut alarm = HostAlarm::new();
    let mut log_sink = LogEventSink::new();
    let mut observer = ScreenObserver::new();
    let mut queue = KickQueue::new();
    let mut service = GlanceService::new(config);

    let start_ms = clock.now_ms();
    let mut next_pump_ms = start_ms;
    // Screen toggles every ten simulated minutes, starting on.
    let mut next_screen_ms = start_ms;
    let mut screen_on = false;

    while clock.now_ms() - start_ms < RUN_MS {
        let now_ms = clock.now_ms();

        if now_ms >= next_pump_ms {
            store.push(pump.next_reading(now_ms));
            next_pump_ms += PUMP_PERIOD_MS;
            queue.kick(Kick::External { screen_on: None });
        }

        if now_ms >= next_screen_ms {
            screen_on = !screen_on;
            if screen_on {
                observer.screen_turned_on(&mut queue);
            } else {
                observer.screen_turned_off(&mut queue);
            }
            next_screen_ms += 10 * 60 * 1000;
        }

        if alarm.take_if_due(now_ms).is_some() {
            queue.kick(Kick::TimerTick);
        }

        while let Some(kick) = queue.pop() {
            service.handle_kick(kick, &store, &clock, &mut notifier, &mut alarm, &mut log_sink);
        }

        std::thread::sleep(std::time::Duration::from_millis(50));
    }

    println!();
    info!(
        "simulator done: {} kicks, {} glances published",
        service.kick_count(),
        notifier.published()
    );
    Ok(())
}

/// Read `pumpglance.json` from the working directory, if present.
fn load_config() -> Result<GlanceConfig> {
    match std::fs::read_to_string("pumpglance.json") {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(GlanceConfig::default()),
        Err(e) => Err(e.into()),
    }
}
