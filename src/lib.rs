//! PumpGlance — lock-screen glucose status ticker.
//!
//! Surfaces the most recent CGM reading, trend, insulin-on-board and
//! reading age as a persistent single-slot notification, re-rendered on
//! every pump event, on screen transitions, and once per minute while
//! the screen is on.
//!
//! The interesting logic lives in two places: the refresh controller
//! ([`app::service::GlanceService`]) that turns kicks into renders and
//! owns the minute-tick rearm chain, and the pure render policy
//! ([`render::render`]) that maps a reading to a colored, fixed-width
//! glance. Everything platform-shaped sits behind the port traits in
//! [`app::ports`].

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod pump;
pub mod render;
pub mod screen;
pub mod units;

pub mod adapters;
