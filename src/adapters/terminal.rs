//! Terminal notification adapter.
//!
//! Maps color tokens to ANSI escapes and prints the glance as a single
//! replaceable status line — the closest a terminal gets to a lock-screen
//! notification slot. The platform adapter would map the same tokens to
//! green-800 / deep-orange-800 / grey-500 and attach the deep-link
//! back-stack; none of that leaks into the core.

use std::io::{self, Write};

use crate::app::ports::{NotificationPort, PublishError};
use crate::render::{ColorToken, GlanceView};

const ANSI_RESET: &str = "\x1b[0m";

fn ansi(token: ColorToken) -> &'static str {
    match token {
        ColorToken::Ok => "\x1b[32m",      // green
        ColorToken::Warn => "\x1b[33m",    // orange-ish
        ColorToken::Invalid => "\x1b[90m", // grey
    }
}

/// Prints each published glance to stdout, overwriting the previous one.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    published: u64,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many glances have been published so far.
    pub fn published(&self) -> u64 {
        self.published
    }

    fn format_line(view: &GlanceView) -> String {
        format!(
            "{}{}{} {}{}{} {} | IOB {}{}{} | {}{}m{}",
            ansi(view.colors.sgv),
            view.sgv_text,
            ANSI_RESET,
            ansi(view.colors.trend),
            view.trend_symbol,
            ANSI_RESET,
            view.unit_text,
            ansi(view.colors.iob),
            view.iob_text,
            ANSI_RESET,
            ansi(view.colors.age),
            view.age_text,
            ANSI_RESET,
        )
    }
}

impl NotificationPort for TerminalNotifier {
    fn publish(&mut self, _slot: u32, view: &GlanceView) -> Result<(), PublishError> {
        // "\r" gives single-slot replace semantics on a terminal.
        let line = Self::format_line(view);
        let mut out = io::stdout();
        write!(out, "\r\x1b[2K{line}").map_err(|_| PublishError::Unavailable)?;
        out.flush().map_err(|_| PublishError::Unavailable)?;
        self.published += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn no_data_line_is_grey_and_orange() {
        let view = render::render(None, 0, false);
        let line = TerminalNotifier::format_line(&view);
        assert!(line.contains("\x1b[90m  --  "));
        assert!(line.contains("\x1b[33m>15"));
    }

    #[test]
    fn publishing_counts() {
        let mut notifier = TerminalNotifier::new();
        let view = render::render(None, 0, false);
        notifier.publish(1, &view).unwrap();
        assert_eq!(notifier.published(), 1);
    }
}
