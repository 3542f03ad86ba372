//! Wall-clock abstraction and timestamp formatting.
//!
//! Everything time-related goes through [`Clock`] so that session logic can
//! be driven with fabricated timestamps in tests instead of real waiting.
//! Formats follow the monitor's fixed convention: 24-hour `HH:MM:SS` for
//! feed entries, `YYYY-MM-DD HH:MM:SS` for the session-start banner.

use chrono::{DateTime, Local};

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Format a timestamp as 24-hour `HH:MM:SS` for feed entries.
pub fn clock_time(ts: DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS` for the session banner.
pub fn session_time(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
