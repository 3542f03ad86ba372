//! Interval timers for the tick loop.
//!
//! The monitor runs on two fixed-period timers, polled rather than
//! scheduled: callers hand the current wall-clock time to
//! [`IntervalTimer::due_ticks`], which reports how many whole periods have
//! elapsed since the last fire and rolls the fire point forward. The session
//! stays the only mutator and tests never have to sleep.

use chrono::{DateTime, Duration, Local};

/// A fixed-period timer that fires once per elapsed whole period.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: i64,
    last_fire: DateTime<Local>,
}

impl IntervalTimer {
    /// Create a timer anchored at `start`. The first tick is due one full
    /// period after `start`.
    ///
    /// A non-positive period is bumped to 1 ms to keep the arithmetic sane.
    pub fn new(period_ms: u64, start: DateTime<Local>) -> Self {
        Self {
            period_ms: (period_ms as i64).max(1),
            last_fire: start,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms as u64
    }

    /// How many whole periods have elapsed since the last fire.
    ///
    /// Advances the fire point by exactly the consumed periods, so a stalled
    /// caller catches up on the next poll rather than dropping ticks. A `now`
    /// earlier than the last fire (clock stepped backwards) yields zero and
    /// leaves the timer untouched.
    pub fn due_ticks(&mut self, now: DateTime<Local>) -> u64 {
        let elapsed_ms = (now - self.last_fire).num_milliseconds();
        if elapsed_ms < self.period_ms {
            return 0;
        }
        let ticks = elapsed_ms / self.period_ms;
        self.last_fire += Duration::milliseconds(ticks * self.period_ms);
        ticks as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 1, 12, 0, secs).unwrap()
    }

    #[test]
    fn fires_once_per_period() {
        let mut timer = IntervalTimer::new(2000, at(0));
        assert_eq!(timer.due_ticks(at(1)), 0);
        assert_eq!(timer.due_ticks(at(2)), 1);
        assert_eq!(timer.due_ticks(at(3)), 0);
        assert_eq!(timer.due_ticks(at(4)), 1);
    }

    #[test]
    fn catches_up_after_a_stall() {
        let mut timer = IntervalTimer::new(2000, at(0));
        assert_eq!(timer.due_ticks(at(11)), 5);
        // The leftover second counts toward the next tick.
        assert_eq!(timer.due_ticks(at(12)), 1);
    }

    #[test]
    fn backwards_clock_yields_zero() {
        let mut timer = IntervalTimer::new(1000, at(10));
        assert_eq!(timer.due_ticks(at(5)), 0);
        assert_eq!(timer.due_ticks(at(11)), 1);
    }
}
