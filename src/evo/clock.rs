//! Time sources for the evolution deadline.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::atomic::{AtomicI32, Ordering};

/// A source of timestamps.
///
/// The evolution loop reads the clock once when computing its deadline and
/// once at the start of every iteration.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A simulated clock that advances by a fixed step on every reading.
///
/// The first reading returns `start`, the second `start + step`, and so on.
/// Useful for exercising deadlines without real waiting.
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use u_evo::evo::{Clock, SteppingClock};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let clock = SteppingClock::new(start, TimeDelta::seconds(1));
/// assert_eq!(clock.now(), start);
/// assert_eq!(clock.now(), start + TimeDelta::seconds(1));
/// ```
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: TimeDelta,
    ticks: AtomicI32,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            start,
            step,
            ticks: AtomicI32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.step
            .checked_mul(tick)
            .and_then(|offset| self.start.checked_add_signed(offset))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stepping_clock_advances() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = SteppingClock::new(start, TimeDelta::milliseconds(250));
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(250));
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(500));
    }

    #[test]
    fn test_system_clock_monotone_enough() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }
}
