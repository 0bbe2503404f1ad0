//! Clock abstraction for cache freshness decisions
//!
//! The provider compares cache timestamps against "now". Injecting the clock
//! keeps freshness-window tests deterministic instead of wall-clock-dependent.

use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock {
    /// Returns the current time in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always reports a fixed instant
///
/// Used by tests to pin the freshness window to a known point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_close_to_utc_now() {
        let before = Utc::now();
        let now = SystemClock.now();
        let after = Utc::now();

        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let instant = Utc::now();
        let clock = FixedClock(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant, "Repeated reads should not advance");
    }
}
