//! Clock abstraction for time-dependent rules
//!
//! Age checks, birthday greetings and the ride swipe cooldown all read the
//! current time. They go through [`Clock`] so tests and scripted sessions can
//! control it.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use std::fmt;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Source of the current time
pub trait Clock: fmt::Debug + Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date, used for ages and birthdays
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock of the machine running the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Create a clock frozen at noon UTC on `date`
    pub fn on_date(date: NaiveDate) -> Self {
        let start = date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc();
        Self::new(start)
    }

    /// Move the clock to `instant`
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = instant;
    }

    /// Move the clock forward by `duration`
    ///
    /// The clock stays put if the result would be out of range.
    pub fn advance(&self, duration: Duration) {
        if self.checked_advance(duration).is_none() {
            warn!("Manual clock cannot advance by {}", duration);
        }
    }

    /// Move the clock forward by `duration`, returning the new time, or
    /// `None` without moving if the result would be out of range
    pub fn checked_advance(&self, duration: Duration) -> Option<DateTime<Utc>> {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = now.checked_add_signed(duration)?;
        *now = next;
        debug!("Manual clock advanced by {} to {}", duration, next);
        Some(next)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_is_frozen_until_advanced() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::seconds(6));
        assert_eq!(clock.now(), start + Duration::seconds(6));
    }

    #[test]
    fn test_manual_clock_refuses_overflow() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        let clock = ManualClock::new(start);

        assert_eq!(clock.checked_advance(Duration::MAX), None);
        clock.advance(Duration::MAX);
        assert_eq!(clock.now(), start);

        let later = clock.checked_advance(Duration::days(1));
        assert_eq!(later, Some(start + Duration::days(1)));
    }

    #[test]
    fn test_manual_clock_on_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = ManualClock::on_date(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_manual_clock_set() {
        let clock = ManualClock::on_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let later = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
