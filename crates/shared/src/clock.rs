//! Clock abstraction for calendar-date dependent calculations.
//!
//! Analytics windows such as "last 7 days" are relative to the current local
//! date. Callers pass a [`Clock`] instead of reading the wall clock directly
//! so tests can pin the date and stay deterministic.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date in the local timezone.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_current_date() {
        let clock = SystemClock;
        let before = Local::now().date_naive();
        let today = clock.today();
        let after = Local::now().date_naive();
        // Today is either `before` or `after` (midnight rollover tolerance).
        assert!(today == before || today == after);
    }

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }
}
