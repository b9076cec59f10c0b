use chrono::{DateTime, Duration, NaiveDate, Utc};

/// A simple clock abstraction for deterministic dates in views and tests.
///
/// The session form's "Today" and "Yesterday" shortcuts derive from this, so
/// tests can pin the calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Returns the current UTC calendar day.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the previous UTC calendar day.
    #[must_use]
    pub fn yesterday(&self) -> NaiveDate {
        self.today().pred_opt().unwrap_or_else(|| self.today())
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_stable_day() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), fixed_now());
        assert_eq!(clock.today(), fixed_now().date_naive());
    }

    #[test]
    fn yesterday_is_one_day_before_today() {
        let clock = fixed_clock();
        assert_eq!(
            clock.yesterday(),
            clock.today().pred_opt().unwrap()
        );
    }

    #[test]
    fn advance_moves_a_fixed_clock_across_days() {
        let mut clock = fixed_clock();
        let before = clock.today();
        clock.advance(Duration::days(1));
        assert_eq!(clock.today(), before.succ_opt().unwrap());
    }
}
