//! Where the footer year comes from.

use chrono::{Datelike, Local};

/// Source of the current calendar year.
pub trait Clock {
    /// Year according to this clock.
    fn current_year(&self) -> i32;
}

/// Local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock stuck in one year. Used by tests and reproducible builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl Clock for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Read the year once for a render pass.
pub fn derived_year(clock: &dyn Clock) -> i32 {
    clock.current_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_year_is_returned_verbatim() {
        assert_eq!(derived_year(&FixedYear(2024)), 2024);
        assert_eq!(derived_year(&FixedYear(1999)), 1999);
    }

    #[test]
    fn system_clock_matches_chrono() {
        let expected = Local::now().year();
        let year = derived_year(&SystemClock);
        // a render straddling New Year's Eve may see the next year
        assert!(year == expected || year == expected + 1);
    }
}
