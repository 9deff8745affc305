use bitflags::bitflags;
use chrono::{Datelike, NaiveDate};

/// A validated Gregorian calendar date.
///
/// This is the only date representation the crate hands out: it can only be
/// built through [`CalendarDate::new`], so month and day ranges and leap
/// years are already checked by the time a value exists. Ordering is plain
/// chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a (year, month, day) triple.
    ///
    /// Returns `None` for anything that is not a real Gregorian date
    /// (month 13, Feb 30, Feb 29 outside a leap year, ...).
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

bitflags! {
    /// Caveats attached to a successful normalization.
    ///
    /// None of these make the result less valid; they mark places where a
    /// documented heuristic decided between readings and the caller may want
    /// to surface a warning.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParseFlags: u8 {
        /// A two-digit year was pivoted to a full year.
        const TWO_DIGIT_YEAR = 1 << 0;
        /// Both numeric components were valid months; the month-first
        /// default decided the reading.
        const MONTH_FIRST_ASSUMED = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_month_and_day() {
        assert!(CalendarDate::new(1990, 5, 20).is_some());
        assert!(CalendarDate::new(1990, 13, 1).is_none());
        assert!(CalendarDate::new(1990, 0, 1).is_none());
        assert!(CalendarDate::new(1990, 2, 31).is_none());
    }

    #[test]
    fn new_honors_leap_years() {
        assert!(CalendarDate::new(2024, 2, 29).is_some());
        assert!(CalendarDate::new(2023, 2, 29).is_none());
        assert!(CalendarDate::new(1900, 2, 29).is_none());
        assert!(CalendarDate::new(2000, 2, 29).is_some());
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CalendarDate::new(1879, 3, 14).unwrap();
        let b = CalendarDate::new(1879, 3, 15).unwrap();
        let c = CalendarDate::new(1955, 4, 18).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn displays_as_iso() {
        let d = CalendarDate::new(1985, 3, 15).unwrap();
        assert_eq!(d.to_string(), "1985-03-15");
        let early = CalendarDate::new(879, 3, 14).unwrap();
        assert_eq!(early.to_string(), "0879-03-14");
    }
}
