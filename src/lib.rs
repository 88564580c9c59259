mod arith;
mod consts;
mod daycount;
mod prelude;
mod types;
mod week;

pub use consts::*;
pub use types::{Weekday, days_in_month, days_in_year, is_leap_year};
pub use week::iso_weeks_in_year;

use std::cmp::Ordering;
use std::fmt;

/// Represents a day in the proleptic Gregorian calendar, covering years
/// from 100 000 000 BCE to 100 000 000 CE.
///
/// Years use Gregorian numbering: there is no year 0, so -1 means 1 BCE
/// and the year after -1 is 1. A request for year 0 is normalized to 1.
/// Values are immutable; every arithmetic operation returns a new `Date`.
///
/// The only way to obtain a usable `Date` is [`Date::new`]. The zero
/// value produced by `Date::default()` is a placeholder that every
/// computing operation rejects with [`DateError::Uninitialized`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "(i64, u8, u8)", into = "(i64, u8, u8)")]
pub struct Date {
    year: i64,
    month: u8,
    day: u8,
    built: bool,
}

/// Error type for date construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The date value never passed through [`Date::new`].
    #[error("date value was not created through Date::new")]
    Uninitialized,

    /// Month outside 1-12.
    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day outside the bounds of its month.
    #[error("invalid day {day} for month {month} of year {year}")]
    InvalidDay { year: i64, month: u8, day: u8 },

    /// An operation left the supported year range.
    #[error("date arithmetic left the supported year range")]
    Overflow,
}

impl Date {
    /// Creates a date from a (year, month, day) triple.
    ///
    /// Year 0 is normalized to 1; negative years are BCE. This is the
    /// factory used by every other construction path, including serde
    /// deserialization and the arithmetic engine's final validation.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` when
    /// the respective component is out of range, and `DateError::Overflow`
    /// when the year lies outside `MIN_YEAR..=MAX_YEAR`.
    pub const fn new(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        // Gregorian numbering skips 0: a year-0 request means 1 CE
        let year = if year == 0 { 1 } else { year };
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(DateError::Overflow);
        }
        if month < MIN_MONTH || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            built: true,
        })
    }

    /// Returns the Gregorian year (negative for BCE, never 0).
    #[inline]
    pub const fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Whether this date's year is a leap year.
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    #[inline]
    pub const fn days_in_month(self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Rejects values that never went through [`Date::new`].
    pub(crate) const fn ensure_built(self) -> Result<(), DateError> {
        if self.built {
            Ok(())
        } else {
            Err(DateError::Uninitialized)
        }
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        // Signed years order BCE before CE; month/day run forward within
        // every year, BCE included.
        (self.year, self.month, self.day, self.built).cmp(&(
            other.year,
            other.month,
            other.day,
            other.built,
        ))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(
                f,
                "-{:04}-{:02}-{:02}",
                self.year.unsigned_abs(),
                self.month,
                self.day
            )
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl From<Date> for (i64, u8, u8) {
    fn from(date: Date) -> Self {
        (date.year, date.month, date.day)
    }
}

impl TryFrom<(i64, u8, u8)> for Date {
    type Error = DateError;

    fn try_from(value: (i64, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let date = Date::new(1991, 8, 15).unwrap();
        assert_eq!(date.year(), 1991);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_new_bce() {
        let date = Date::new(-44, 3, 15).unwrap();
        assert_eq!(date.year(), -44);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_year_zero_normalizes_to_one() {
        let date = Date::new(0, 6, 15).unwrap();
        assert_eq!(date.year(), 1);
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            Date::new(2024, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            Date::new(2024, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_invalid_day() {
        assert!(matches!(
            Date::new(2024, 1, 0),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            Date::new(2024, 4, 31),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
    }

    #[test]
    fn test_february_bounds() {
        assert!(Date::new(2020, 2, 29).is_ok());
        assert!(matches!(
            Date::new(2021, 2, 29),
            Err(DateError::InvalidDay { .. })
        ));
        // 1900 is not a leap year (century not divisible by 400)
        assert!(Date::new(1900, 2, 29).is_err());
        assert!(Date::new(2000, 2, 29).is_ok());
        // BCE leap year: -5 is astronomical -4
        assert!(Date::new(-5, 2, 29).is_ok());
        assert!(Date::new(-2, 2, 29).is_err());
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(
            Date::new(MAX_YEAR + 1, 1, 1),
            Err(DateError::Overflow)
        ));
        assert!(matches!(
            Date::new(MIN_YEAR - 1, 1, 1),
            Err(DateError::Overflow)
        ));
        assert!(Date::new(MAX_YEAR, 12, 31).is_ok());
        assert!(Date::new(MIN_YEAR, 1, 1).is_ok());
    }

    #[test]
    fn test_default_is_rejected_by_operations() {
        let zero = Date::default();
        assert!(matches!(zero.add_days(1), Err(DateError::Uninitialized)));
        assert!(matches!(zero.add_months(1), Err(DateError::Uninitialized)));
        assert!(matches!(zero.add_years(1), Err(DateError::Uninitialized)));
        assert!(matches!(zero.weekday(), Err(DateError::Uninitialized)));
        assert!(matches!(zero.year_day(), Err(DateError::Uninitialized)));
        let valid = Date::new(2024, 1, 1).unwrap();
        assert!(matches!(
            zero.days_to(valid),
            Err(DateError::Uninitialized)
        ));
        assert!(matches!(
            valid.days_to(zero),
            Err(DateError::Uninitialized)
        ));
    }

    #[test]
    fn test_ordering_chronological() {
        let caesar = Date::new(-44, 3, 15).unwrap();
        let late_bce = Date::new(-1, 12, 31).unwrap();
        let epoch = Date::new(1, 1, 1).unwrap();
        let modern = Date::new(2024, 6, 1).unwrap();
        assert!(caesar < late_bce);
        assert!(late_bce < epoch);
        assert!(epoch < modern);

        // month/day run forward within a BCE year too
        let early = Date::new(-44, 1, 1).unwrap();
        assert!(early < caesar);
    }

    #[test]
    fn test_equality() {
        let a = Date::new(2024, 2, 29).unwrap();
        let b = Date::new(2024, 2, 29).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Date::new(2024, 3, 1).unwrap());
        assert_ne!(a, Date::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Date::new(1991, 8, 15).unwrap().to_string(), "1991-08-15");
        assert_eq!(Date::new(-5, 3, 1).unwrap().to_string(), "-0005-03-01");
        assert_eq!(Date::new(1, 1, 1).unwrap().to_string(), "0001-01-01");
    }

    #[test]
    fn test_serde_round_trip() {
        let date = Date::new(-44, 3, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "[-44,3,15]");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Invalid day for February is rejected on the way in
        let result: Result<Date, _> = serde_json::from_str("[2024,2,30]");
        assert!(result.is_err());

        let result: Result<Date, _> = serde_json::from_str("[2024,13,1]");
        assert!(result.is_err());

        // Year 0 deserializes as year 1, same as Date::new
        let date: Date = serde_json::from_str("[0,1,1]").unwrap();
        assert_eq!(date.year(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Date::new(2024, 13, 1).unwrap_err();
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1-12)");
        let err = Date::new(2021, 2, 29).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid day 29 for month 2 of year 2021"
        );
    }
}
