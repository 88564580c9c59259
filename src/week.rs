use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use crate::types::{WEEKDAYS, Weekday, astronomical_year};
use crate::{Date, DateError};

impl Date {
    /// Day of the week for this date.
    ///
    /// The epoch 0001-01-01 CE is a Monday; the day count mod 7
    /// (Euclidean) counts forward from it for CE dates and backward for
    /// BCE dates, so the result is always in Monday..=Sunday (1-7).
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value.
    pub fn weekday(self) -> Result<Weekday, DateError> {
        let index = self.day_count()?.rem_euclid(7) as usize;
        Ok(WEEKDAYS[index])
    }

    /// Number of ISO-8601 weeks in this date's year (52 or 53).
    #[inline]
    pub fn iso_weeks_in_year(self) -> u8 {
        iso_weeks_in_year(self.year)
    }

    /// ISO-8601 week number of this date.
    ///
    /// Week 1 is the week containing the year's first Thursday. The
    /// first days of January may therefore belong to the last week of
    /// the previous ISO year, and the last days of December to week 1 of
    /// the next.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value.
    pub fn iso_week_of_year(self) -> Result<u8, DateError> {
        let ordinal = i64::from(self.year_day()?);
        let weekday = i64::from(self.weekday()?.iso_number());
        let week = (10 + ordinal - weekday) / 7;
        if week < 1 {
            let previous = if self.year == 1 { -1 } else { self.year - 1 };
            Ok(iso_weeks_in_year(previous))
        } else if week > i64::from(iso_weeks_in_year(self.year)) {
            Ok(1)
        } else {
            Ok(week as u8)
        }
    }
}

/// Number of ISO-8601 weeks in a year: 53 for long years, else 52.
///
/// A year is long when `(a + a/4 - a/100 + a/400) mod 7` is 4, or 3 for
/// the preceding year. The marker runs on astronomical years with floor
/// division, which keeps BCE years on the same 400-year period.
pub fn iso_weeks_in_year(year: i64) -> u8 {
    let a = astronomical_year(year);
    if long_year_marker(a) == 4 || long_year_marker(a - 1) == 3 {
        53
    } else {
        52
    }
}

const fn long_year_marker(a: i64) -> i64 {
    (a + a.div_euclid(LEAP_YEAR_CYCLE) - a.div_euclid(CENTURY_CYCLE)
        + a.div_euclid(GREGORIAN_CYCLE))
    .rem_euclid(7)
}
