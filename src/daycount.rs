use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_COMMON_YEAR, DECEMBER, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE,
};
use crate::types::{days_in_month, days_in_year};
use crate::{Date, DateError};

// Day counts are measured from the fixed epoch 0001-01-01 CE, which is
// day 0. Every date strictly before it has a negative count.

/// Day count of 1 January of a CE year (the year's anchor day).
///
/// Sums the whole years before `year` plus the leap days among them; the
/// year's own leap day is never included, so the anchor stays correct
/// until the date advances past 29 February.
pub(crate) const fn ce_anchor(year: i64) -> i64 {
    let prior = year - 1;
    DAYS_PER_COMMON_YEAR * prior + prior / LEAP_YEAR_CYCLE - prior / CENTURY_CYCLE
        + prior / GREGORIAN_CYCLE
}

/// Day count of 31 December of a BCE year (the year's anchor day).
///
/// BCE years hang off the far side of the epoch, so their anchor sits at
/// the end of the year and the count accumulates backward toward it.
pub(crate) const fn bce_anchor(year: i64) -> i64 {
    // whole BCE years strictly between `year` and the epoch
    let between = -year - 1;
    if between == 0 {
        return -1;
    }
    // Those years are astronomical -(between-1)..=0. Mirror symmetry of
    // the leap rule counts the leap ones among 1..=between-1, and
    // astronomical 0 (divisible by 400) adds one more.
    let prior = between - 1;
    let leaps =
        prior / LEAP_YEAR_CYCLE - prior / CENTURY_CYCLE + prior / GREGORIAN_CYCLE + 1;
    -(DAYS_PER_COMMON_YEAR * between + leaps) - 1
}

/// 1-based ordinal of a day within its year, via a forward month walk.
pub(crate) const fn day_of_year(year: i64, month: u8, day: u8) -> i64 {
    let mut total = day as i64;
    let mut m = JANUARY;
    while m < month {
        total += days_in_month(year, m) as i64;
        m += 1;
    }
    total
}

/// Day count of a validated (year, month, day) triple.
///
/// CE dates walk forward from their 1 January anchor; BCE dates walk
/// backward from their 31 December anchor. The asymmetry mirrors the
/// anchors sitting at opposite ends of the year on the two sides of the
/// epoch.
pub(crate) const fn day_count_of(year: i64, month: u8, day: u8) -> i64 {
    let ordinal = day_of_year(year, month, day);
    if year > 0 {
        ce_anchor(year) + ordinal - 1
    } else {
        bce_anchor(year) - (days_in_year(year) as i64 - ordinal)
    }
}

impl Date {
    /// Signed count of days since the epoch 0001-01-01 CE (day 0).
    ///
    /// Inverse of [`Date::from_day_count`] for every valid date.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value.
    pub fn day_count(self) -> Result<i64, DateError> {
        self.ensure_built()?;
        Ok(day_count_of(self.year, self.month, self.day))
    }

    /// Rebuilds a date from its day count, starting at the reference
    /// date on the matching side of the epoch and letting the chunked
    /// engine walk the residual.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` when the count lies outside the
    /// supported year range.
    pub fn from_day_count(count: i64) -> Result<Self, DateError> {
        if count >= 0 {
            Self::new(1, JANUARY, 1)?.add_days(count)
        } else {
            Self::new(-1, DECEMBER, 31)?.add_days(count + 1)
        }
    }

    /// 1-based day of the year (1 January is 1, 31 December is 365 or 366).
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value.
    pub fn year_day(self) -> Result<u16, DateError> {
        self.ensure_built()?;
        Ok(day_of_year(self.year, self.month, self.day) as u16)
    }

    /// Signed number of days from `self` to `other`, positive when
    /// `other` is later.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` if either side is the zero value.
    pub fn days_to(self, other: Date) -> Result<i64, DateError> {
        Ok(other.day_count()? - self.day_count()?)
    }
}
