use crate::consts::{
    DAYS_PER_CENTURY, DAYS_PER_GREGORIAN_CYCLE, DECEMBER, GREGORIAN_CYCLE, JANUARY, MAX_MONTH,
    MAX_YEAR, MIN_YEAR,
};
use crate::daycount::day_count_of;
use crate::types::{astronomical_year, days_in_month, gregorian_year};
use crate::{Date, DateError};

/// Moves a Gregorian year by a signed number of calendar years, skipping
/// the nonexistent year 0.
pub(crate) fn shifted_year(year: i64, delta: i64) -> Result<i64, DateError> {
    let astronomical = astronomical_year(year)
        .checked_add(delta)
        .ok_or(DateError::Overflow)?;
    // supported Gregorian years map to astronomical MIN_YEAR+1..=MAX_YEAR
    if !((MIN_YEAR + 1)..=MAX_YEAR).contains(&astronomical) {
        return Err(DateError::Overflow);
    }
    Ok(gregorian_year(astronomical))
}

/// Year after `year` on the Gregorian number line (-1 rolls to 1).
const fn next_year(year: i64) -> i64 {
    if year == -1 { 1 } else { year + 1 }
}

/// Year before `year` on the Gregorian number line (1 rolls to -1).
const fn prev_year(year: i64) -> i64 {
    if year == 1 { -1 } else { year - 1 }
}

impl Date {
    /// Returns the date `n` days later (earlier for negative `n`).
    ///
    /// The delta is consumed in chunks so the work stays bounded no
    /// matter how large `n` is: whole 400-year cycles first, then
    /// 100-year blocks, then a per-month walk over what remains.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value and
    /// `DateError::Overflow` when the result leaves the supported range.
    pub fn add_days(self, n: i64) -> Result<Self, DateError> {
        self.ensure_built()?;
        if n == 0 {
            return Ok(self);
        }

        let mut year = self.year;
        let mut month = self.month;
        let mut day = i64::from(self.day);
        let mut rem = n;

        // Whole 400-year cycles jump the year directly: the leap pattern
        // repeats with that period, so the same month/day stays valid and
        // every cycle is exactly DAYS_PER_GREGORIAN_CYCLE days.
        let cycles = rem / DAYS_PER_GREGORIAN_CYCLE;
        if cycles != 0 {
            let years = cycles
                .checked_mul(GREGORIAN_CYCLE)
                .ok_or(DateError::Overflow)?;
            year = shifted_year(year, years)?;
            rem -= cycles * DAYS_PER_GREGORIAN_CYCLE;
        }

        // 100-year blocks, one at a time. A block spans 36 524 or 36 525
        // days depending on whether it crosses a 400-year leap day, so
        // each step is charged with its true span via the day-count
        // converter; 29 February is pulled back to the 28th when the
        // landing year drops it.
        while rem.abs() > DAYS_PER_CENTURY {
            let step = if rem > 0 { 100 } else { -100 };
            let target = shifted_year(year, step)?;
            let landing = day.min(i64::from(days_in_month(target, month)));
            rem -= day_count_of(target, month, landing as u8)
                - day_count_of(year, month, day as u8);
            year = target;
            day = landing;
        }

        // Per-month walk for the residual, forward or backward by the
        // sign of what is left. Year rolls skip the nonexistent year 0.
        while rem != 0 {
            if rem > 0 {
                let room = i64::from(days_in_month(year, month)) - day;
                if rem <= room {
                    day += rem;
                    rem = 0;
                } else {
                    rem -= room + 1;
                    if month == MAX_MONTH {
                        month = JANUARY;
                        year = next_year(year);
                    } else {
                        month += 1;
                    }
                    day = 1;
                }
            } else if -rem < day {
                day += rem;
                rem = 0;
            } else {
                rem += day;
                if month == JANUARY {
                    month = DECEMBER;
                    year = prev_year(year);
                } else {
                    month -= 1;
                }
                day = i64::from(days_in_month(year, month));
            }
        }

        // trailing validation gate
        Self::new(year, month, day as u8)
    }

    /// Returns the date `n` calendar months later (earlier for negative
    /// `n`), clamping the day to the landing month's length: one month
    /// after 31 January 2021 is 28 February 2021.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value and
    /// `DateError::Overflow` when the result leaves the supported range.
    pub fn add_months(self, n: i32) -> Result<Self, DateError> {
        self.shift_months(i64::from(n))
    }

    /// Returns the date `n` calendar years later (earlier for negative
    /// `n`). The shift runs through astronomical numbering, so crossing
    /// the epoch never produces a year 0; 29 February clamps to the 28th
    /// when the landing year is not leap.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value and
    /// `DateError::Overflow` when the result leaves the supported range.
    pub fn add_years(self, n: i64) -> Result<Self, DateError> {
        self.ensure_built()?;
        let year = shifted_year(self.year, n)?;
        let day = self.day.min(days_in_month(year, self.month));
        Self::new(year, self.month, day)
    }

    /// Applies years, then months, then days, in that order.
    ///
    /// Years and months fold into a single month-field shift with no
    /// normalization between them; the day delta is applied to the
    /// normalized landing date. The ordering is part of the contract:
    /// applying days first would give different (also valid) results.
    ///
    /// # Errors
    /// Returns `DateError::Uninitialized` for the zero value and
    /// `DateError::Overflow` when any step leaves the supported range.
    pub fn add_parts(self, years: i64, months: i32, days: i64) -> Result<Self, DateError> {
        let months = years
            .checked_mul(i64::from(MAX_MONTH))
            .and_then(|m| m.checked_add(i64::from(months)))
            .ok_or(DateError::Overflow)?;
        self.shift_months(months)?.add_days(days)
    }

    /// Month-field arithmetic shared by `add_months` and `add_parts`.
    fn shift_months(self, n: i64) -> Result<Self, DateError> {
        self.ensure_built()?;
        let months = (i64::from(self.month) - 1)
            .checked_add(n)
            .ok_or(DateError::Overflow)?;
        let year_delta = months.div_euclid(i64::from(MAX_MONTH));
        let month = (months.rem_euclid(i64::from(MAX_MONTH)) + 1) as u8;
        let year = shifted_year(self.year, year_delta)?;
        let day = self.day.min(days_in_month(year, month));
        Self::new(year, month, day)
    }
}
