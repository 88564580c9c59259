/// Largest supported year (inclusive, CE)
pub const MAX_YEAR: i64 = 100_000_000;

/// Smallest supported year (inclusive, BCE)
pub const MIN_YEAR: i64 = -100_000_000;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in one full 400-year Gregorian cycle: 97 leap years and 303
/// common years. The leap pattern repeats exactly with this period.
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Days in a 100-year block that does not contain a 400-year leap day.
pub(crate) const DAYS_PER_CENTURY: i64 = 36_524;

/// Days in a common (non-leap) year.
pub(crate) const DAYS_PER_COMMON_YEAR: i64 = 365;
