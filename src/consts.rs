/// Maximum valid year (inclusive); EDTF level 0 years are four digits
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Longest month length, the day limit when the month is not known
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
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
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Interval separator between the lower and upper bound
pub const INTERVAL_SEPARATOR: char = '/';
/// Separator between the date and the time of a date-and-time value
pub const TIME_DESIGNATOR: char = 'T';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// UTC designator of a date-and-time value
pub const UTC_DESIGNATOR: char = 'Z';
/// Marker for an open interval bound
pub const OPEN_BOUND: &str = "..";

/// Number of characters in a `YYYY-MM-DD` string
pub const ISO_DATE_LEN: usize = 10;

/// Maximum hour accepted in a date-and-time value (`24:00:00` is excluded)
pub const MAX_HOUR: u8 = 23;
/// Maximum minute or second
pub const MAX_MINUTE: u8 = 59;
/// Maximum absolute offset hours
pub const MAX_OFFSET_HOURS: u8 = 14;
