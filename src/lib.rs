//! Locale-aware formatting of EDTF level 0 dates and intervals.
//!
//! ```
//! use edtf_format::format_edtf;
//!
//! assert_eq!(format_edtf("1990-06", "medium", "en").unwrap(), "Jun 1990");
//! assert_eq!(format_edtf("1990/1991", "medium", "en").unwrap(), "1990 – 1991");
//! ```

mod consts;
mod datetime;
mod edtf;
mod error;
mod format;
mod grammar;
mod interval;
pub mod locale;
mod parse;
mod pattern;
mod skeleton;
mod types;

pub use consts::*;
pub use datetime::{EdtfDateTime, UtcOffset};
pub use edtf::Edtf;
pub use error::{EdtfError, ParseError};
pub use format::{
    EdtfInput, FormatOptions, edtf_to_date, format_date, format_edtf, format_edtf_with, format_interval,
    format_skeleton, match_skeleton,
};
pub use interval::{EdtfInterval, IntervalBound};
pub use locale::{IntoLocale, Locale};
pub use parse::{parse_edtf, parse_edtf_level0, validate_leap_year};
pub use skeleton::{
    DATE_SKELETON_FORMATS, Format, FormatLength, get_edtf_date_skeleton, get_interval_precision,
};
pub use types::{Bound, Day, Month, Precision, Year, days_in_month, is_leap_year};

use chrono::NaiveDate;
use derive_more::Display;
use std::cmp::Ordering;
use std::str::FromStr;

/// A single EDTF level 0 date of year, month or day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EdtfDate {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    Day {
        year:  types::Year,
        month: types::Month,
        day:   types::Day,
    },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month {
        year:  types::Year,
        month: types::Month,
    },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: types::Year },
}

impl EdtfDate {
    /// Creates a full date, checking the day against the calendar of `year`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn new_day(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year.get(), month.get())?;
        Ok(Self::Day { year, month, day })
    }

    /// Creates a month-precision date
    pub const fn new_month(year: Year, month: Month) -> Self {
        Self::Month { year, month }
    }

    /// Creates a year-precision date
    pub const fn new_year(year: Year) -> Self {
        Self::Year { year }
    }

    /// Creates a day-precision date from plain numbers.
    ///
    /// # Errors
    /// Returns the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self::Day {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Creates a month-precision date from plain numbers.
    ///
    /// # Errors
    /// Returns the first component that is out of range.
    pub fn from_ym(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self::Month {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// Creates a year-precision date from a plain number.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` above `MAX_YEAR`.
    pub fn from_y(year: u16) -> Result<Self, ParseError> {
        Ok(Self::Year {
            year: Year::new(year)?,
        })
    }

    /// Returns the day component if present
    pub const fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u8> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    /// Returns the year component (always present)
    pub const fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => year.get(),
        }
    }

    pub const fn precision(&self) -> Precision {
        match self {
            Self::Year { .. } => Precision::Year,
            Self::Month { .. } => Precision::Month,
            Self::Day { .. } => Precision::Day,
        }
    }

    /// Earliest concrete (year, month, day) represented by this value.
    pub const fn lower_bound(&self) -> (u16, u8, u8) {
        match *self {
            Self::Day { year, month, day } => (year.get(), month.get(), day.get()),
            Self::Month { year, month } => (year.get(), month.get(), MIN_DAY),
            Self::Year { year } => (year.get(), JANUARY, MIN_DAY),
        }
    }

    /// Latest concrete (year, month, day) represented by this value (inclusive).
    pub const fn upper_bound_inclusive(&self) -> (u16, u8, u8) {
        match *self {
            Self::Day { year, month, day } => (year.get(), month.get(), day.get()),
            Self::Month { year, month } => (
                year.get(),
                month.get(),
                days_in_month(year.get(), month.get()),
            ),
            Self::Year { year } => (year.get(), DECEMBER, DAYS_IN_MONTH[DECEMBER as usize]),
        }
    }

    /// The earliest calendar day consistent with the precision
    /// (`1990` resolves to 1990-01-01).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` for a day that is not on the calendar,
    /// e.g. a hand-built 29 February of a common year.
    pub fn lower_strict(&self) -> Result<NaiveDate, ParseError> {
        to_naive_date(self.lower_bound())
    }

    /// The latest calendar day consistent with the precision
    /// (`1990` resolves to 1990-12-31).
    ///
    /// # Errors
    /// Same as [`EdtfDate::lower_strict`].
    pub fn upper_strict(&self) -> Result<NaiveDate, ParseError> {
        to_naive_date(self.upper_bound_inclusive())
    }

    /// Resolves the selected bound to a calendar day.
    ///
    /// # Errors
    /// Same as [`EdtfDate::lower_strict`].
    pub fn strict(&self, bound: Bound) -> Result<NaiveDate, ParseError> {
        match bound {
            Bound::Lower => self.lower_strict(),
            Bound::Upper => self.upper_strict(),
        }
    }
}

fn to_naive_date((year, month, day): (u16, u8, u8)) -> Result<NaiveDate, ParseError> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .ok_or(ParseError::InvalidDay { year, month, day })
}

impl FromStr for EdtfDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_edtf(s)? {
            Edtf::Date(date) => Ok(date),
            other => Err(ParseError::UnexpectedKind {
                expected: "date",
                found:    other.kind(),
            }),
        }
    }
}

impl PartialOrd for EdtfDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdtfDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earliest concrete day first, then less precise first
        self.lower_bound()
            .cmp(&other.lower_bound())
            .then_with(|| self.precision().cmp(&other.precision()))
    }
}

impl serde::Serialize for EdtfDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EdtfDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
