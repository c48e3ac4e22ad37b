use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Edtf, EdtfDate, OPEN_BOUND, ParseError, Precision};

/// One end of an EDTF interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalBound {
    /// A concrete date of any precision
    Date(EdtfDate),
    /// `..`, the interval runs without limit on this side
    Open,
    /// Empty string, the bound exists but is not known
    Unknown,
}

impl IntervalBound {
    /// Returns the date if this bound has one
    pub const fn date(&self) -> Option<&EdtfDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::Open | Self::Unknown => None,
        }
    }
}

impl From<EdtfDate> for IntervalBound {
    fn from(date: EdtfDate) -> Self {
        Self::Date(date)
    }
}

impl fmt::Display for IntervalBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::Open => f.write_str(OPEN_BOUND),
            Self::Unknown => Ok(()),
        }
    }
}

/// An EDTF interval (`1964/2008`, `2004-06/2006-08`, `1985-04-12/..`).
/// When both ends are dates the lower one must not start after the upper one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{lower}/{upper}")]
pub struct EdtfInterval {
    lower: IntervalBound,
    upper: IntervalBound,
}

impl EdtfInterval {
    /// Creates a new interval with validation.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidRange` if the lower date starts after the
    /// upper date ends, and `ParseError::InvalidFormat` if neither end is a date.
    pub fn new(lower: IntervalBound, upper: IntervalBound) -> Result<Self, ParseError> {
        match (lower.date(), upper.date()) {
            (None, None) => {
                return Err(ParseError::InvalidFormat(format!(
                    "interval needs at least one date: {lower}/{upper}"
                )));
            },
            (Some(l), Some(u)) if l.lower_bound() > u.upper_bound_inclusive() => {
                return Err(ParseError::InvalidRange {
                    lower: l.to_string(),
                    upper: u.to_string(),
                });
            },
            _ => {},
        }
        Ok(Self { lower, upper })
    }

    /// Shorthand for an interval between two dates.
    ///
    /// # Errors
    /// Same as [`EdtfInterval::new`].
    pub fn between(lower: EdtfDate, upper: EdtfDate) -> Result<Self, ParseError> {
        Self::new(lower.into(), upper.into())
    }

    pub const fn lower(&self) -> IntervalBound {
        self.lower
    }

    pub const fn upper(&self) -> IntervalBound {
        self.upper
    }

    /// Both dates, when neither end is open or unknown
    pub fn dates(&self) -> Option<(EdtfDate, EdtfDate)> {
        Some((*self.lower.date()?, *self.upper.date()?))
    }

    /// The finer of the two ends' precisions; open and unknown ends do not count.
    pub fn precision(&self) -> Option<Precision> {
        let lower = self.lower.date().map(EdtfDate::precision);
        let upper = self.upper.date().map(EdtfDate::precision);
        lower.max(upper)
    }
}

impl FromStr for EdtfInterval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match crate::parse_edtf(s)? {
            Edtf::Interval(interval) => Ok(interval),
            other => Err(ParseError::UnexpectedKind {
                expected: "interval",
                found:    other.kind(),
            }),
        }
    }
}

impl Serialize for EdtfInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EdtfInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
