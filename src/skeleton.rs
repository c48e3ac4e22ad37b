//! Precision to date-skeleton mapping.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;

use crate::{EdtfError, EdtfInterval, Precision};

/// One of the four standard format lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum FormatLength {
    #[display(fmt = "full")]
    Full,
    #[display(fmt = "long")]
    Long,
    #[default]
    #[display(fmt = "medium")]
    Medium,
    #[display(fmt = "short")]
    Short,
}

impl FormatLength {
    pub const ALL: [Self; 4] = [Self::Full, Self::Long, Self::Medium, Self::Short];

    /// Column of this length in [`DATE_SKELETON_FORMATS`] and in the locale
    /// date-format tables.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Full => 0,
            Self::Long => 1,
            Self::Medium => 2,
            Self::Short => 3,
        }
    }
}

impl FromStr for FormatLength {
    type Err = EdtfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|length| length.to_string() == s)
            .ok_or_else(|| EdtfError::UnknownKey {
                kind:  "format length",
                value: s.to_owned(),
            })
    }
}

/// A standard format length or a custom pattern.
///
/// For day-precision dates a custom string is a literal date pattern
/// (`"dd/MM/y"`); everywhere else it is a skeleton (`"yMMMM"`) that is
/// matched against the locale's available formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    Length(FormatLength),
    Custom(String),
}

impl Format {
    /// The skeleton to render `precision` with.
    pub fn skeleton(&self, precision: Precision) -> &str {
        match self {
            Self::Length(length) => get_edtf_date_skeleton(precision, *length),
            Self::Custom(skeleton) => skeleton,
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::Length(FormatLength::default())
    }
}

impl From<FormatLength> for Format {
    fn from(length: FormatLength) -> Self {
        Self::Length(length)
    }
}

impl From<&str> for Format {
    fn from(s: &str) -> Self {
        s.parse::<FormatLength>()
            .map_or_else(|_| Self::Custom(s.to_owned()), Self::Length)
    }
}

impl From<String> for Format {
    fn from(s: String) -> Self {
        match s.parse::<FormatLength>() {
            Ok(length) => Self::Length(length),
            Err(_) => Self::Custom(s),
        }
    }
}

impl From<&Self> for Format {
    fn from(format: &Self) -> Self {
        format.clone()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(f, "{length}"),
            Self::Custom(pattern) => f.write_str(pattern),
        }
    }
}

/// Skeletons by precision (rows: year, month, day) and format length
/// (columns: full, long, medium, short).
///
/// The day row is only used for intervals; single day-precision dates go
/// through the locale's standard date formats so they look the same as any
/// other formatted date.
pub const DATE_SKELETON_FORMATS: [[&str; 4]; 3] = [
    ["y", "y", "y", "y"],
    ["yMMMM", "yMMMM", "yMMM", "yM"],
    ["EEEEyMMMMd", "yMMMMd", "yMMMd", "yMd"],
];

/// Returns the date skeleton for a precision and format length.
pub const fn get_edtf_date_skeleton(precision: Precision, length: FormatLength) -> &'static str {
    let row = match precision {
        Precision::Year => 0,
        Precision::Month => 1,
        Precision::Day => 2,
    };
    DATE_SKELETON_FORMATS[row][length.index()]
}

/// The finer of the interval's two bound precisions, `None` when neither
/// bound is a date.
pub fn get_interval_precision(interval: &EdtfInterval) -> Option<Precision> {
    interval.precision()
}
