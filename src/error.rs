//! Error types for parsing and formatting EDTF values.

use derive_more::Display;

use crate::consts::{MAX_MONTH, MAX_YEAR};

/// Grammar-level failures raised while reading an EDTF string.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty EDTF string")]
    EmptyInput,
    #[display(fmt = "Invalid EDTF syntax: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 0-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid time: {_0}")]
    InvalidTime(String),
    #[display(fmt = "Invalid interval: lower bound ({lower}) is after upper bound ({upper})")]
    InvalidRange { lower: String, upper: String },
    #[display(fmt = "Expected an EDTF {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}

impl std::error::Error for ParseError {}

/// Errors surfaced by the public parsing and formatting API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdtfError {
    /// The input is not valid EDTF level 0, or names an impossible day.
    #[error("The string is not a valid EDTF-formatted string: {input:?}")]
    InvalidEdtf {
        input: String,
        #[source]
        source: ParseError,
    },

    /// The value is not an EDTF date or interval.
    #[error("Only an EDTF level 0 date or interval is supported, got {found}")]
    TypeMismatch { found: &'static str },

    /// Bound selector other than `lower` or `upper`.
    #[error("Invalid value for 'strict' parameter: {0:?} (expected 'lower' or 'upper')")]
    InvalidBound(String),

    /// No catalog entry serves the requested locale.
    #[error("Unknown locale: {0:?}")]
    UnknownLocale(String),

    /// A string key is not one of the skeleton table's rows or columns.
    #[error("Unknown {kind}: {value:?}")]
    UnknownKey { kind: &'static str, value: String },

    /// Fuzzy matching found no locale skeleton with the same fields.
    #[error("No skeleton in locale {locale} matches {skeleton:?}")]
    UnmatchedSkeleton { skeleton: String, locale: String },

    /// Pattern letter the date renderer cannot fill.
    #[error("Unsupported pattern field '{0}'")]
    UnsupportedField(char),

    /// Interval with an open or unknown bound has no concrete date to render.
    #[error("Interval {0} has an open or unknown bound and cannot be formatted")]
    UnboundedInterval(String),
}

impl EdtfError {
    pub(crate) fn invalid(input: impl Into<String>, source: ParseError) -> Self {
        Self::InvalidEdtf {
            input: input.into(),
            source,
        }
    }

    /// True for failures caused by the value itself: bad syntax or an
    /// impossible calendar day.
    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::InvalidEdtf { .. })
    }

    /// True when the input was not a date or interval.
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty EDTF string");
        assert_eq!(ParseError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
    }

    #[test]
    fn test_invalid_edtf_keeps_source() {
        use std::error::Error;

        let err = EdtfError::invalid("not-a-date", ParseError::InvalidFormat("not-a-date".to_owned()));
        assert!(err.is_value_error());
        assert!(!err.is_type_error());
        assert!(err.to_string().contains("not a valid EDTF-formatted string"));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Invalid EDTF syntax: not-a-date"));
    }

    #[test]
    fn test_classification() {
        let err = EdtfError::TypeMismatch { found: "date and time" };
        assert!(err.is_type_error());
        assert!(!err.is_value_error());

        let err = EdtfError::InvalidBound("middle".to_owned());
        assert!(!err.is_type_error());
        assert!(!err.is_value_error());
        assert!(err.to_string().contains("'strict'"));
    }
}
