use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::{EdtfDate, EdtfDateTime, EdtfInterval, ParseError};

/// Any EDTF level 0 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub enum Edtf {
    Date(EdtfDate),
    DateAndTime(EdtfDateTime),
    Interval(EdtfInterval),
}

impl Edtf {
    /// Human-readable name of the variant, used in error messages
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::DateAndTime(_) => "date and time",
            Self::Interval(_) => "interval",
        }
    }

    pub const fn as_date(&self) -> Option<&EdtfDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::DateAndTime(_) | Self::Interval(_) => None,
        }
    }

    pub const fn as_interval(&self) -> Option<&EdtfInterval> {
        match self {
            Self::Interval(interval) => Some(interval),
            Self::Date(_) | Self::DateAndTime(_) => None,
        }
    }
}

impl FromStr for Edtf {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_edtf(s)
    }
}

impl Serialize for Edtf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Edtf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{edtf_day, edtf_year, interval};

    #[test]
    fn test_kind() {
        let cases: [(&str, &str); 4] = [
            ("1990", "date"),
            ("1990-06-15", "date"),
            ("1990-06-15T10:00:00", "date and time"),
            ("1990/1991", "interval"),
        ];
        for (input, kind) in cases {
            assert_eq!(input.parse::<Edtf>().unwrap().kind(), kind, "{input}");
        }
    }

    #[test]
    fn test_from_variants() {
        let date = edtf_day(1990, 6, 15);
        assert_eq!(Edtf::from(date).as_date(), Some(&date));

        let span = interval(edtf_year(1990), edtf_year(1991));
        assert_eq!(Edtf::from(span).as_interval(), Some(&span));
        assert_eq!(Edtf::from(span).as_date(), None);
    }

    #[test]
    fn test_display_round_trips() {
        for input in ["1990", "1990-06", "1990-06-15", "1990-06-15T10:00:00Z", "1990/1991-06", "../1990"] {
            assert_eq!(input.parse::<Edtf>().unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_serde_rejects_non_strings() {
        let result: Result<Edtf, _> = serde_json::from_str("1990");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid type"), "{err}");

        let parsed: Edtf = serde_json::from_str(r#""1990/1991""#).unwrap();
        assert_eq!(parsed, Edtf::Interval(interval(edtf_year(1990), edtf_year(1991))));
    }
}
