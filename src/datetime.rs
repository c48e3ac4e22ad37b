use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Edtf, EdtfDate, MAX_HOUR, MAX_MINUTE, MAX_OFFSET_HOURS, ParseError};

/// Offset designator of a date-and-time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtcOffset {
    /// `Z`
    Utc,
    /// `±hh` or `±hh:mm`, stored in minutes east of UTC
    Fixed { minutes: i16 },
}

impl UtcOffset {
    /// # Errors
    /// Returns `ParseError::InvalidTime` when the offset is beyond ±14:59.
    pub fn fixed(negative: bool, hours: u8, minutes: u8) -> Result<Self, ParseError> {
        if hours > MAX_OFFSET_HOURS || minutes > MAX_MINUTE {
            return Err(ParseError::InvalidTime(format!("offset {hours:02}:{minutes:02}")));
        }
        let magnitude = i16::from(hours) * 60 + i16::from(minutes);
        let minutes = if negative { -magnitude } else { magnitude };
        Ok(Self::Fixed { minutes })
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Utc => f.write_str("Z"),
            Self::Fixed { minutes } => {
                let sign = if minutes < 0 { '-' } else { '+' };
                let magnitude = minutes.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
            },
        }
    }
}

/// An EDTF level 0 date and time, e.g. `2004-01-01T10:10:10Z`.
///
/// Only the date part is a calendar concept here; the value is parsed and
/// round-tripped but the formatter does not render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdtfDateTime {
    date:   EdtfDate,
    hour:   u8,
    minute: u8,
    second: u8,
    offset: Option<UtcOffset>,
}

impl EdtfDateTime {
    /// # Errors
    /// Returns `ParseError::UnexpectedKind` if `date` is not of day precision
    /// and `ParseError::InvalidTime` for an out-of-range clock reading.
    pub fn new(
        date: EdtfDate,
        hour: u8,
        minute: u8,
        second: u8,
        offset: Option<UtcOffset>,
    ) -> Result<Self, ParseError> {
        if !matches!(date, EdtfDate::Day { .. }) {
            return Err(ParseError::UnexpectedKind {
                expected: "day-precision date",
                found:    "reduced-precision date",
            });
        }
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_MINUTE {
            return Err(ParseError::InvalidTime(format!("{hour:02}:{minute:02}:{second:02}")));
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
            offset,
        })
    }

    pub const fn date(&self) -> EdtfDate {
        self.date
    }

    /// (hour, minute, second)
    pub const fn time(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    pub const fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }
}

impl fmt::Display for EdtfDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )?;
        match self.offset {
            Some(offset) => write!(f, "{offset}"),
            None => Ok(()),
        }
    }
}

impl FromStr for EdtfDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match crate::parse_edtf(s)? {
            Edtf::DateAndTime(value) => Ok(value),
            other => Err(ParseError::UnexpectedKind {
                expected: "date and time",
                found:    other.kind(),
            }),
        }
    }
}

impl Serialize for EdtfDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EdtfDateTime {
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
    use crate::test_utils::{edtf_day, edtf_month};

    #[test]
    fn test_parse_and_display() {
        for input in [
            "2004-01-01T10:10:10",
            "2004-01-01T10:10:10Z",
            "2004-01-01T10:10:10+05:30",
            "2004-01-01T23:59:59-08:00",
        ] {
            let value = input.parse::<EdtfDateTime>().unwrap();
            assert_eq!(value.to_string(), input);
        }
    }

    #[test]
    fn test_hour_only_offset_is_normalized() {
        let value = "2004-01-01T10:10:10+05".parse::<EdtfDateTime>().unwrap();
        assert_eq!(value.offset(), Some(UtcOffset::Fixed { minutes: 300 }));
        assert_eq!(value.to_string(), "2004-01-01T10:10:10+05:00");
    }

    #[test]
    fn test_accessors() {
        let value = "1985-04-12T23:20:30Z".parse::<EdtfDateTime>().unwrap();
        assert_eq!(value.date(), edtf_day(1985, 4, 12));
        assert_eq!(value.time(), (23, 20, 30));
        assert_eq!(value.offset(), Some(UtcOffset::Utc));
    }

    #[test]
    fn test_new_rejects_reduced_precision() {
        let result = EdtfDateTime::new(edtf_month(2004, 1), 10, 0, 0, None);
        assert!(matches!(result, Err(ParseError::UnexpectedKind { .. })));
    }

    #[test]
    fn test_invalid_clock() {
        for input in [
            "2004-01-01T24:00:00",
            "2004-01-01T10:60:00",
            "2004-01-01T10:10:61",
            "2004-01-01T10:10",
            "2004-01-01T10:10:10+15:00",
        ] {
            assert!(input.parse::<EdtfDateTime>().is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn test_negative_offset() {
        assert_eq!(UtcOffset::fixed(true, 3, 30).unwrap(), UtcOffset::Fixed { minutes: -210 });
        assert_eq!(UtcOffset::fixed(true, 0, 30).unwrap().to_string(), "-00:30");
    }

    #[test]
    fn test_serde() {
        let value = "2004-01-01T10:10:10Z".parse::<EdtfDateTime>().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""2004-01-01T10:10:10Z""#);
        let parsed: EdtfDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }
}
