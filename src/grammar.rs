//! The general EDTF level 0 grammar.
//!
//! ```text
//! date         = year [ "-" month [ "-" day ] ]
//! year         = 4DIGIT
//! month        = "01" .. "12"
//! day          = "01" .. last day the month can ever have
//! dateAndTime  = date-with-day "T" hh ":" mm ":" ss [ "Z" / ("+" / "-") hh [ ":" mm ] ]
//! interval     = bound "/" bound
//! bound        = date / ".." / ""
//! ```
//!
//! Like the upstream EDTF grammar, February always admits day 29. Callers
//! reject impossible leap days with [`crate::validate_leap_year`].

use crate::types::{Day, Month, Year};
use crate::{
    DATE_SEPARATOR, Edtf, EdtfDate, EdtfDateTime, EdtfInterval, INTERVAL_SEPARATOR, IntervalBound,
    OPEN_BOUND, ParseError, TIME_DESIGNATOR, TIME_SEPARATOR, UTC_DESIGNATOR, UtcOffset,
};

const YEAR_DIGITS: usize = 4;
const FIELD_DIGITS: usize = 2;

pub(crate) fn parse(input: &str) -> Result<Edtf, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if input.contains(INTERVAL_SEPARATOR) {
        parse_interval(input).map(Edtf::Interval)
    } else if input.contains(TIME_DESIGNATOR) {
        parse_date_and_time(input).map(Edtf::DateAndTime)
    } else {
        parse_date(input).map(Edtf::Date)
    }
}

/// Reads exactly `width` ASCII digits.
fn digits<T: std::str::FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() == width && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn invalid(s: &str) -> ParseError {
    ParseError::InvalidFormat(s.to_owned())
}

fn parse_date(s: &str) -> Result<EdtfDate, ParseError> {
    let mut parts = s.split(DATE_SEPARATOR);
    let year_part = parts.next().ok_or_else(|| invalid(s))?;
    let month_part = parts.next();
    let day_part = parts.next();
    if parts.next().is_some() {
        return Err(ParseError::InvalidFormat(format!(
            "Too many {DATE_SEPARATOR} separators: {s}"
        )));
    }

    let year_num: u16 = digits(year_part, YEAR_DIGITS).ok_or_else(|| invalid(s))?;
    let year = Year::new(year_num)?;

    let Some(month_part) = month_part else {
        return Ok(EdtfDate::Year { year });
    };
    let month_num: u8 = digits(month_part, FIELD_DIGITS).ok_or_else(|| invalid(s))?;
    let month = Month::new(month_num)?;

    let Some(day_part) = day_part else {
        return Ok(EdtfDate::Month { year, month });
    };
    let day_num: u8 = digits(day_part, FIELD_DIGITS).ok_or_else(|| invalid(s))?;
    let day = Day::for_month(day_num, year_num, month_num)?;

    Ok(EdtfDate::Day { year, month, day })
}

fn parse_interval(s: &str) -> Result<EdtfInterval, ParseError> {
    let (lower, upper) = s.split_once(INTERVAL_SEPARATOR).ok_or_else(|| invalid(s))?;
    if upper.contains(INTERVAL_SEPARATOR) {
        return Err(ParseError::InvalidFormat(format!(
            "Too many {INTERVAL_SEPARATOR} separators: {s}"
        )));
    }

    EdtfInterval::new(parse_bound(lower)?, parse_bound(upper)?)
}

fn parse_bound(s: &str) -> Result<IntervalBound, ParseError> {
    match s {
        "" => Ok(IntervalBound::Unknown),
        OPEN_BOUND => Ok(IntervalBound::Open),
        _ => parse_date(s).map(IntervalBound::Date),
    }
}

fn parse_date_and_time(s: &str) -> Result<EdtfDateTime, ParseError> {
    let (date_part, time_part) = s.split_once(TIME_DESIGNATOR).ok_or_else(|| invalid(s))?;
    let date = parse_date(date_part)?;
    if !matches!(date, EdtfDate::Day { .. }) {
        return Err(invalid(s));
    }

    let (clock, offset) = split_offset(time_part)?;
    let bad_time = || ParseError::InvalidTime(time_part.to_owned());

    let mut fields = clock.split(TIME_SEPARATOR);
    let hour: u8 = fields.next().and_then(|f| digits(f, FIELD_DIGITS)).ok_or_else(bad_time)?;
    let minute: u8 = fields.next().and_then(|f| digits(f, FIELD_DIGITS)).ok_or_else(bad_time)?;
    let second: u8 = fields.next().and_then(|f| digits(f, FIELD_DIGITS)).ok_or_else(bad_time)?;
    if fields.next().is_some() {
        return Err(bad_time());
    }

    EdtfDateTime::new(date, hour, minute, second, offset)
}

/// Splits `hh:mm:ss[Z|±hh[:mm]]` into the clock and the parsed offset.
fn split_offset(time: &str) -> Result<(&str, Option<UtcOffset>), ParseError> {
    if let Some(clock) = time.strip_suffix(UTC_DESIGNATOR) {
        return Ok((clock, Some(UtcOffset::Utc)));
    }

    let Some(pos) = time.find(['+', '-']) else {
        return Ok((time, None));
    };
    let (clock, signed) = time.split_at(pos);
    let negative = signed.starts_with('-');
    let bad_offset = || ParseError::InvalidTime(time.to_owned());

    let mut fields = signed[1..].split(TIME_SEPARATOR);
    let hours: u8 = fields.next().and_then(|f| digits(f, FIELD_DIGITS)).ok_or_else(bad_offset)?;
    let minutes: u8 = match fields.next() {
        Some(f) => digits(f, FIELD_DIGITS).ok_or_else(bad_offset)?,
        None => 0,
    };
    if fields.next().is_some() {
        return Err(bad_offset());
    }

    Ok((clock, Some(UtcOffset::fixed(negative, hours, minutes)?)))
}
