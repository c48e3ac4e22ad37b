//! Parsing adapter: `YYYY-MM-DD` fast path in front of the general grammar.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use log::debug;
use regex::Regex;

use crate::{Edtf, EdtfDate, EdtfError, FEBRUARY, FEBRUARY_DAYS_LEAP, ISO_DATE_LEN, IntervalBound, ParseError};

#[allow(clippy::expect_used)]
fn iso_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static pattern compiles"))
}

/// Strict calendar parse of a plain `YYYY-MM-DD` string.
///
/// Returns `None` for anything else, including well-shaped strings that are
/// not real days; those are left to the general grammar.
fn parse_iso_date(input: &str) -> Option<EdtfDate> {
    if input.len() != ISO_DATE_LEN || !iso_date_pattern().is_match(input) {
        return None;
    }

    let date = match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => date,
        Err(err) => {
            debug!("fast path rejected {input:?} ({err}), using the EDTF grammar");
            return None;
        },
    };

    let year = u16::try_from(date.year()).ok()?;
    let month = u8::try_from(date.month()).ok()?;
    let day = u8::try_from(date.day()).ok()?;
    match EdtfDate::from_ymd(year, month, day) {
        Ok(date) => Some(date),
        Err(err) => {
            debug!("fast path could not build {input:?} ({err}), using the EDTF grammar");
            None
        },
    }
}

/// Parses an EDTF level 0 string.
///
/// Plain `YYYY-MM-DD` strings take a strict calendar fast path; every other
/// form (and any fast-path miss) goes through the general grammar, whose
/// result is then checked with [`validate_leap_year`].
///
/// # Errors
/// Returns the grammar's `ParseError`, or `ParseError::InvalidDay` for a
/// 29 February outside a leap year.
pub fn parse_edtf(input: &str) -> Result<Edtf, ParseError> {
    if let Some(date) = parse_iso_date(input) {
        return Ok(Edtf::Date(date));
    }

    let edtf = crate::grammar::parse(input)?;
    validate_leap_year(&edtf)?;
    Ok(edtf)
}

/// Like [`parse_edtf`], reporting failures as [`EdtfError::InvalidEdtf`].
///
/// # Errors
/// Returns `EdtfError::InvalidEdtf` wrapping the underlying `ParseError`.
pub fn parse_edtf_level0(input: &str) -> Result<Edtf, EdtfError> {
    parse_edtf(input).map_err(|source| EdtfError::invalid(input, source))
}

/// Rejects day-precision components that fall on 29 February of a common year.
///
/// # Errors
/// Returns `ParseError::InvalidDay` for the first offending component.
pub fn validate_leap_year(edtf: &Edtf) -> Result<(), ParseError> {
    match edtf {
        Edtf::Date(date) => validate_date(date),
        Edtf::DateAndTime(value) => validate_date(&value.date()),
        Edtf::Interval(interval) => {
            for bound in [interval.lower(), interval.upper()] {
                if let IntervalBound::Date(date) = bound {
                    validate_date(&date)?;
                }
            }
            Ok(())
        },
    }
}

fn validate_date(date: &EdtfDate) -> Result<(), ParseError> {
    if let EdtfDate::Day { year, month, day } = *date {
        if month.get() == FEBRUARY && day.get() == FEBRUARY_DAYS_LEAP && !year.is_leap() {
            return Err(ParseError::InvalidDay {
                year:  year.get(),
                month: month.get(),
                day:   day.get(),
            });
        }
    }
    Ok(())
}
