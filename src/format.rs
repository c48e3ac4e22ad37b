//! Locale-aware rendering of EDTF dates and intervals.
//!
//! The date, skeleton and interval operations follow CLDR semantics: a
//! skeleton names the fields to show, the locale picks the pattern that
//! orders and decorates them, and an interval pattern shows the shared
//! fields once.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};
use log::{debug, trace};

use crate::pattern::{self, field_widths, split_interval};
use crate::{
    Bound, Edtf, EdtfDate, EdtfDateTime, EdtfError, EdtfInterval, Format, IntoLocale, Locale,
    Precision, parse_edtf_level0, validate_leap_year,
};

/// Added when a month field crosses between numeric and text widths.
const MONTH_TEXT_DISTANCE: usize = 0x100;

/// Fields that can select an interval pattern, greatest first.
const GREATEST_DIFFERENCE_FIELDS: [char; 4] = ['G', 'y', 'M', 'd'];

/// What to format: today, an EDTF string, or an already parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdtfInput<'a> {
    /// Today's local date
    Today,
    Text(&'a str),
    Value(Edtf),
}

impl<'a> From<&'a str> for EdtfInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for EdtfInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for EdtfInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Self::Today, Self::Text)
    }
}

impl From<Edtf> for EdtfInput<'_> {
    fn from(value: Edtf) -> Self {
        Self::Value(value)
    }
}

impl From<EdtfDate> for EdtfInput<'_> {
    fn from(date: EdtfDate) -> Self {
        Self::Value(Edtf::Date(date))
    }
}

impl From<EdtfInterval> for EdtfInput<'_> {
    fn from(interval: EdtfInterval) -> Self {
        Self::Value(Edtf::Interval(interval))
    }
}

impl From<EdtfDateTime> for EdtfInput<'_> {
    fn from(value: EdtfDateTime) -> Self {
        Self::Value(Edtf::DateAndTime(value))
    }
}

/// Options for [`format_edtf_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// A standard length or a custom pattern/skeleton. Defaults to medium.
    pub format: Format,
    /// Defaults to `en`.
    pub locale: Locale,
}

impl FormatOptions {
    /// # Errors
    /// Returns `EdtfError::UnknownLocale` if `locale` does not resolve.
    pub fn new(format: impl Into<Format>, locale: impl IntoLocale) -> Result<Self, EdtfError> {
        Ok(Self {
            format: format.into(),
            locale: locale.into_locale()?,
        })
    }
}

/// The two kinds of value that can be rendered.
enum Formattable {
    Date(EdtfDate),
    Interval(EdtfInterval),
}

/// Formats an EDTF level 0 date or interval.
///
/// `format` is `"full"`, `"long"`, `"medium"`, `"short"` or a custom
/// pattern. Day-precision dates use the locale's standard date formats
/// (a custom string is a literal pattern there); year and month precision
/// and intervals go through skeleton matching.
///
/// ```
/// use edtf_format::format_edtf;
///
/// assert_eq!(format_edtf("2004-02-01/2004-02-08", "medium", "en").unwrap(), "Feb 1 – 8, 2004");
/// assert_eq!(format_edtf("1990-06-15", "long", "de").unwrap(), "15. Juni 1990");
/// ```
///
/// # Errors
/// * `EdtfError::InvalidEdtf` for unparseable input or an impossible day.
/// * `EdtfError::TypeMismatch` for a date and time.
/// * `EdtfError::UnknownLocale` if `locale` does not resolve.
/// * `EdtfError::UnboundedInterval` for an interval with an open or unknown bound.
/// * `EdtfError::UnmatchedSkeleton` / `EdtfError::UnsupportedField` for custom
///   formats the locale cannot render.
pub fn format_edtf<'a>(
    input: impl Into<EdtfInput<'a>>,
    format: impl Into<Format>,
    locale: impl IntoLocale,
) -> Result<String, EdtfError> {
    let value = resolve(input.into())?;
    let locale = locale.into_locale()?;
    render(&value, &format.into(), &locale)
}

/// [`format_edtf`] with prepared options.
///
/// # Errors
/// Same as [`format_edtf`], minus locale resolution.
pub fn format_edtf_with<'a>(input: impl Into<EdtfInput<'a>>, options: &FormatOptions) -> Result<String, EdtfError> {
    let value = resolve(input.into())?;
    render(&value, &options.format, &options.locale)
}

/// Resolves a date to the first or last calendar day it covers.
///
/// # Errors
/// Returns `EdtfError::InvalidEdtf` if the bound is not a calendar day.
pub fn edtf_to_date(date: &EdtfDate, bound: Bound) -> Result<NaiveDate, EdtfError> {
    date.strict(bound).map_err(|source| EdtfError::invalid(date.to_string(), source))
}

fn resolve(input: EdtfInput<'_>) -> Result<Formattable, EdtfError> {
    let edtf = match input {
        EdtfInput::Today => {
            let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
            parse_edtf_level0(&today)?
        },
        EdtfInput::Text(text) => parse_edtf_level0(text)?,
        EdtfInput::Value(value) => {
            validate_leap_year(&value).map_err(|source| EdtfError::invalid(value.to_string(), source))?;
            value
        },
    };

    match edtf {
        Edtf::Date(date) => Ok(Formattable::Date(date)),
        Edtf::Interval(interval) => Ok(Formattable::Interval(interval)),
        Edtf::DateAndTime(_) => Err(EdtfError::TypeMismatch { found: edtf.kind() }),
    }
}

fn render(value: &Formattable, format: &Format, locale: &Locale) -> Result<String, EdtfError> {
    match value {
        Formattable::Date(date) => render_date(date, format, locale),
        Formattable::Interval(interval) => render_interval(interval, format, locale),
    }
}

fn render_date(date: &EdtfDate, format: &Format, locale: &Locale) -> Result<String, EdtfError> {
    let day = edtf_to_date(date, Bound::Lower)?;
    match date.precision() {
        Precision::Day => format_date(day, format, locale),
        precision => format_skeleton(format.skeleton(precision), day, true, locale),
    }
}

fn render_interval(interval: &EdtfInterval, format: &Format, locale: &Locale) -> Result<String, EdtfError> {
    let (lower, upper) = interval
        .dates()
        .ok_or_else(|| EdtfError::UnboundedInterval(interval.to_string()))?;

    let start = edtf_to_date(&lower, Bound::Lower)?;
    let end = edtf_to_date(&upper, Bound::Upper)?;
    let precision = lower.precision().max(upper.precision());
    format_interval(start, end, format.skeleton(precision), true, locale)
}

/// Renders a day with one of the locale's standard date formats, or with a
/// custom pattern.
///
/// # Errors
/// Returns `EdtfError::UnsupportedField` for pattern letters other than
/// `G y Y u M L d E c`.
pub fn format_date(date: NaiveDate, format: &Format, locale: &Locale) -> Result<String, EdtfError> {
    let data = locale.data();
    let pattern = match format {
        Format::Length(length) => data.date_format(*length),
        Format::Custom(pattern) => pattern,
    };
    pattern::render_pattern(pattern, date, data)
}

/// Renders a day with the locale pattern for `skeleton`.
///
/// With `fuzzy`, a skeleton the locale does not list is replaced by the
/// closest one that has the same fields (see [`match_skeleton`]).
///
/// # Errors
/// Returns `EdtfError::UnmatchedSkeleton` when no pattern is found.
pub fn format_skeleton(skeleton: &str, date: NaiveDate, fuzzy: bool, locale: &Locale) -> Result<String, EdtfError> {
    let data = locale.data();
    let pattern = match data.skeleton(skeleton) {
        Some(pattern) => Some(pattern),
        None if fuzzy => match_skeleton(skeleton, data.skeleton_keys()).and_then(|key| data.skeleton(key)),
        None => None,
    };

    let pattern = pattern.ok_or_else(|| EdtfError::UnmatchedSkeleton {
        skeleton: skeleton.to_owned(),
        locale:   locale.to_string(),
    })?;
    pattern::render_pattern(pattern, date, data)
}

/// Renders the range `start..=end` for `skeleton`.
///
/// Equal days render as a single date. Otherwise the greatest field that
/// differs (era, year, month, day) picks the locale's interval pattern; its
/// first half shows `start` and its second half `end`. When the skeleton has
/// no interval formats, or none covers the differing field, both days are
/// rendered on their own and joined with the locale's fallback pattern.
///
/// # Errors
/// Returns the rendering errors of [`format_skeleton`] and [`format_date`].
pub fn format_interval(
    start: NaiveDate,
    end: NaiveDate,
    skeleton: &str,
    fuzzy: bool,
    locale: &Locale,
) -> Result<String, EdtfError> {
    let data = locale.data();
    let found = data.interval_formats(skeleton).map(|formats| (skeleton, formats)).or_else(|| {
        if fuzzy {
            match_skeleton(skeleton, data.interval_keys())
                .and_then(|key| data.interval_formats(key).map(|formats| (key, formats)))
        } else {
            None
        }
    });

    let Some((key, formats)) = found else {
        debug!("no interval formats for {skeleton:?} in {}, using the fallback", data.tag);
        return format_fallback_interval(start, end, None, locale);
    };

    if start == end {
        return format_skeleton(key, start, fuzzy, locale);
    }

    for field in GREATEST_DIFFERENCE_FIELDS {
        let Some((_, pattern)) = formats.iter().find(|(f, _)| *f == field) else {
            continue;
        };
        if field_value(field, start) != field_value(field, end) {
            trace!("interval {start}..{end} differs in {field}, pattern {pattern:?}");
            let (first, second) = split_interval(pattern);
            let mut out = pattern::render(&first, start, data)?;
            out.push_str(&pattern::render(&second, end, data)?);
            return Ok(out);
        }
    }

    format_fallback_interval(start, end, Some(key), locale)
}

fn format_fallback_interval(
    start: NaiveDate,
    end: NaiveDate,
    skeleton: Option<&str>,
    locale: &Locale,
) -> Result<String, EdtfError> {
    let data = locale.data();
    let skeleton = skeleton.filter(|key| data.skeleton(key).is_some());
    let render_one = |date| match skeleton {
        Some(key) => format_skeleton(key, date, true, locale),
        None => format_date(date, &Format::default(), locale),
    };

    let formatted_start = render_one(start)?;
    let formatted_end = render_one(end)?;
    if formatted_start == formatted_end {
        return Ok(formatted_start);
    }

    debug!("joining {formatted_start:?} and {formatted_end:?} with the {} fallback", data.tag);
    Ok(data
        .interval_fallback
        .replace("{0}", &formatted_start)
        .replace("{1}", &formatted_end))
}

fn field_value(field: char, date: NaiveDate) -> i64 {
    match field {
        'G' => i64::from(date.year() > 0),
        'y' => i64::from(date.year()),
        'M' => i64::from(date.month()),
        _ => i64::from(date.day()),
    }
}

/// Picks the option closest to `skeleton`.
///
/// Only options with exactly the same fields qualify. Distance is the sum of
/// the width differences per field, except that a month field switching
/// between numeric (`M`, `MM`) and text (`MMM` and wider) costs
/// `0x100`. Options are tried in sorted order and the first of equally close
/// options wins.
pub fn match_skeleton<'a>(skeleton: &str, options: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let wanted = field_widths(skeleton);
    let mut options: Vec<&str> = options.into_iter().filter(|option| !option.is_empty()).collect();
    options.sort_unstable();

    let mut best: Option<(&str, usize)> = None;
    for option in options {
        let Some(distance) = skeleton_distance(&wanted, &field_widths(option)) else {
            continue;
        };
        trace!("skeleton {skeleton:?} vs {option:?}: distance {distance}");
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((option, distance));
        }
        if distance == 0 {
            break;
        }
    }
    best.map(|(option, _)| option)
}

fn skeleton_distance(wanted: &BTreeMap<char, usize>, offered: &BTreeMap<char, usize>) -> Option<usize> {
    if !wanted.keys().eq(offered.keys()) {
        return None;
    }

    let distance = wanted
        .iter()
        .zip(offered.values())
        .map(|((&field, &want), &offer)| {
            if field == 'M' && (want > 2) != (offer > 2) {
                MONTH_TEXT_DISTANCE
            } else {
                want.abs_diff(offer)
            }
        })
        .sum();
    Some(distance)
}
