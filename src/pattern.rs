//! CLDR date patterns: tokenizing, interval splitting and rendering.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::EdtfError;
use crate::locale::LocaleData;

const QUOTE: char = '\'';

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A run of one pattern letter, e.g. `MMM` is `('M', 3)`
    Field { symbol: char, width: usize },
    Literal(String),
}

pub(crate) fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == QUOTE {
            // '' outside quotes is an apostrophe
            if chars.peek() == Some(&QUOTE) {
                chars.next();
                literal.push(QUOTE);
                continue;
            }
            while let Some(q) = chars.next() {
                if q != QUOTE {
                    literal.push(q);
                } else if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    literal.push(QUOTE);
                } else {
                    break;
                }
            }
        } else if c.is_ascii_alphabetic() {
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }
            tokens.push(Token::Field { symbol: c, width });
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Field letter to width. A letter that appears twice keeps its last width.
pub(crate) fn field_widths(skeleton: &str) -> BTreeMap<char, usize> {
    tokenize(skeleton)
        .into_iter()
        .filter_map(|token| match token {
            Token::Field { symbol, width } => Some((symbol, width)),
            Token::Literal(_) => None,
        })
        .collect()
}

/// Splits an interval pattern at its first repeated field: the first half
/// renders the start, the second half the end.
pub(crate) fn split_interval(pattern: &str) -> (Vec<Token>, Vec<Token>) {
    let mut first = tokenize(pattern);
    let mut seen = Vec::new();
    let split = first.iter().position(|token| match token {
        Token::Field { symbol, .. } if seen.contains(symbol) => true,
        Token::Field { symbol, .. } => {
            seen.push(*symbol);
            false
        },
        Token::Literal(_) => false,
    });

    let second = split.map_or_else(Vec::new, |at| first.split_off(at));
    (first, second)
}

pub(crate) fn render(tokens: &[Token], date: NaiveDate, locale: &LocaleData) -> Result<String, EdtfError> {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Field { symbol, width } => out.push_str(&render_field(*symbol, *width, date, locale)?),
        }
    }
    Ok(out)
}

pub(crate) fn render_pattern(pattern: &str, date: NaiveDate, locale: &LocaleData) -> Result<String, EdtfError> {
    render(&tokenize(pattern), date, locale)
}

fn render_field(symbol: char, width: usize, date: NaiveDate, locale: &LocaleData) -> Result<String, EdtfError> {
    let text = match symbol {
        'G' => {
            let era = usize::from(date.year() > 0);
            match width {
                4 => locale.eras_wide[era].to_owned(),
                5 => narrow(locale.eras_abbreviated[era]),
                _ => locale.eras_abbreviated[era].to_owned(),
            }
        },
        'y' | 'Y' | 'u' => {
            let year = date.year();
            if width == 2 {
                format!("{:02}", year.rem_euclid(100))
            } else {
                format!("{year:0width$}")
            }
        },
        'M' | 'L' => {
            let index = date.month0() as usize;
            match width {
                1 | 2 => format!("{:0width$}", date.month()),
                3 => locale.months_abbreviated[index].to_owned(),
                4 => locale.months_wide[index].to_owned(),
                _ => narrow(locale.months_wide[index]),
            }
        },
        'd' => format!("{:0width$}", date.day()),
        'c' if width <= 2 => format!("{:0width$}", date.weekday().number_from_sunday()),
        'E' | 'c' => {
            let index = date.weekday().num_days_from_sunday() as usize;
            match width {
                4 => locale.weekdays_wide[index].to_owned(),
                5 => narrow(locale.weekdays_wide[index]),
                _ => locale.weekdays_abbreviated[index].to_owned(),
            }
        },
        _ => return Err(EdtfError::UnsupportedField(symbol)),
    };
    Ok(text)
}

fn narrow(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
