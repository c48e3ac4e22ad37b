use edtf_format::{
    Day, Edtf, EdtfDate, EdtfError, EdtfInput, EdtfInterval, FormatOptions, IntervalBound, Month, Year,
    format_edtf, format_edtf_with, parse_edtf,
};
use proptest::prelude::*;

struct TestCase {
    input:    &'static str,
    format:   &'static str,
    locale:   &'static str,
    expected: &'static str,
}

#[test]
fn test_rendered_output() {
    let cases = [
        TestCase {
            input:    "1990",
            format:   "short",
            locale:   "en",
            expected: "1990",
        },
        TestCase {
            input:    "1990-06",
            format:   "short",
            locale:   "en",
            expected: "6/1990",
        },
        TestCase {
            input:    "1990-06-15",
            format:   "short",
            locale:   "en",
            expected: "6/15/90",
        },
        TestCase {
            input:    "1990-06",
            format:   "medium",
            locale:   "en",
            expected: "Jun 1990",
        },
        TestCase {
            input:    "1990-06",
            format:   "full",
            locale:   "en",
            expected: "June 1990",
        },
        TestCase {
            input:    "1990-06-15",
            format:   "full",
            locale:   "en",
            expected: "Friday, June 15, 1990",
        },
        TestCase {
            input:    "1990/1991",
            format:   "medium",
            locale:   "en",
            expected: "1990 – 1991",
        },
        TestCase {
            input:    "1990/1990",
            format:   "medium",
            locale:   "en",
            expected: "1990",
        },
        TestCase {
            input:    "2004-02-01/2004-02-08",
            format:   "medium",
            locale:   "en",
            expected: "Feb 1 – 8, 2004",
        },
        TestCase {
            input:    "2004-02-01/2004-02-08",
            format:   "long",
            locale:   "en",
            expected: "Feb 1 – 8, 2004",
        },
        TestCase {
            input:    "2004-02-01/2004-02-08",
            format:   "full",
            locale:   "en",
            expected: "Sun, Feb 1 – Sun, Feb 8, 2004",
        },
        TestCase {
            input:    "2004-02-01/2004-02-08",
            format:   "full",
            locale:   "en-GB",
            expected: "Sun, 1 – Sun, 8 Feb 2004",
        },
        TestCase {
            input:    "2004-06/2006-08",
            format:   "long",
            locale:   "en",
            expected: "June 2004 – August 2006",
        },
        TestCase {
            input:    "1990-06-15",
            format:   "medium",
            locale:   "en_GB",
            expected: "15 Jun 1990",
        },
        TestCase {
            input:    "1990-09",
            format:   "medium",
            locale:   "en-GB",
            expected: "Sept 1990",
        },
        TestCase {
            input:    "1990-06-15",
            format:   "full",
            locale:   "de-DE",
            expected: "Freitag, 15. Juni 1990",
        },
        TestCase {
            input:    "1990-06-15",
            format:   "long",
            locale:   "fr",
            expected: "15 juin 1990",
        },
        TestCase {
            input:    "1990-06",
            format:   "long",
            locale:   "es",
            expected: "junio de 1990",
        },
        TestCase {
            input:    "1990-06-15",
            format:   "dd/MM/y",
            locale:   "en",
            expected: "15/06/1990",
        },
        TestCase {
            input:    "1990-06",
            format:   "MMMMy",
            locale:   "en",
            expected: "June 1990",
        },
    ];

    for case in &cases {
        assert_eq!(
            format_edtf(case.input, case.format, case.locale).unwrap(),
            case.expected,
            "{} / {} / {}",
            case.input,
            case.format,
            case.locale
        );
    }
}

#[test]
fn test_leap_years() {
    assert_eq!(format_edtf("2024-02-29", "medium", "en").unwrap(), "Feb 29, 2024");
    let err = format_edtf("2023-02-29", "medium", "en").unwrap_err();
    assert!(err.is_value_error(), "{err}");
    assert!(format_edtf("2023-02-29/2024", "medium", "en").unwrap_err().is_value_error());
}

#[test]
fn test_hand_built_leap_day_is_rejected() {
    let date = EdtfDate::Day {
        year:  Year::new(2023).unwrap(),
        month: Month::new(2).unwrap(),
        day:   Day::new(29, 2024, 2).unwrap(),
    };
    assert!(format_edtf(date, "medium", "en").unwrap_err().is_value_error());
}

#[test]
fn test_today() {
    let formatted = format_edtf(None::<&str>, "medium", "en").unwrap();
    assert!(!formatted.is_empty());
    assert_eq!(format_edtf(EdtfInput::Today, "short", "de").unwrap().matches('.').count(), 2);
}

#[test]
fn test_error_kinds() {
    let err = format_edtf("not-a-date", "medium", "en").unwrap_err();
    assert!(err.is_value_error());

    let err = format_edtf("", "medium", "en").unwrap_err();
    assert!(err.is_value_error());

    let err = format_edtf("1990-06-15T10:00:00Z", "medium", "en").unwrap_err();
    assert!(err.is_type_error());

    // Non-string values never reach the formatter as EDTF
    let err = serde_json::from_str::<Edtf>("1990").unwrap_err();
    assert!(err.to_string().contains("invalid type"));

    assert!(matches!(
        format_edtf("1990", "medium", "xx"),
        Err(EdtfError::UnknownLocale(ref tag)) if tag == "xx"
    ));
    // The value is checked before the locale
    assert!(format_edtf("not-a-date", "medium", "xx").unwrap_err().is_value_error());
}

#[test]
fn test_custom_format_errors() {
    assert!(matches!(
        format_edtf("1990", "Hm", "en"),
        Err(EdtfError::UnmatchedSkeleton { .. })
    ));
    assert_eq!(
        format_edtf("1990-06-15", "HH:mm", "en"),
        Err(EdtfError::UnsupportedField('H'))
    );
}

#[test]
fn test_coarser_upper_end_covers_the_lower_date() {
    let cases = [
        TestCase {
            input:    "1990-02/1990",
            format:   "medium",
            locale:   "en",
            expected: "Feb – Dec 1990",
        },
        TestCase {
            input:    "1990-06-15/1990-06",
            format:   "medium",
            locale:   "en",
            expected: "Jun 15 – 30, 1990",
        },
        TestCase {
            input:    "1990-12-31/1990",
            format:   "medium",
            locale:   "en",
            expected: "Dec 31, 1990",
        },
    ];

    for case in &cases {
        assert_eq!(
            format_edtf(case.input, case.format, case.locale).unwrap(),
            case.expected,
            "{}",
            case.input
        );
    }
    assert!(format_edtf("1991-01/1990", "medium", "en").unwrap_err().is_value_error());
}

#[test]
fn test_unbounded_intervals() {
    for input in ["../1990", "1990/..", "1990/", "/1990-06"] {
        let edtf = parse_edtf(input).unwrap();
        assert_eq!(edtf.to_string(), input);
        assert!(
            matches!(
                format_edtf(input, "medium", "en"),
                Err(EdtfError::UnboundedInterval(ref shown)) if shown == input
            ),
            "{input}"
        );
    }
}

#[test]
fn test_parsed_and_string_input_agree() {
    for input in ["1990", "1990-06", "1990-06-15", "1990/1991", "2004-02-01/2004-02-08", "1990-06/1991"] {
        for format in ["full", "long", "medium", "short"] {
            let parsed = parse_edtf(input).unwrap();
            assert_eq!(
                format_edtf(input, format, "en").unwrap(),
                format_edtf(parsed, format, "en").unwrap(),
                "{input} / {format}"
            );
        }
    }
}

#[test]
fn test_region_fallback() {
    for input in ["1990-06-15", "1990-06", "2004-02-01/2004-02-08"] {
        assert_eq!(
            format_edtf(input, "medium", "en-US").unwrap(),
            format_edtf(input, "medium", "en").unwrap()
        );
    }
}

#[test]
fn test_format_with_options() {
    let options = FormatOptions::default();
    let interval = EdtfInterval::new(
        IntervalBound::Date("1964".parse().unwrap()),
        IntervalBound::Date("2008".parse().unwrap()),
    )
    .unwrap();
    assert_eq!(format_edtf_with(interval, &options).unwrap(), "1964 – 2008");

    let options = FormatOptions::new("short", "es").unwrap();
    assert_eq!(format_edtf_with("1990-06-15", &options).unwrap(), "15/6/90");
}

proptest! {
    #[test]
    fn month_precision_shows_the_year(year in 0u16..=9999, month in 1u8..=12) {
        let input = format!("{year:04}-{month:02}");
        for format in ["full", "long", "medium", "short"] {
            let formatted = format_edtf(input.as_str(), format, "en").unwrap();
            prop_assert!(formatted.contains(&year.to_string()), "{} -> {}", input, formatted);
        }
    }

    #[test]
    fn year_intervals(lower in 0u16..=9999, span in 0u16..=50) {
        let upper = lower.saturating_add(span).min(9999);
        let input = format!("{lower:04}/{upper:04}");
        let expected = if lower == upper {
            lower.to_string()
        } else {
            format!("{lower} – {upper}")
        };
        prop_assert_eq!(format_edtf(input.as_str(), "medium", "en").unwrap(), expected);
    }
}
