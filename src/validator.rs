//! Pure acceptance rules for committed date values.
//!
//! Every function here is total: any input string, however partial or
//! garbled, maps to a defined output. The only failure signal is a `false`.

use crate::CalendarDate;
use crate::consts::DATE_SEPARATOR;
use crate::types::days_in_month;

pub use crate::types::is_leap_year;

/// An inclusive `[min, max]` window. Both entries must be canonical
/// `YYYY-MM-DD` strings for the window to be trusted; see [`validate`].
pub type Boundary = [Option<String>; 2];

/// Decomposed display triples, `[dd, mm, yyyy]` per endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegments {
    pub start: [String; 3],
    pub end: Option<[String; 3]>,
}

/// Accepts or rejects a `(start, end)` pair.
///
/// Rejects when either endpoint is missing or non-canonical, when the pair
/// is reversed, when an endpoint sits in the disabled set, or when an
/// endpoint falls outside the boundary window. A supplied boundary whose
/// entries are not both well-formed rejects outright: configuration must be
/// well-formed to be trusted, so a bad window is never quietly ignored.
pub fn validate(
    start: &str,
    end: &str,
    disabled_dates: Option<&[String]>,
    boundary: Option<&Boundary>,
) -> bool {
    let (Some(start), Some(end)) = (parse(start), parse(end)) else {
        return false;
    };
    if start > end {
        return false;
    }
    accepts(&[start, end], disabled_dates, boundary)
}

/// [`validate`] for a lone date: same rules minus the ordering check.
pub fn validate_single(
    date: &str,
    disabled_dates: Option<&[String]>,
    boundary: Option<&Boundary>,
) -> bool {
    let Some(date) = parse(date) else {
        return false;
    };
    accepts(&[date], disabled_dates, boundary)
}

/// Splits canonical strings into per-field display triples. The `end` key
/// is `None` (not an empty triple) when no end value is supplied. Malformed
/// input decomposes best-effort, missing segments becoming empty strings.
pub fn formatted_raw_value(start: &str, end: Option<&str>) -> RawSegments {
    RawSegments {
        start: split_display(start),
        end: end.map(split_display),
    }
}

/// Maps an out-of-range day down to the last valid day of the month,
/// accounting for leap years; day `"0"` maps up to `"1"`. An unparsable day
/// or month leaves the input untouched.
pub fn clamp_day(day: &str, month: &str, year: &str) -> String {
    let Ok(day_number) = day.trim().parse::<u32>() else {
        return day.to_owned();
    };
    if day_number == 0 {
        return "1".to_owned();
    }

    let Ok(month_number) = month.trim().parse::<u8>() else {
        return day.to_owned();
    };
    if !(1..=12).contains(&month_number) {
        return day.to_owned();
    }

    // an unparsable year clamps February like a common year
    let year_number = year.trim().parse::<u16>().unwrap_or(1);
    let limit = u32::from(days_in_month(year_number, month_number));
    day_number.min(limit).to_string()
}

/// Maps `"0"` to `"1"` and anything above 12 down to `"12"`; everything
/// else (including unparsable input) passes through unchanged.
pub fn clamp_month(month: &str) -> String {
    let Ok(month_number) = month.trim().parse::<u32>() else {
        return month.to_owned();
    };
    if month_number == 0 {
        return "1".to_owned();
    }
    if month_number > 12 {
        return "12".to_owned();
    }
    month.to_owned()
}

fn parse(value: &str) -> Option<CalendarDate> {
    value.parse().ok()
}

fn accepts(
    dates: &[CalendarDate],
    disabled_dates: Option<&[String]>,
    boundary: Option<&Boundary>,
) -> bool {
    if let Some(disabled) = disabled_dates {
        for date in dates {
            let canonical = date.to_string();
            if disabled.contains(&canonical) {
                return false;
            }
        }
    }

    let Some([min, max]) = boundary else {
        return true;
    };
    let (Some(min), Some(max)) = (
        min.as_deref().and_then(parse),
        max.as_deref().and_then(parse),
    ) else {
        return false;
    };
    dates.iter().all(|date| min <= *date && *date <= max)
}

fn split_display(value: &str) -> [String; 3] {
    let mut segments = value.splitn(3, DATE_SEPARATOR);
    let year = segments.next().unwrap_or_default().to_owned();
    let month = segments.next().unwrap_or_default().to_owned();
    let day = segments.next().unwrap_or_default().to_owned();
    [day, month, year]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::dates;

    fn window(min: &str, max: &str) -> Boundary {
        [Some(min.to_owned()), Some(max.to_owned())]
    }

    #[test]
    fn test_validate_accepts_ordered_pair() {
        assert!(validate("2023-04-01", "2023-04-25", None, None));
        assert!(validate("2023-04-01", "2023-04-01", None, None));
    }

    #[test]
    fn test_validate_rejects_missing_endpoint() {
        assert!(!validate("2023-04-01", "", None, None));
        assert!(!validate("", "2023-04-25", None, None));
        assert!(!validate("", "", None, None));
    }

    #[test]
    fn test_validate_rejects_reversed_pair() {
        assert!(!validate("2023-04-25", "2023-04-01", None, None));
    }

    #[test]
    fn test_validate_rejects_partial_strings() {
        assert!(!validate("2023-4-01", "2023-04-25", None, None));
        assert!(!validate("2023-04-01", "2023-04-", None, None));
    }

    #[test]
    fn test_validate_antisymmetric_for_distinct_dates() {
        let pairs = [
            ("2023-04-01", "2023-04-25"),
            ("2022-12-31", "2023-01-01"),
            ("2023-02-28", "2023-03-01"),
        ];
        for (a, b) in pairs {
            assert_ne!(
                validate(a, b, None, None),
                validate(b, a, None, None),
                "expected exactly one ordering of ({a}, {b}) to validate"
            );
        }
    }

    #[test]
    fn test_validate_disabled_dates() {
        let disabled = dates(&["2023-04-15"]);

        // disabled date strictly inside the range is fine
        assert!(validate(
            "2023-04-01",
            "2023-04-25",
            Some(&disabled),
            None
        ));

        // either endpoint on a disabled date rejects
        assert!(!validate(
            "2023-04-01",
            "2023-04-15",
            Some(&disabled),
            None
        ));
        assert!(!validate(
            "2023-04-15",
            "2023-04-25",
            Some(&disabled),
            None
        ));
    }

    #[test]
    fn test_validate_boundary_window() {
        let between = window("2023-03-25", "2023-04-23");

        assert!(validate("2023-04-01", "2023-04-15", None, Some(&between)));
        // inclusive on both sides
        assert!(validate("2023-03-25", "2023-04-23", None, Some(&between)));

        assert!(!validate("2023-03-22", "2023-04-15", None, Some(&between)));
        assert!(!validate("2023-04-01", "2023-04-27", None, Some(&between)));
    }

    #[test]
    fn test_validate_malformed_boundary_rejects_outright() {
        let missing_min: Boundary = [None, Some("2023-04-12".to_owned())];
        assert!(!validate(
            "2023-02-12",
            "2023-03-17",
            None,
            Some(&missing_min)
        ));

        let garbled: Boundary = [Some("2023-4-1".to_owned()), Some("2023-04-12".to_owned())];
        assert!(!validate(
            "2023-02-12",
            "2023-03-17",
            None,
            Some(&garbled)
        ));
    }

    #[test]
    fn test_validate_single_accepts_lone_date() {
        assert!(validate_single("2023-04-01", None, None));
        assert!(!validate_single("", None, None));
        assert!(!validate_single("2023-02-30", None, None));
    }

    #[test]
    fn test_validate_single_disabled_dates() {
        let disabled = dates(&["2023-04-15"]);
        assert!(validate_single("2023-04-01", Some(&disabled), None));
        assert!(!validate_single("2023-04-15", Some(&disabled), None));
    }

    #[test]
    fn test_validate_single_boundary() {
        let inverted = window("2023-04-25", "2023-04-23");
        // an inverted window admits nothing
        assert!(!validate_single("2023-04-24", None, Some(&inverted)));
        assert!(!validate_single("2023-03-22", None, Some(&inverted)));

        let missing_max: Boundary = [Some("2023-04-12".to_owned()), None];
        assert!(!validate_single("2023-02-12", None, Some(&missing_max)));
    }

    #[test]
    fn test_formatted_raw_value_splits_fields() {
        let single = formatted_raw_value("2023-03-10", None);
        assert_eq!(
            single.start,
            ["10".to_owned(), "03".to_owned(), "2023".to_owned()]
        );
        assert_eq!(single.end, None);

        let pair = formatted_raw_value("2023-03-10", Some("2023-04-05"));
        assert_eq!(
            pair.end,
            Some(["05".to_owned(), "04".to_owned(), "2023".to_owned()])
        );
    }

    #[test]
    fn test_formatted_raw_value_tolerates_partials() {
        let partial = formatted_raw_value("2023-03", None);
        assert_eq!(
            partial.start,
            [String::new(), "03".to_owned(), "2023".to_owned()]
        );

        let empty = formatted_raw_value("", None);
        assert_eq!(empty.start, [String::new(), String::new(), String::new()]);
    }

    #[test]
    fn test_clamp_day_cases() {
        struct TestCase {
            day: &'static str,
            month: &'static str,
            year: &'static str,
            expected: &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                day: "32",
                month: "01",
                year: "2023",
                expected: "31",
                description: "31-day month upper clamp",
            },
            TestCase {
                day: "31",
                month: "04",
                year: "2023",
                expected: "30",
                description: "30-day month upper clamp",
            },
            TestCase {
                day: "30",
                month: "02",
                year: "2023",
                expected: "28",
                description: "February, common year",
            },
            TestCase {
                day: "30",
                month: "02",
                year: "2024",
                expected: "29",
                description: "February, leap year",
            },
            TestCase {
                day: "0",
                month: "05",
                year: "2023",
                expected: "1",
                description: "zero clamps up",
            },
            TestCase {
                day: "15",
                month: "01",
                year: "2023",
                expected: "15",
                description: "in-range day survives",
            },
            TestCase {
                day: "07",
                month: "13",
                year: "2023",
                expected: "07",
                description: "nonsense month passes the day through",
            },
            TestCase {
                day: "xx",
                month: "01",
                year: "2023",
                expected: "xx",
                description: "unparsable day passes through",
            },
        ];

        for case in &cases {
            assert_eq!(
                clamp_day(case.day, case.month, case.year),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_clamp_day_without_year_treats_february_as_common() {
        assert_eq!(clamp_day("30", "02", ""), "28");
    }

    #[test]
    fn test_clamp_month_cases() {
        assert_eq!(clamp_month("0"), "1");
        assert_eq!(clamp_month("13"), "12");
        assert_eq!(clamp_month("99"), "12");
        assert_eq!(clamp_month("05"), "05");
        assert_eq!(clamp_month("12"), "12");
        assert_eq!(clamp_month("month"), "month");
        assert_eq!(clamp_month(""), "");
    }

    #[test]
    fn test_leap_year_reexport() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_validator_agrees_with_range_selection() {
        // the same pair accepted here constructs a RangeSelection cleanly
        assert!(validate("2023-04-01", "2023-04-25", None, None));
        assert!(crate::RangeSelection::from_strs("2023-04-01", "2023-04-25").is_ok());
    }
}
