//! Constructor shorthands shared by the unit tests.

use crate::CalendarDate;

/// Parses a canonical `YYYY-MM-DD` literal, panicking on typos in the test
/// fixture itself.
pub fn date(s: &str) -> CalendarDate {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test fixture {s:?}: {e}"))
}

/// Owned-string list helper for disabled-date fixtures.
pub fn dates(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
