pub mod calendar;
mod consts;
mod delay;
mod field;
mod partial;
mod prelude;
mod range;
mod range_field;
#[cfg(test)]
mod test_utils;
mod types;
pub mod validator;

pub use consts::*;
pub use delay::{AbortController, AbortSignal, sleep};
pub use field::{FocusCursor, SegmentedDateInput, ValueChange};
pub use partial::{DateParts, SegmentKind};
pub use range::{RangeError, RangeSelection};
pub use range_field::{Endpoint, RangeDateInput, RangeEvent};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use types::days_in_month;

/// A fully-populated, calendar-valid date. The canonical string shape is
/// exactly `YYYY-MM-DD`; parsing accepts nothing else.
///
/// Values are immutable once constructed. Entry-time partiality lives in
/// [`DateParts`], never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Builds a date from raw components, validating every one of them
    /// (month range, day range for the month, leap years).
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that fails validation.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (1-31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The next calendar day, or `None` past the last representable date.
    pub fn succ(&self) -> Option<Self> {
        let (y, m, d) = next_day(self.year(), self.month(), self.day())?;
        Self::from_ymd(y, m, d).ok()
    }

    /// The previous calendar day, or `None` before the first representable date.
    pub fn pred(&self) -> Option<Self> {
        let (y, m, d) = prev_day(self.year(), self.month(), self.day())?;
        Self::from_ymd(y, m, d).ok()
    }

    /// Moves by whole months, keeping the day-of-month and clamping it to the
    /// target month's length (2023-01-31 plus one month is 2023-02-28).
    /// Saturates at the representable year range.
    pub fn shift_months(self, delta: i32) -> Self {
        let index = i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(delta);
        let index = index.clamp(12, i64::from(MAX_YEAR) * 12 + 11);
        let year = (index / 12) as u16;
        let month = (index % 12 + 1) as u8;
        let day = self.day().min(days_in_month(year, month));
        Self::from_ymd(year, month, day).unwrap_or(self)
    }

    /// Moves by whole years with the same clamping rules as [`shift_months`].
    ///
    /// [`shift_months`]: Self::shift_months
    pub fn shift_years(self, delta: i32) -> Self {
        self.shift_months(delta.saturating_mul(12))
    }
}

// --- succession helpers ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == DECEMBER {
        // Check both overflow and our MAX_YEAR limit
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    let max = days_in_month(year, month);
    if day < max {
        Some((year, month, day + 1))
    } else {
        // roll to first of next month (respects MAX_YEAR limit)
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

fn prev_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == JANUARY {
        if year <= 1 {
            None
        } else {
            Some((year - 1, DECEMBER))
        }
    } else {
        Some((year, month - 1))
    }
}

fn prev_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day > MIN_DAY {
        Some((year, month, day - 1))
    } else {
        // roll to last day of the previous month
        prev_month(year, month).map(|(py, pm)| (py, pm, days_in_month(py, pm)))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Strict canonical parse: exactly `YYYY-MM-DD`, digits only, fixed
    /// widths. No trimming, no month-first forms, no short segments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let widths = [YEAR_WIDTH, DAY_MONTH_WIDTH, DAY_MONTH_WIDTH];
        for (part, width) in parts.iter().zip(widths) {
            if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidFormat(s.to_owned()));
            }
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::from_ymd(year, month, day)
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
