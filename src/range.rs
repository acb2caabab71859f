use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError};

/// Error type for range selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// Error parsing an endpoint.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// A possibly-incomplete pair of range endpoints.
///
/// Either endpoint may be absent while the user is still picking; when both
/// are present the start is guaranteed not to come after the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeSelection {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

impl RangeSelection {
    /// Creates a selection, enforcing the ordering invariant when both
    /// endpoints are supplied.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    ) -> Result<Self, RangeError> {
        match (start, end) {
            (Some(s), Some(e)) if s > e => Err(RangeError::InvalidRange { start: s, end: e }),
            _ => Ok(Self { start, end }),
        }
    }

    /// Builds a selection from the external string contract: each endpoint
    /// is `""` (absent) or a canonical `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// Returns a parse error for non-canonical input, or `InvalidRange` for
    /// a reversed pair.
    pub fn from_strs(start: &str, end: &str) -> Result<Self, RangeError> {
        let parse = |s: &str| -> Result<Option<CalendarDate>, ParseError> {
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse().map(Some)
            }
        };
        Self::new(parse(start)?, parse(end)?)
    }

    /// Returns the start endpoint if selected
    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    /// Returns the end endpoint if selected
    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// True when both endpoints are selected.
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Inclusive containment check. Incomplete selections contain nothing.
    pub fn contains(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(s), Some(e)) => s <= date && date <= e,
            _ => false,
        }
    }
}
