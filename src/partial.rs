use crate::CalendarDate;
use crate::consts::{DAY_MONTH_WIDTH, DATE_SEPARATOR, YEAR_WIDTH};
use crate::prelude::*;

/// One of the three numeric sub-fields composing a date entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SegmentKind {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl SegmentKind {
    /// Canonical digit width of the segment (2 for day/month, 4 for year).
    pub const fn width(self) -> usize {
        match self {
            Self::Day | Self::Month => DAY_MONTH_WIDTH,
            Self::Year => YEAR_WIDTH,
        }
    }

    /// Entry order is day, month, year; the year has no successor.
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Day => Some(Self::Month),
            Self::Month => Some(Self::Year),
            Self::Year => None,
        }
    }

    /// Reverse of [`successor`]; the day has no predecessor.
    ///
    /// [`successor`]: Self::successor
    pub const fn predecessor(self) -> Option<Self> {
        match self {
            Self::Day => None,
            Self::Month => Some(Self::Day),
            Self::Year => Some(Self::Month),
        }
    }
}

/// The mutable digit buffers behind a segmented date entry.
///
/// Each buffer holds only ASCII digits and is bounded by its segment width;
/// any of them may be empty (untouched) or shorter than the width
/// (mid-entry). Nothing here ever fails: over-long or non-digit input is
/// trimmed at the door.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    day: String,
    month: String,
    year: String,
}

impl DateParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decomposes a committed date into padded display buffers.
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            day: format!("{:02}", date.day()),
            month: format!("{:02}", date.month()),
            year: format!("{:04}", date.year()),
        }
    }

    pub fn get(&self, kind: SegmentKind) -> &str {
        match kind {
            SegmentKind::Day => &self.day,
            SegmentKind::Month => &self.month,
            SegmentKind::Year => &self.year,
        }
    }

    /// Replaces a buffer with `raw`, keeping only digits and truncating to
    /// the segment width. Non-digit characters are discarded, not rejected.
    pub fn set(&mut self, kind: SegmentKind, raw: &str) {
        let sanitized: String = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(kind.width())
            .collect();
        *self.buffer_mut(kind) = sanitized;
    }

    /// Left-pads a non-empty buffer to its canonical width ("3" becomes
    /// "03"). Empty buffers stay empty. Returns whether anything changed.
    pub fn pad(&mut self, kind: SegmentKind) -> bool {
        let width = kind.width();
        let buffer = self.buffer_mut(kind);
        if buffer.is_empty() || buffer.len() >= width {
            return false;
        }
        *buffer = format!("{buffer:0>width$}");
        true
    }

    /// True when a buffer holds as many digits as its canonical width.
    pub fn is_filled(&self, kind: SegmentKind) -> bool {
        self.get(kind).len() == kind.width()
    }

    /// True when every buffer is untouched.
    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    /// True when every buffer is at canonical width. Says nothing about
    /// calendar validity; see [`to_date`].
    ///
    /// [`to_date`]: Self::to_date
    pub fn is_complete(&self) -> bool {
        self.is_filled(SegmentKind::Day)
            && self.is_filled(SegmentKind::Month)
            && self.is_filled(SegmentKind::Year)
    }

    pub fn clear(&mut self) {
        self.day.clear();
        self.month.clear();
        self.year.clear();
    }

    /// Joins the raw buffers into `year-month-day`. Partial buffers yield a
    /// partial string ("2023--" and friends); this is display plumbing, not
    /// a committed value.
    pub fn assemble(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.year,
            self.month,
            self.day,
            sep = DATE_SEPARATOR
        )
    }

    /// The committed date, if the assembly is complete and calendar-valid.
    pub fn to_date(&self) -> Option<CalendarDate> {
        self.assemble().parse().ok()
    }
}

impl DateParts {
    fn buffer_mut(&mut self, kind: SegmentKind) -> &mut String {
        match kind {
            SegmentKind::Day => &mut self.day,
            SegmentKind::Month => &mut self.month,
            SegmentKind::Year => &mut self.year,
        }
    }
}
