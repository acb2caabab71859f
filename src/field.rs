use crate::CalendarDate;
use crate::partial::{DateParts, SegmentKind};
use crate::prelude::*;
use tracing::trace;

/// Which sub-field currently owns keyboard focus. Exactly one owner at a
/// time; `None` means the composite control is unfocused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum FocusCursor {
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl FocusCursor {
    pub const fn segment(self) -> Option<SegmentKind> {
        match self {
            Self::None => None,
            Self::Day => Some(SegmentKind::Day),
            Self::Month => Some(SegmentKind::Month),
            Self::Year => Some(SegmentKind::Year),
        }
    }

    const fn at(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Day => Self::Day,
            SegmentKind::Month => Self::Month,
            SegmentKind::Year => Self::Year,
        }
    }
}

/// A change notification. Renders to the outward value contract: `""` for a
/// full clear, the canonical `YYYY-MM-DD` string otherwise, never a partial
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValueChange {
    /// Every sub-field was emptied.
    #[display(fmt = "")]
    Cleared,
    /// All three sub-fields assemble into a calendar-valid date.
    #[display(fmt = "{_0}")]
    Committed(CalendarDate),
}

impl ValueChange {
    /// The wire form of the notification (`""` or canonical).
    pub fn as_value(&self) -> String {
        self.to_string()
    }
}

/// Segmented day/month/year entry for a single date endpoint.
///
/// Owns its digit buffers and focus cursor; every transition happens
/// synchronously inside a handler method and returns the resulting
/// notification, if any. Partial or garbled input never errors; it is
/// absorbed as incomplete state.
#[derive(Debug, Clone, Default)]
pub struct SegmentedDateInput {
    parts: DateParts,
    focus: FocusCursor,
    // focusing an input selects its content, so the next keystroke replaces
    // rather than appends
    replace_on_input: bool,
}

impl SegmentedDateInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn focus(&self) -> FocusCursor {
        self.focus
    }

    pub const fn parts(&self) -> &DateParts {
        &self.parts
    }

    /// The committed value, when the buffers assemble into a valid date.
    pub fn value(&self) -> Option<CalendarDate> {
        self.parts.to_date()
    }

    /// Moves focus onto a sub-field, arming select-all replacement.
    pub fn focus_segment(&mut self, kind: SegmentKind) {
        self.focus = FocusCursor::at(kind);
        self.replace_on_input = true;
    }

    /// Composite blur: releases the cursor and reports whether the
    /// assembled value parses as a strict canonical date.
    pub fn blur(&mut self) -> bool {
        self.focus = FocusCursor::None;
        self.replace_on_input = false;
        let valid = self.parts.to_date().is_some();
        trace!(%valid, "section blur");
        valid
    }

    /// External value push from a controlling value or the calendar picker.
    /// `""` clears every buffer; a canonical date overwrites them with
    /// padded parts; anything else is ignored. Focus state is untouched.
    pub fn set_value(&mut self, value: &str) {
        if value.is_empty() {
            self.parts.clear();
            return;
        }
        if let Ok(date) = value.parse::<CalendarDate>() {
            self.parts = DateParts::from_date(date);
        }
    }

    pub fn clear(&mut self) {
        self.parts.clear();
    }

    /// Change-event path: replaces the sub-field's raw content (digits are
    /// kept, everything else dropped), auto-advancing focus once the
    /// segment fills. Emits `Cleared` when every buffer went empty,
    /// `Committed` when the assembly became a valid date.
    pub fn input(&mut self, kind: SegmentKind, raw: &str) -> Option<ValueChange> {
        self.focus = FocusCursor::at(kind);
        self.replace_on_input = false;
        self.parts.set(kind, raw);
        self.advance_if_filled(kind);
        self.emission()
    }

    /// Single keystroke into the focused sub-field (day first when the
    /// control is unfocused). Non-digit characters are silently discarded.
    pub fn type_char(&mut self, ch: char) -> Option<ValueChange> {
        if !ch.is_ascii_digit() {
            return None;
        }

        let kind = match self.focus.segment() {
            Some(kind) => kind,
            None => {
                self.focus_segment(SegmentKind::Day);
                SegmentKind::Day
            }
        };

        let buffer = if self.replace_on_input {
            ch.to_string()
        } else {
            if self.parts.is_filled(kind) {
                // the native input's maxLength swallows the keystroke
                return None;
            }
            let mut grown = self.parts.get(kind).to_owned();
            grown.push(ch);
            grown
        };
        self.replace_on_input = false;

        self.parts.set(kind, &buffer);
        self.advance_if_filled(kind);
        self.emission()
    }

    /// Backspace on an empty sub-field retreats focus without touching the
    /// previous field's value; otherwise it deletes (the whole selection
    /// when armed, the last digit when not).
    pub fn press_backspace(&mut self) -> Option<ValueChange> {
        let kind = self.focus.segment()?;

        if self.parts.get(kind).is_empty() {
            if let Some(prev) = kind.predecessor() {
                trace!(from = %kind, to = %prev, "backspace retreat");
                self.focus_segment(prev);
            }
            return None;
        }

        let buffer = if self.replace_on_input {
            String::new()
        } else {
            let current = self.parts.get(kind);
            current[..current.len() - 1].to_owned()
        };
        self.replace_on_input = false;

        self.parts.set(kind, &buffer);
        self.emission()
    }

    /// Sub-field blur: left-pads the raw value to canonical width. When the
    /// padding actually changed something and the assembly became valid,
    /// the padded date is emitted.
    pub fn blur_segment(&mut self, kind: SegmentKind) -> Option<ValueChange> {
        if !self.parts.pad(kind) {
            // nothing actually changed
            return None;
        }
        self.parts.to_date().map(ValueChange::Committed)
    }
}

impl SegmentedDateInput {
    fn advance_if_filled(&mut self, kind: SegmentKind) {
        if !self.parts.is_filled(kind) {
            return;
        }
        if let Some(next) = kind.successor() {
            trace!(from = %kind, to = %next, "auto-advance");
            self.focus_segment(next);
        }
    }

    fn emission(&self) -> Option<ValueChange> {
        if self.parts.is_empty() {
            return Some(ValueChange::Cleared);
        }
        self.parts.to_date().map(ValueChange::Committed)
    }
}
