use crate::CalendarDate;
use crate::field::{SegmentedDateInput, ValueChange};
use crate::partial::SegmentKind;
use crate::prelude::*;
use crate::range::RangeSelection;
use crate::validator::{self, Boundary};
use tracing::debug;

/// Start or end date of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Endpoint {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

impl Endpoint {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Notification from the range control: which endpoint changed, what it
/// emitted, and whether the ordering rule dropped the opposite endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEvent {
    pub endpoint: Endpoint,
    pub change: ValueChange,
    /// Set when committing this endpoint reversed the pair; the typed value
    /// wins and the other endpoint is emptied.
    pub cleared: Option<Endpoint>,
}

/// Segmented entry for a date range: one [`SegmentedDateInput`] per
/// endpoint plus the endpoint cursor, with the acceptance rules (disabled
/// dates, boundary window) applied at commit time.
#[derive(Debug, Clone, Default)]
pub struct RangeDateInput {
    start: SegmentedDateInput,
    end: SegmentedDateInput,
    active: Option<Endpoint>,
    disabled_dates: Vec<String>,
    boundary: Option<Boundary>,
}

impl RangeDateInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// A control whose commits are checked against a disabled-date list and
    /// an optional inclusive boundary window.
    pub fn with_rules(disabled_dates: Vec<String>, boundary: Option<Boundary>) -> Self {
        Self {
            disabled_dates,
            boundary,
            ..Self::default()
        }
    }

    pub const fn active(&self) -> Option<Endpoint> {
        self.active
    }

    pub const fn endpoint(&self, endpoint: Endpoint) -> &SegmentedDateInput {
        match endpoint {
            Endpoint::Start => &self.start,
            Endpoint::End => &self.end,
        }
    }

    /// The current pair. The ordering rule keeps the pair coherent, so this
    /// never observes a reversed selection.
    pub fn selection(&self) -> RangeSelection {
        RangeSelection::new(self.start.value(), self.end.value()).unwrap_or_default()
    }

    /// Moves focus onto one endpoint's sub-field, blurring the other
    /// endpoint if it held the cursor.
    pub fn focus_segment(&mut self, endpoint: Endpoint, kind: SegmentKind) {
        self.activate(endpoint);
        self.field_mut(endpoint).focus_segment(kind);
    }

    /// Change-event path for one endpoint's sub-field.
    pub fn input(&mut self, endpoint: Endpoint, kind: SegmentKind, raw: &str) -> Option<RangeEvent> {
        self.activate(endpoint);
        let change = self.field_mut(endpoint).input(kind, raw)?;
        Some(self.reconcile(endpoint, change))
    }

    /// Keystroke into the active endpoint (the start endpoint when the
    /// control is untouched).
    pub fn type_char(&mut self, ch: char) -> Option<RangeEvent> {
        let endpoint = self.active.unwrap_or(Endpoint::Start);
        self.activate(endpoint);
        let change = self.field_mut(endpoint).type_char(ch)?;
        Some(self.reconcile(endpoint, change))
    }

    /// Backspace in the active endpoint; a no-op while nothing is focused.
    pub fn press_backspace(&mut self) -> Option<RangeEvent> {
        let endpoint = self.active?;
        let change = self.field_mut(endpoint).press_backspace()?;
        Some(self.reconcile(endpoint, change))
    }

    /// Sub-field blur (padding) for one endpoint.
    pub fn blur_segment(&mut self, endpoint: Endpoint, kind: SegmentKind) -> Option<RangeEvent> {
        let change = self.field_mut(endpoint).blur_segment(kind)?;
        Some(self.reconcile(endpoint, change))
    }

    /// External value push into one endpoint (picker clicks, controlling
    /// props); same `""`/canonical contract as the single field.
    pub fn set_value(&mut self, endpoint: Endpoint, value: &str) {
        self.field_mut(endpoint).set_value(value);
    }

    /// Composite blur: releases both cursors and reports whether both
    /// endpoints assemble into strict canonical dates.
    pub fn blur(&mut self) -> bool {
        self.active = None;
        let start_valid = self.start.blur();
        let end_valid = self.end.blur();
        start_valid && end_valid
    }

    /// Runs the full acceptance rules over both endpoints and returns the
    /// accepted pair, or `None` when the pair is incomplete, disabled, or
    /// out of bounds.
    pub fn commit(&self) -> Option<(CalendarDate, CalendarDate)> {
        let start = self.start.value()?;
        let end = self.end.value()?;
        let accepted = validator::validate(
            &start.to_string(),
            &end.to_string(),
            Some(self.disabled_dates.as_slice()),
            self.boundary.as_ref(),
        );
        debug!(%start, %end, %accepted, "range commit");
        accepted.then_some((start, end))
    }
}

impl RangeDateInput {
    fn field_mut(&mut self, endpoint: Endpoint) -> &mut SegmentedDateInput {
        match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        }
    }

    fn activate(&mut self, endpoint: Endpoint) {
        if self.active == Some(endpoint.opposite()) {
            // the cursor left the other endpoint's inputs
            self.field_mut(endpoint.opposite()).blur();
        }
        self.active = Some(endpoint);
    }

    fn reconcile(&mut self, endpoint: Endpoint, change: ValueChange) -> RangeEvent {
        let mut cleared = None;

        if let ValueChange::Committed(value) = change {
            let other = endpoint.opposite();
            let reversed = self.endpoint(other).value().is_some_and(|other_value| {
                match endpoint {
                    Endpoint::Start => value > other_value,
                    Endpoint::End => value < other_value,
                }
            });
            if reversed {
                debug!(%endpoint, %value, "typed value reverses the pair, dropping {other}");
                self.field_mut(other).clear();
                cleared = Some(other);
            }
        }

        RangeEvent {
            endpoint,
            change,
            cleared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FocusCursor;
    use crate::test_utils::{date, dates};

    fn type_str(input: &mut RangeDateInput, text: &str) -> Option<RangeEvent> {
        let mut last = None;
        for ch in text.chars() {
            last = input.type_char(ch);
        }
        last
    }

    fn filled(start: &str, end: &str) -> RangeDateInput {
        let mut input = RangeDateInput::new();
        input.set_value(Endpoint::Start, start);
        input.set_value(Endpoint::End, end);
        input
    }

    #[test]
    fn test_typing_defaults_to_start_endpoint() {
        let mut input = RangeDateInput::new();
        let event = type_str(&mut input, "15082023");

        assert_eq!(input.active(), Some(Endpoint::Start));
        assert_eq!(
            event,
            Some(RangeEvent {
                endpoint: Endpoint::Start,
                change: ValueChange::Committed(date("2023-08-15")),
                cleared: None,
            })
        );
    }

    #[test]
    fn test_both_endpoints_fill_independently() {
        let mut input = RangeDateInput::new();
        type_str(&mut input, "01042023");

        input.focus_segment(Endpoint::End, SegmentKind::Day);
        let event = type_str(&mut input, "25042023");

        assert_eq!(event.and_then(|e| match e.change {
            ValueChange::Committed(d) => Some(d),
            ValueChange::Cleared => None,
        }), Some(date("2023-04-25")));

        let selection = input.selection();
        assert_eq!(selection.start(), Some(date("2023-04-01")));
        assert_eq!(selection.end(), Some(date("2023-04-25")));
    }

    #[test]
    fn test_end_before_start_clears_start() {
        let mut input = RangeDateInput::new();
        input.set_value(Endpoint::Start, "2023-04-20");

        input.focus_segment(Endpoint::End, SegmentKind::Day);
        let event = type_str(&mut input, "10042023");

        assert_eq!(
            event.and_then(|e| e.cleared),
            Some(Endpoint::Start),
            "typed end predating the start must drop the start"
        );
        assert!(input.endpoint(Endpoint::Start).parts().is_empty());
        assert_eq!(input.selection().end(), Some(date("2023-04-10")));
    }

    #[test]
    fn test_start_after_end_clears_end() {
        let mut input = RangeDateInput::new();
        input.set_value(Endpoint::End, "2023-04-10");

        input.focus_segment(Endpoint::Start, SegmentKind::Day);
        let event = type_str(&mut input, "20042023");

        assert_eq!(event.and_then(|e| e.cleared), Some(Endpoint::End));
        assert_eq!(input.selection().start(), Some(date("2023-04-20")));
        assert_eq!(input.selection().end(), None);
    }

    #[test]
    fn test_equal_endpoints_are_kept() {
        let mut input = RangeDateInput::new();
        input.set_value(Endpoint::Start, "2023-04-10");

        input.focus_segment(Endpoint::End, SegmentKind::Day);
        let event = type_str(&mut input, "10042023");

        assert_eq!(event.and_then(|e| e.cleared), None);
        assert!(input.selection().is_complete());
    }

    #[test]
    fn test_switching_endpoints_blurs_the_previous_one() {
        let mut input = RangeDateInput::new();
        input.focus_segment(Endpoint::Start, SegmentKind::Year);
        assert_eq!(
            input.endpoint(Endpoint::Start).focus(),
            FocusCursor::Year
        );

        input.focus_segment(Endpoint::End, SegmentKind::Day);
        assert_eq!(input.endpoint(Endpoint::Start).focus(), FocusCursor::None);
        assert_eq!(input.active(), Some(Endpoint::End));
    }

    #[test]
    fn test_backspace_requires_an_active_endpoint() {
        let mut input = RangeDateInput::new();
        assert_eq!(input.press_backspace(), None);

        input.focus_segment(Endpoint::End, SegmentKind::Month);
        input.press_backspace();
        assert_eq!(
            input.endpoint(Endpoint::End).focus(),
            FocusCursor::Day,
            "backspace on the empty month retreats inside the end endpoint"
        );
    }

    #[test]
    fn test_blur_segment_pads_endpoint_field() {
        let mut input = RangeDateInput::new();
        input.input(Endpoint::Start, SegmentKind::Year, "2023");
        input.input(Endpoint::Start, SegmentKind::Month, "04");
        input.input(Endpoint::Start, SegmentKind::Day, "3");

        let event = input.blur_segment(Endpoint::Start, SegmentKind::Day);
        assert_eq!(
            event.map(|e| e.change),
            Some(ValueChange::Committed(date("2023-04-03")))
        );
    }

    #[test]
    fn test_commit_requires_both_endpoints() {
        let mut input = RangeDateInput::new();
        input.set_value(Endpoint::Start, "2023-04-01");
        assert_eq!(input.commit(), None);

        input.set_value(Endpoint::End, "2023-04-25");
        assert_eq!(
            input.commit(),
            Some((date("2023-04-01"), date("2023-04-25")))
        );
    }

    #[test]
    fn test_commit_honors_disabled_dates() {
        let mut input = RangeDateInput::with_rules(dates(&["2023-04-15"]), None);
        input.set_value(Endpoint::Start, "2023-04-01");
        input.set_value(Endpoint::End, "2023-04-15");
        assert_eq!(input.commit(), None);

        input.set_value(Endpoint::End, "2023-04-25");
        assert!(input.commit().is_some());
    }

    #[test]
    fn test_commit_honors_boundary() {
        let boundary: Boundary = [
            Some("2023-03-25".to_owned()),
            Some("2023-04-23".to_owned()),
        ];
        let input = {
            let mut i = RangeDateInput::with_rules(Vec::new(), Some(boundary));
            i.set_value(Endpoint::Start, "2023-04-01");
            i.set_value(Endpoint::End, "2023-04-27");
            i
        };
        assert_eq!(input.commit(), None);
    }

    #[test]
    fn test_commit_rejects_malformed_boundary() {
        let boundary: Boundary = [None, Some("2023-04-23".to_owned())];
        let mut input = RangeDateInput::with_rules(Vec::new(), Some(boundary));
        input.set_value(Endpoint::Start, "2023-04-01");
        input.set_value(Endpoint::End, "2023-04-10");
        assert_eq!(input.commit(), None);
    }

    #[test]
    fn test_composite_blur_reports_validity_of_both() {
        let mut complete = filled("2023-04-01", "2023-04-25");
        assert!(complete.blur());

        let mut half = filled("2023-04-01", "");
        assert!(!half.blur());
        assert_eq!(half.active(), None);
    }
}
