//! Grid arithmetic behind the calendar picker.
//!
//! Everything here is derived data: grids are regenerated whole on every
//! navigation change, never patched, and no function reads a clock; the
//! caller supplies "today".

use crate::CalendarDate;
use crate::consts::{
    DAYS_PER_WEEK, DECADE_CELLS, DECADE_SPAN, MAX_MONTH, MAX_YEAR, MIN_DAY, MONTHS_PER_YEAR,
    WEEKS_PER_GRID,
};
use crate::prelude::*;
use crate::types::days_in_month;

/// Day-of-week, displayed with the three-letter header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sun")]
    Sunday,
    #[display(fmt = "Mon")]
    Monday,
    #[display(fmt = "Tue")]
    Tuesday,
    #[display(fmt = "Wed")]
    Wednesday,
    #[display(fmt = "Thu")]
    Thursday,
    #[display(fmt = "Fri")]
    Friday,
    #[display(fmt = "Sat")]
    Saturday,
}

impl Weekday {
    const ORDER: [Self; DAYS_PER_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Position with Sunday as zero.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    const fn from_index(index: u8) -> Self {
        Self::ORDER[(index % 7) as usize]
    }
}

/// Gregorian day-of-week (Sakamoto's method).
pub fn weekday_of(date: CalendarDate) -> Weekday {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let year = if date.month() < 3 {
        i32::from(date.year()) - 1
    } else {
        i32::from(date.year())
    };
    let raw = (year + year / 4 - year / 100 + year / 400
        + OFFSETS[(date.month() - 1) as usize]
        + i32::from(date.day()))
        % 7;
    Weekday::from_index(raw as u8)
}

/// The month view: always six rows of seven days, starting on the first
/// `week_start` on or before the 1st of the anchor month. Short months get
/// the same 42 cells as long ones, the spill belonging to the neighbours.
pub fn generate_month_grid(
    anchor: CalendarDate,
    week_start: Weekday,
) -> Vec<[CalendarDate; DAYS_PER_WEEK]> {
    let first = CalendarDate::from_ymd(anchor.year(), anchor.month(), MIN_DAY).unwrap_or(anchor);
    let mut cursor = rewind_to_week_start(first, week_start);

    let mut weeks = Vec::with_capacity(WEEKS_PER_GRID);
    for _ in 0..WEEKS_PER_GRID {
        weeks.push(take_week(&mut cursor));
    }
    weeks
}

/// The single week row containing the anchor date.
pub fn generate_week(anchor: CalendarDate, week_start: Weekday) -> [CalendarDate; DAYS_PER_WEEK] {
    let mut cursor = rewind_to_week_start(anchor, week_start);
    take_week(&mut cursor)
}

/// The year view: one anchor per month of the anchor's year, keeping the
/// anchor's day-of-month clamped to each month's length.
pub fn generate_year_months(anchor: CalendarDate) -> Vec<CalendarDate> {
    let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
    for month in 1..=MAX_MONTH {
        if let Some(cell) = anchored(anchor.year(), month, anchor.day()) {
            months.push(cell);
        }
    }
    months
}

/// The decade view: 12 anchors (the year before the decade floor, the
/// decade itself, and the year after), giving an overflow cell on each end
/// for navigation.
pub fn generate_decade(anchor: CalendarDate) -> Vec<CalendarDate> {
    let floor = decade_floor(anchor.year());
    let first = i32::from(floor) - 1;

    let mut cells = Vec::with_capacity(DECADE_CELLS);
    for offset in 0..DECADE_CELLS as i32 {
        let year = (first + offset).clamp(1, i32::from(MAX_YEAR)) as u16;
        if let Some(cell) = anchored(year, anchor.month(), anchor.day()) {
            cells.push(cell);
        }
    }
    cells
}

/// First and last year of the anchor's decade, e.g. (2020, 2029) for 2023.
pub const fn decade_bounds(anchor: CalendarDate) -> (u16, u16) {
    let floor = decade_floor(anchor.year());
    (floor, floor + DECADE_SPAN - 1)
}

/// True for the overflow cells flanking the decade in [`generate_decade`].
pub const fn is_decade_overflow(cell: CalendarDate, anchor: CalendarDate) -> bool {
    let (begin, end) = decade_bounds(anchor);
    cell.year() < begin || cell.year() > end
}

/// Comparison granularity for [`is_within_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    Day,
    Month,
    Year,
}

/// Inclusive both-sided window check, degrading to one-sided or
/// unrestricted as bounds are absent. Comparison is truncated to `unit`, so
/// any day of April 2023 is "within" an April 2023 bound at month
/// granularity.
pub fn is_within_range(
    day: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
    unit: DateUnit,
) -> bool {
    let value = truncate(day, unit);
    let lower_ok = min.is_none_or(|min| truncate(min, unit) <= value);
    let upper_ok = max.is_none_or(|max| value <= truncate(max, unit));
    lower_ok && upper_ok
}

/// Base rendering variant of a day cell. Other-month spill takes precedence
/// over the today marker, matching the picker's display rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DayVariant {
    #[display(fmt = "default")]
    Default,
    #[display(fmt = "other-month")]
    OtherMonth,
    #[display(fmt = "today")]
    Today,
}

/// Full status of a day cell. `selected` and `disabled` are independent of
/// the variant and of each other: a selected day may simultaneously be
/// disabled. The validator, not the grid, prevents such a selection from
/// committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayStatus {
    pub variant: DayVariant,
    pub selected: bool,
    pub disabled: bool,
}

pub fn day_status(
    day: CalendarDate,
    anchor: CalendarDate,
    today: CalendarDate,
    selected: Option<CalendarDate>,
    disabled_dates: &[String],
) -> DayStatus {
    let variant = if day.month() != anchor.month() {
        DayVariant::OtherMonth
    } else if day == today {
        DayVariant::Today
    } else {
        DayVariant::Default
    };

    let canonical = day.to_string();
    DayStatus {
        variant,
        selected: selected == Some(day),
        disabled: disabled_dates.iter().any(|d| *d == canonical),
    }
}

/// Rendering variant of a month cell in the year view; the selected month
/// wins over the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MonthVariant {
    #[display(fmt = "default")]
    Default,
    #[display(fmt = "current-month")]
    CurrentMonth,
    #[display(fmt = "selected-month")]
    SelectedMonth,
}

pub fn month_status(
    cell: CalendarDate,
    today: CalendarDate,
    selected: Option<CalendarDate>,
) -> MonthVariant {
    let same_month =
        |a: CalendarDate, b: CalendarDate| a.year() == b.year() && a.month() == b.month();

    if selected.is_some_and(|s| same_month(s, cell)) {
        MonthVariant::SelectedMonth
    } else if same_month(today, cell) {
        MonthVariant::CurrentMonth
    } else {
        MonthVariant::Default
    }
}

/// Rendering variant of a year cell in the decade view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum YearVariant {
    #[display(fmt = "default")]
    Default,
    #[display(fmt = "current-year")]
    CurrentYear,
    #[display(fmt = "selected-year")]
    SelectedYear,
}

pub fn year_status(
    cell: CalendarDate,
    today: CalendarDate,
    selected: Option<CalendarDate>,
) -> YearVariant {
    if selected.is_some_and(|s| s.year() == cell.year()) {
        YearVariant::SelectedYear
    } else if today.year() == cell.year() {
        YearVariant::CurrentYear
    } else {
        YearVariant::Default
    }
}

/// Formats a 24-hour `"HH:mm"` string as `"h:mm am"` / `"h:mm pm"`.
/// Anything that does not parse as a time of day renders as `""`.
pub fn to_12_hour_time(time: &str) -> String {
    let Some((hour_s, minute_s)) = time.split_once(':') else {
        return String::new();
    };
    let (Ok(hour), Ok(minute)) = (hour_s.parse::<u8>(), minute_s.parse::<u8>()) else {
        return String::new();
    };
    if hour > 23 || minute > 59 {
        return String::new();
    }

    let meridiem = if hour < 12 { "am" } else { "pm" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {meridiem}")
}

// --- internals ---

/// Reduces a date to a comparison key at `unit` granularity, zeroing the
/// fields finer than `unit` so that, e.g., every day of a month compares
/// equal at [`DateUnit::Month`]. The tuple's lexicographic `Ord` drives the
/// window check in [`is_within_range`].
const fn truncate(date: CalendarDate, unit: DateUnit) -> (u16, u8, u8) {
    match unit {
        DateUnit::Day => (date.year(), date.month(), date.day()),
        DateUnit::Month => (date.year(), date.month(), 0),
        DateUnit::Year => (date.year(), 0, 0),
    }
}

const fn decade_floor(year: u16) -> u16 {
    year / DECADE_SPAN * DECADE_SPAN
}

fn anchored(year: u16, month: u8, day_hint: u8) -> Option<CalendarDate> {
    CalendarDate::from_ymd(year, month, day_hint.min(days_in_month(year, month))).ok()
}

fn rewind_to_week_start(date: CalendarDate, week_start: Weekday) -> CalendarDate {
    let offset = (weekday_of(date).index() + 7 - week_start.index()) % 7;
    let mut cursor = date;
    for _ in 0..offset {
        // saturates at the calendar minimum
        cursor = cursor.pred().unwrap_or(cursor);
    }
    cursor
}

fn take_week(cursor: &mut CalendarDate) -> [CalendarDate; DAYS_PER_WEEK] {
    let mut week = [*cursor; DAYS_PER_WEEK];
    for slot in &mut week {
        *slot = *cursor;
        // saturates at the calendar maximum
        *cursor = cursor.succ().unwrap_or(*cursor);
    }
    week
}
