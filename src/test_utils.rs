//! Builders shared by the unit tests.

use crate::{CalendarDay, CalendarView, DEFAULT_COLOR, DateRange, DisplayMode, PreviewRange, range::Color};

pub fn day(year: u16, month: u8, day: u8) -> CalendarDay {
    CalendarDay::new(year, month, day).expect("test day should be valid")
}

pub fn range(key: &str, start: Option<CalendarDay>, end: Option<CalendarDay>) -> DateRange {
    DateRange::new(key, start, end)
}

pub fn range_view(ranges: Vec<DateRange>, preview: Option<PreviewRange>) -> CalendarView {
    CalendarView {
        display_mode: DisplayMode::DateRange,
        date: None,
        ranges,
        preview,
        color: Color::from(DEFAULT_COLOR),
    }
}
