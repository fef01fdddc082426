mod cell;
mod classify;
mod config;
mod consts;
mod day;
mod interaction;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;

pub use cell::{CellSnapshot, DayCell, DayTraits};
pub use classify::{CalendarView, Classification, DisplayMode, PreviewMark, RangeMark, Segment, classify, segment_of};
pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use day::{CalendarDay, DateError, Moment, days_in_month, is_leap_year};
pub use interaction::{CellEvent, Commit, Interaction, Phase, Transition, replay};
pub use range::{Bounds, Color, DateRange, PreviewRange, Span, normalize};
