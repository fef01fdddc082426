use std::{fmt, str::FromStr};

use crate::{
    consts::{
        CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
        GREGORIAN_CYCLE, JANUARY, LAST_SECOND_OF_DAY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
        MIN_DAY, MIN_YEAR, SECONDS_PER_DAY,
    },
    prelude::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// A single calendar day in the proleptic Gregorian calendar.
///
/// Days are totally ordered and carry no time-of-day or timezone. Where a
/// point in time is needed (range boundaries), use [`CalendarDay::start_of_day`]
/// or [`CalendarDay::end_of_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDay {
    year:  u16,
    month: u8,
    day:   u8,
}

impl CalendarDay {
    /// Creates a validated calendar day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` when the component is out of range.
    pub const fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(DateError::InvalidYear(year));
        }
        if month < JANUARY || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(self) -> u16 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    /// Day-of-month number as shown inside a calendar cell ("1", "24", ...).
    pub fn label(self) -> String {
        self.day.to_string()
    }

    /// First instant of this day.
    pub const fn start_of_day(self) -> Moment {
        Moment { day: self, second: 0 }
    }

    /// Last representable instant of this day.
    pub const fn end_of_day(self) -> Moment {
        Moment {
            day:    self,
            second: LAST_SECOND_OF_DAY,
        }
    }

    /// True if `moment` falls on this calendar day.
    pub fn is_same_day(self, moment: Moment) -> bool {
        moment.day == self
    }

    /// True if the start of this day is strictly later than `moment`.
    pub fn is_after(self, moment: Moment) -> bool {
        self.start_of_day() > moment
    }

    /// True if the start of this day is strictly earlier than `moment`.
    pub fn is_before(self, moment: Moment) -> bool {
        self.start_of_day() < moment
    }

    /// The following day, or `None` past the last supported day.
    pub const fn next_day(self) -> Option<Self> {
        let Self { year, month, day } = self;
        if day < days_in_month(year, month) {
            Some(Self { year, month, day: day + 1 })
        } else if month < DECEMBER {
            Some(Self {
                year,
                month: month + 1,
                day: MIN_DAY,
            })
        } else if year < MAX_YEAR {
            Some(Self {
                year:  year + 1,
                month: JANUARY,
                day:   MIN_DAY,
            })
        } else {
            None
        }
    }

    /// The preceding day, or `None` before the first supported day.
    pub const fn previous_day(self) -> Option<Self> {
        let Self { year, month, day } = self;
        if day > MIN_DAY {
            Some(Self { year, month, day: day - 1 })
        } else if month > JANUARY {
            Some(Self {
                year,
                month: month - 1,
                day: days_in_month(year, month - 1),
            })
        } else if year > MIN_YEAR {
            Some(Self {
                year:  year - 1,
                month: DECEMBER,
                day:   DAYS_IN_MONTH[DECEMBER as usize],
            })
        } else {
            None
        }
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.trim()
            .parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDay {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strict ISO 8601: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s)",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A point in time with one-second resolution inside a [`CalendarDay`].
///
/// Ordering is by day, then by second of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment {
    day:    CalendarDay,
    second: u32,
}

impl Moment {
    /// Returns `None` if `second` is not inside a day.
    pub const fn new(day: CalendarDay, second: u32) -> Option<Self> {
        if second < SECONDS_PER_DAY {
            Some(Self { day, second })
        } else {
            None
        }
    }

    pub const fn day(self) -> CalendarDay {
        self.day
    }

    pub const fn second_of_day(self) -> u32 {
        self.second
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.second / 3600;
        let minutes = (self.second % 3600) / 60;
        let seconds = self.second % 60;
        write!(f, "{}T{hours:02}:{minutes:02}:{seconds:02}", self.day)
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
