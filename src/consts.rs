/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Number of seconds in a calendar day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Second-of-day used for the end-of-day boundary
pub const LAST_SECOND_OF_DAY: u32 = SECONDS_PER_DAY - 1;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Color used for ranges and the single selected date when none is given
pub const DEFAULT_COLOR: &str = "#3d91ff";
