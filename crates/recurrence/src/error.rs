use luach_hebrew::CalendarError;
use thiserror::Error;

/// Fatal to a request: the anchor itself could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<CalendarError> for RecurrenceError {
    fn from(err: CalendarError) -> Self {
        RecurrenceError::InvalidDate(err.to_string())
    }
}

/// Why a scanned Hebrew year produced no occurrence. Always recovered by
/// skipping the year.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    #[error("day {day} does not exist in month {month}")]
    MissingDay { month: u8, day: u8 },

    #[error("overflow to 1st of month {month} failed")]
    OverflowFailed { month: u8 },

    #[error("date outside the supported range")]
    OutOfRange,
}
