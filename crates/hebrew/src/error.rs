use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Month {month} does not exist in Hebrew year {year}")]
    InvalidMonth { year: i32, month: u8 },

    #[error("Day {day} does not exist in month {month} of Hebrew year {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    #[error("Invalid Gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorian { year: i32, month: u8, day: u8 },

    #[error("Date is outside the supported calendar range")]
    OutOfRange,
}
