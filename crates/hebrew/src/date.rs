use std::fmt;

use time::{Date, Month};

use crate::arithmetic;
use crate::{CalendarError, HebrewMonth};

/// Julian day number of R.D. 0.
const JULIAN_DAY_OFFSET: i64 = 1_721_425;

/// A validated date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HebrewDate {
    /// Builds a date, rejecting months the year does not have and days past
    /// the month's actual length (e.g. 30 Cheshvan in a regular year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::OutOfRange);
        }

        let Some(last_day) = arithmetic::days_in_month(year, month) else {
            return Err(CalendarError::InvalidMonth { year, month });
        };

        if day == 0 || day > last_day {
            return Err(CalendarError::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    pub fn from_gregorian(date: Date) -> Result<Self, CalendarError> {
        let fixed = i64::from(date.to_julian_day()) - JULIAN_DAY_OFFSET;
        Self::from_rata_die(fixed)
    }

    pub fn to_gregorian(&self) -> Result<Date, CalendarError> {
        let julian_day = i32::try_from(self.rata_die() + JULIAN_DAY_OFFSET)
            .map_err(|_| CalendarError::OutOfRange)?;

        Date::from_julian_day(julian_day).map_err(|_| CalendarError::OutOfRange)
    }

    /// The following Hebrew day.
    pub fn succ(&self) -> Result<Self, CalendarError> {
        Self::from_rata_die(self.rata_die() + 1)
    }

    pub fn rata_die(&self) -> i64 {
        arithmetic::to_fixed(self.year, self.month, self.day)
    }

    fn from_rata_die(fixed: i64) -> Result<Self, CalendarError> {
        if fixed < arithmetic::epoch() {
            return Err(CalendarError::OutOfRange);
        }

        let (year, month, day) = arithmetic::from_fixed(fixed);
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn is_leap_year(&self) -> bool {
        arithmetic::is_leap_year(self.year)
    }

    pub fn month_name(&self) -> &'static str {
        HebrewMonth::name(self.year, self.month).unwrap_or("?")
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Builds a Gregorian date from loose numeric parts, as they arrive from
/// request bodies and query strings.
pub fn gregorian_date(year: i32, month: u8, day: u8) -> Result<Date, CalendarError> {
    let invalid = || CalendarError::InvalidGregorian { year, month, day };

    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_rejects_missing_thirtieth() {
        // Cheshvan 5784 has 29 days.
        assert_eq!(
            HebrewDate::new(5784, 8, 30),
            Err(CalendarError::InvalidDay {
                year: 5784,
                month: 8,
                day: 30
            })
        );
        assert!(HebrewDate::new(5784, 9, 30).is_ok());
    }

    #[test]
    fn test_rejects_adar_ii_in_regular_year() {
        assert_eq!(
            HebrewDate::new(5785, 13, 1),
            Err(CalendarError::InvalidMonth {
                year: 5785,
                month: 13
            })
        );
    }

    #[test]
    fn test_succ_crosses_month_boundary() {
        let last_adar_i = HebrewDate::new(5784, 12, 30).unwrap();
        assert_eq!(last_adar_i.succ().unwrap(), HebrewDate::new(5784, 13, 1).unwrap());

        let last_elul = HebrewDate::new(5784, 6, 29).unwrap();
        assert_eq!(last_elul.succ().unwrap(), HebrewDate::new(5785, 7, 1).unwrap());
    }

    #[test]
    fn test_display() {
        let purim = HebrewDate::from_gregorian(date!(2024 - 03 - 24)).unwrap();
        assert_eq!(purim.to_string(), "14 Adar II 5784");
    }

    #[test]
    fn test_gregorian_date_validation() {
        assert_eq!(gregorian_date(2024, 2, 29).unwrap(), date!(2024 - 02 - 29));
        assert!(gregorian_date(2023, 2, 29).is_err());
        assert!(gregorian_date(2024, 13, 1).is_err());
    }
}
