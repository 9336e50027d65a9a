use luach_hebrew::{ADAR, ADAR_II, HebrewDate, gregorian_date, is_leap_year, max_days_in_month};
use time::Date;

use crate::RecurrenceError;

/// How the recurring month is picked in each candidate year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthPolicy {
    /// A month that is not an Adar variant (1-11).
    Fixed(u8),
    /// Always the first Adar (month 12), whatever the year's leap status.
    AdarI,
    /// Adar II (13) in leap years, the single Adar (12) otherwise.
    AdarMain,
}

impl MonthPolicy {
    /// Policy for a month reached by converting a civil date. Month 12 of a
    /// leap year is Adar I; month 12 of a regular year can only have meant
    /// the single Adar.
    pub fn for_observed_month(month: u8, hebrew_year: i32) -> Self {
        match month {
            ADAR if is_leap_year(hebrew_year) => MonthPolicy::AdarI,
            ADAR | ADAR_II => MonthPolicy::AdarMain,
            other => MonthPolicy::Fixed(other),
        }
    }

    /// Policy for a month picked explicitly by the user. Picking 12 always
    /// means Adar I.
    // NOTE: unlike `for_observed_month` there is no leap check here. Keep the
    // two paths separate until product confirms whether they should agree.
    pub fn for_selected_month(month: u8) -> Self {
        match month {
            ADAR => MonthPolicy::AdarI,
            ADAR_II => MonthPolicy::AdarMain,
            other => MonthPolicy::Fixed(other),
        }
    }

    /// Literal month number this policy maps to in `hebrew_year`.
    pub fn month_in(&self, hebrew_year: i32) -> u8 {
        match *self {
            MonthPolicy::Fixed(month) => month,
            MonthPolicy::AdarI => ADAR,
            MonthPolicy::AdarMain if is_leap_year(hebrew_year) => ADAR_II,
            MonthPolicy::AdarMain => ADAR,
        }
    }
}

/// Canonical starting point of a recurrence, produced once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceAnchor {
    pub start_hebrew_year: i32,
    pub target_day: u8,
    pub month_policy: MonthPolicy,
}

/// User input describing the anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorInput {
    /// A civil date. `after_sunset` moves it to the following Hebrew day,
    /// since the evening already belongs to the next day.
    Gregorian {
        year: i32,
        month: u8,
        day: u8,
        after_sunset: bool,
    },
    /// A Hebrew month (1-13) and day (1-30), recurring from the current
    /// Hebrew year.
    Hebrew { month: u8, day: u8 },
}

/// Normalizes `input` into a [`RecurrenceAnchor`]. `today` is the civil date
/// used to pick the starting year in Hebrew mode.
pub fn resolve(input: AnchorInput, today: Date) -> Result<RecurrenceAnchor, RecurrenceError> {
    match input {
        AnchorInput::Gregorian {
            year,
            month,
            day,
            after_sunset,
        } => {
            let civil = gregorian_date(year, month, day)?;
            let mut hebrew = HebrewDate::from_gregorian(civil)?;
            if after_sunset {
                hebrew = hebrew.succ()?;
            }

            tracing::debug!(%civil, %hebrew, after_sunset, "resolved civil anchor");

            Ok(RecurrenceAnchor {
                start_hebrew_year: hebrew.year(),
                target_day: hebrew.day(),
                month_policy: MonthPolicy::for_observed_month(hebrew.month(), hebrew.year()),
            })
        }
        AnchorInput::Hebrew { month, day } => {
            let Some(max_day) = max_days_in_month(month) else {
                return Err(RecurrenceError::InvalidDate(format!(
                    "Hebrew month {month} is out of range (1-13)"
                )));
            };
            if day == 0 || day > max_day {
                return Err(RecurrenceError::InvalidDate(format!(
                    "Hebrew month {month} never has a day {day}"
                )));
            }

            let current = HebrewDate::from_gregorian(today)?;

            Ok(RecurrenceAnchor {
                start_hebrew_year: current.year(),
                target_day: day,
                month_policy: MonthPolicy::for_selected_month(month),
            })
        }
    }
}
