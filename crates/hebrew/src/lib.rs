//! Hebrew calendar dates and conversion to and from the Gregorian calendar
//! (`time::Date`), on top of `calendrical_calculations`.

mod arithmetic;
mod date;
mod error;
mod month;

pub use arithmetic::{
    ADAR, ADAR_II, CHESHVAN, ELUL, KISLEV, NISAN, TISHREI, days_in_month, days_in_year,
    is_leap_year, max_days_in_month, months_in_year,
};
pub use date::{HebrewDate, gregorian_date};
pub use error::CalendarError;
pub use month::HebrewMonth;
