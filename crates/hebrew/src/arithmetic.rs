//! Year and month structure, backed by `calendrical_calculations`.
//!
//! Months use the civil numbering: Nisan = 1 through Adar II = 13, while the
//! year itself starts on 1 Tishrei (month 7). This is the "book" numbering of
//! Reingold & Dershowitz, so values pass straight through to [`BookHebrew`].

use calendrical_calculations::hebrew::BookHebrew;
use calendrical_calculations::rata_die::RataDie;

pub const NISAN: u8 = 1;
pub const ELUL: u8 = 6;
pub const TISHREI: u8 = 7;
pub const CHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const ADAR: u8 = 12;
pub const ADAR_II: u8 = 13;

/// A year is leap (13 months) in years 3, 6, 8, 11, 14, 17 and 19 of the
/// 19-year Metonic cycle.
pub fn is_leap_year(year: i32) -> bool {
    BookHebrew::is_hebrew_leap_year(year)
}

pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { ADAR_II } else { ADAR }
}

pub fn days_in_year(year: i32) -> u16 {
    BookHebrew::days_in_book_hebrew_year(year)
}

/// Length of `month` in `year`, or `None` when the month does not exist
/// that year (month 13 outside leap years, or anything past 13).
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > months_in_year(year) {
        return None;
    }

    Some(BookHebrew::last_day_of_book_hebrew_month(year, month))
}

/// Longest length `month` can have in any year; `None` outside 1..=13.
pub fn max_days_in_month(month: u8) -> Option<u8> {
    match month {
        2 | 4 | ELUL | 10 | ADAR_II => Some(29),
        1..=12 => Some(30),
        _ => None,
    }
}

/// R.D. of 1 Tishrei AM 1.
pub(crate) fn epoch() -> i64 {
    BookHebrew::book_hebrew_new_year(1).to_i64_date()
}

/// R.D. of a Hebrew date. The caller guarantees the date is valid.
pub(crate) fn to_fixed(year: i32, month: u8, day: u8) -> i64 {
    BookHebrew::fixed_from_book_hebrew(BookHebrew { year, month, day }).to_i64_date()
}

/// Hebrew `(year, month, day)` containing R.D. `fixed`.
pub(crate) fn from_fixed(fixed: i64) -> (i32, u8, u8) {
    let BookHebrew { year, month, day } = BookHebrew::book_hebrew_from_fixed(RataDie::new(fixed));
    (year, month, day)
}
