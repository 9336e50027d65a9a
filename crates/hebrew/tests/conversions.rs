use luach_hebrew::{CalendarError, HebrewDate, days_in_month, is_leap_year};
use time::Date;
use time::macros::date;

fn hebrew(date: Date) -> (i32, u8, u8) {
    let h = HebrewDate::from_gregorian(date).unwrap();
    (h.year(), h.month(), h.day())
}

#[test]
fn test_known_gregorian_to_hebrew() {
    assert_eq!(hebrew(date!(2024 - 03 - 24)), (5784, 13, 14)); // Purim 5784
    assert_eq!(hebrew(date!(2023 - 09 - 16)), (5784, 7, 1)); // Rosh Hashana 5784
    assert_eq!(hebrew(date!(2024 - 10 - 03)), (5785, 7, 1)); // Rosh Hashana 5785
    assert_eq!(hebrew(date!(2023 - 12 - 08)), (5784, 9, 25)); // Hanukkah
    assert_eq!(hebrew(date!(2025 - 04 - 13)), (5785, 1, 15)); // Pesach 5785
    assert_eq!(hebrew(date!(2000 - 01 - 01)), (5760, 10, 23));
}

#[test]
fn test_known_hebrew_to_gregorian() {
    let rosh_hashana = HebrewDate::new(5786, 7, 1).unwrap();
    assert_eq!(rosh_hashana.to_gregorian().unwrap(), date!(2025 - 09 - 23));

    let purim_katan = HebrewDate::new(5784, 12, 14).unwrap();
    assert_eq!(purim_katan.to_gregorian().unwrap(), date!(2024 - 02 - 23));
}

#[test]
fn test_round_trip_through_gregorian() {
    let mut date = date!(2020 - 01 - 01);
    let end = date!(2030 - 01 - 01);
    while date < end {
        let h = HebrewDate::from_gregorian(date).unwrap();
        assert_eq!(h.to_gregorian().unwrap(), date);
        assert_eq!(HebrewDate::new(h.year(), h.month(), h.day()).unwrap(), h);
        date = date.next_day().unwrap();
    }
}

#[test]
fn test_leap_years_have_thirteen_months() {
    for year in 5700..5900 {
        assert_eq!(days_in_month(year, 13).is_some(), is_leap_year(year));
    }
}

#[test]
fn test_day_overflow_is_rejected() {
    assert_eq!(
        HebrewDate::new(5785, 12, 30),
        Err(CalendarError::InvalidDay {
            year: 5785,
            month: 12,
            day: 30
        })
    );
    assert!(matches!(
        HebrewDate::new(5785, 14, 1),
        Err(CalendarError::InvalidMonth { .. })
    ));
    assert!(matches!(
        HebrewDate::new(5785, 1, 0),
        Err(CalendarError::InvalidDay { .. })
    ));
}
