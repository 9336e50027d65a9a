use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Hebrew months in civil (Nisan-first) numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, FromRepr)]
#[repr(u8)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Tevet = 10,
    Shevat = 11,
    Adar = 12,
    #[strum(serialize = "Adar II")]
    AdarII = 13,
}

impl HebrewMonth {
    /// Transliterated name of `month` as it reads in `year`: month 12 is
    /// "Adar I" in a leap year and plain "Adar" otherwise.
    pub fn name(year: i32, month: u8) -> Option<&'static str> {
        let month = Self::from_repr(month)?;
        if month == Self::Adar && crate::is_leap_year(year) {
            return Some("Adar I");
        }
        Some(month.into())
    }
}
