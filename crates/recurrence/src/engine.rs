use std::collections::BTreeMap;

use luach_hebrew::{ADAR_II, CalendarError, HebrewDate, NISAN, is_leap_year};
use time::Date;

use crate::{RecurrenceAnchor, SkipReason};

/// Number of Hebrew years scanned per anchor unless configured otherwise.
pub const DEFAULT_HORIZON_YEARS: u32 = 100;

/// A Hebrew year that resolved to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateOccurrence {
    /// The Hebrew date actually used; differs from the anchor's day and
    /// policy month when the 30th rolled over.
    pub hebrew_date: HebrewDate,
    pub target_day: u8,
    pub gregorian_date: Date,
}

impl CandidateOccurrence {
    pub fn hebrew_year(&self) -> i32 {
        self.hebrew_date.year()
    }

    pub fn resolved_month(&self) -> u8 {
        self.hebrew_date.month()
    }

    pub fn resolved_day(&self) -> u8 {
        self.hebrew_date.day()
    }

    pub fn rolled_over(&self) -> bool {
        self.hebrew_date.day() != self.target_day
    }
}

/// Outcome of scanning one Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedYear {
    pub hebrew_year: i32,
    pub outcome: Result<CandidateOccurrence, SkipReason>,
}

impl ScannedYear {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn candidate(&self) -> Option<&CandidateOccurrence> {
        self.outcome.as_ref().ok()
    }
}

/// Walks consecutive Hebrew years from an anchor.
#[derive(Debug, Clone, Copy)]
pub struct RecurrenceEngine {
    horizon_years: u32,
}

impl Default for RecurrenceEngine {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_YEARS)
    }
}

impl RecurrenceEngine {
    pub fn new(horizon_years: u32) -> Self {
        Self { horizon_years }
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Scans exactly `horizon_years` years in ascending order, starting at
    /// the anchor's year. Years that cannot produce a date are kept as
    /// skipped entries rather than dropped.
    pub fn generate(&self, anchor: &RecurrenceAnchor) -> Vec<ScannedYear> {
        (0..self.horizon_years)
            .map(|offset| {
                let hebrew_year = anchor.start_hebrew_year + offset as i32;
                let outcome = resolve_year(anchor, hebrew_year);

                if let Err(reason) = &outcome {
                    tracing::debug!(hebrew_year, %reason, "year skipped");
                }

                ScannedYear {
                    hebrew_year,
                    outcome,
                }
            })
            .collect()
    }
}

/// Resolves the anchor against a single Hebrew year.
pub fn resolve_year(
    anchor: &RecurrenceAnchor,
    hebrew_year: i32,
) -> Result<CandidateOccurrence, SkipReason> {
    let month = anchor.month_policy.month_in(hebrew_year);
    let day = anchor.target_day;

    let hebrew_date = match HebrewDate::new(hebrew_year, month, day) {
        Ok(date) => date,
        Err(CalendarError::OutOfRange) => return Err(SkipReason::OutOfRange),
        Err(_) if day == 30 => roll_over(hebrew_year, month)?,
        Err(_) => return Err(SkipReason::MissingDay { month, day }),
    };

    let gregorian_date = hebrew_date
        .to_gregorian()
        .map_err(|_| SkipReason::OutOfRange)?;

    Ok(CandidateOccurrence {
        hebrew_date,
        target_day: day,
        gregorian_date,
    })
}

/// A missing 30th becomes the 1st of the following month. After the last
/// Adar of the year (12 in a regular year, 13 in a leap year) that is Nisan.
fn roll_over(hebrew_year: i32, month: u8) -> Result<HebrewDate, SkipReason> {
    let next = month + 1;
    let next = if next > ADAR_II || (next == ADAR_II && !is_leap_year(hebrew_year)) {
        NISAN
    } else {
        next
    };

    HebrewDate::new(hebrew_year, next, 1).map_err(|_| SkipReason::OverflowFailed { month: next })
}

/// Aggregated view of a scan, for logging and for callers that want to
/// surface skipped years.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub scanned: usize,
    pub valid: usize,
    pub rolled_over: usize,
    pub skipped: BTreeMap<String, usize>,
}

impl GenerationReport {
    pub fn from_scan(scan: &[ScannedYear]) -> Self {
        let mut report = GenerationReport {
            scanned: scan.len(),
            ..Default::default()
        };

        for year in scan {
            match &year.outcome {
                Ok(candidate) => {
                    report.valid += 1;
                    if candidate.rolled_over() {
                        report.rolled_over += 1;
                    }
                }
                Err(reason) => {
                    *report.skipped.entry(reason.to_string()).or_default() += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonthPolicy;

    fn anchor(start: i32, day: u8, policy: MonthPolicy) -> RecurrenceAnchor {
        RecurrenceAnchor {
            start_hebrew_year: start,
            target_day: day,
            month_policy: policy,
        }
    }

    #[test]
    fn test_roll_over_wraps_after_last_adar() {
        // Regular year: 30 Adar -> 1 Nisan.
        assert_eq!(
            roll_over(5785, 12).unwrap(),
            HebrewDate::new(5785, 1, 1).unwrap()
        );
        // Leap year: 30 Adar II -> 1 Nisan.
        assert_eq!(
            roll_over(5784, 13).unwrap(),
            HebrewDate::new(5784, 1, 1).unwrap()
        );
        // 30 Cheshvan -> 1 Kislev.
        assert_eq!(
            roll_over(5784, 8).unwrap(),
            HebrewDate::new(5784, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_missing_day_without_fallback() {
        // Month 13 in a regular year takes the no-fallback path.
        let result = resolve_year(&anchor(5785, 15, MonthPolicy::Fixed(13)), 5785);
        assert_eq!(result, Err(SkipReason::MissingDay { month: 13, day: 15 }));
    }

    #[test]
    fn test_report_counts() {
        let scan = RecurrenceEngine::new(19).generate(&anchor(5780, 30, MonthPolicy::Fixed(8)));
        let report = GenerationReport::from_scan(&scan);
        assert_eq!(report.scanned, 19);
        assert_eq!(report.valid, 19);
        assert!(report.rolled_over > 0);
        assert!(report.skipped.is_empty());
    }
}
