use luach_hebrew::HebrewDate;
use luach_solar::{GeoLocation, SunsetProvider};
use time::{Date, Duration, OffsetDateTime};

use crate::id::{DEFAULT_UID_DOMAIN, EventKind, stable_id};
use crate::CandidateOccurrence;

/// Length of the "day begins" event that starts at sunset.
pub const SUNSET_EVENT_MINUTES: i64 = 15;

/// Default marker prepended to sunset event titles ("beginning of").
pub const DEFAULT_SUNSET_TITLE_PREFIX: &str = "תחילת ";

/// Everything the materializer needs besides the candidate itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EventConfig {
    pub title: String,
    pub create_sunset_event: bool,
    pub location: GeoLocation,
    /// IANA timezone name of `location`.
    pub timezone: String,
    pub sunset_title_prefix: String,
    pub uid_domain: String,
}

impl EventConfig {
    pub fn new(title: impl Into<String>, location: GeoLocation, timezone: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            create_sunset_event: true,
            location,
            timezone: timezone.into(),
            sunset_title_prefix: DEFAULT_SUNSET_TITLE_PREFIX.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
        }
    }

    pub fn sunset_title(&self) -> String {
        format!("{}{}", self.sunset_title_prefix, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllDayEvent {
    pub uid: String,
    pub title: String,
    pub date: Date,
    pub hebrew_date: HebrewDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunsetEvent {
    pub uid: String,
    pub title: String,
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
    pub hebrew_date: HebrewDate,
}

/// The events produced for one valid Hebrew year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrencePair {
    pub all_day: AllDayEvent,
    pub sunset: Option<SunsetEvent>,
}

/// Turns candidates into concrete events.
pub struct Materializer<'a, P> {
    config: &'a EventConfig,
    provider: &'a P,
}

impl<'a, P: SunsetProvider> Materializer<'a, P> {
    pub fn new(config: &'a EventConfig, provider: &'a P) -> Self {
        Self { config, provider }
    }

    pub fn materialize(&self, candidate: &CandidateOccurrence) -> OccurrencePair {
        let all_day = AllDayEvent {
            uid: stable_id(
                EventKind::AllDay,
                candidate,
                &self.config.title,
                &self.config.uid_domain,
            ),
            title: self.config.title.clone(),
            date: candidate.gregorian_date,
            hebrew_date: candidate.hebrew_date,
        };

        let sunset = if self.config.create_sunset_event {
            self.sunset_event(candidate)
        } else {
            None
        };

        OccurrencePair { all_day, sunset }
    }

    /// The Hebrew day starts at the previous evening's sunset. A failed solar
    /// query only drops this event.
    fn sunset_event(&self, candidate: &CandidateOccurrence) -> Option<SunsetEvent> {
        let eve = candidate.gregorian_date.previous_day()?;

        let start = match self
            .provider
            .sunset(&self.config.location, &self.config.timezone, eve)
        {
            Ok(start) => start,
            Err(err) => {
                tracing::warn!(
                    hebrew_year = candidate.hebrew_year(),
                    %eve,
                    error = %err,
                    "sunset event skipped"
                );
                return None;
            }
        };

        Some(SunsetEvent {
            uid: stable_id(
                EventKind::Sunset,
                candidate,
                &self.config.title,
                &self.config.uid_domain,
            ),
            title: self.config.sunset_title(),
            start,
            end: start + Duration::minutes(SUNSET_EVENT_MINUTES),
            hebrew_date: candidate.hebrew_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_solar::SolarError;
    use time::macros::{date, datetime};

    struct FixedSunset(OffsetDateTime);

    impl SunsetProvider for FixedSunset {
        fn sunset(
            &self,
            _location: &GeoLocation,
            _timezone: &str,
            date: Date,
        ) -> Result<OffsetDateTime, SolarError> {
            Ok(self.0.replace_date(date))
        }
    }

    struct PolarNight;

    impl SunsetProvider for PolarNight {
        fn sunset(
            &self,
            location: &GeoLocation,
            _timezone: &str,
            date: Date,
        ) -> Result<OffsetDateTime, SolarError> {
            Err(SolarError::NeverRises {
                date,
                latitude: location.latitude,
            })
        }
    }

    fn candidate() -> CandidateOccurrence {
        CandidateOccurrence {
            hebrew_date: HebrewDate::new(5784, 13, 14).unwrap(),
            target_day: 14,
            gregorian_date: date!(2024 - 03 - 24),
        }
    }

    fn config() -> EventConfig {
        EventConfig::new(
            "Test",
            GeoLocation::new(31.7683, 35.2137, 754.0),
            "Asia/Jerusalem",
        )
    }

    #[test]
    fn test_pair_with_sunset_on_previous_evening() {
        let provider = FixedSunset(datetime!(2000-01-01 17:57 +2));
        let config = config();
        let pair = Materializer::new(&config, &provider).materialize(&candidate());

        assert_eq!(pair.all_day.date, date!(2024 - 03 - 24));
        assert_eq!(pair.all_day.title, "Test");

        let sunset = pair.sunset.unwrap();
        assert_eq!(sunset.start, datetime!(2024-03-23 17:57 +2));
        assert_eq!(sunset.end - sunset.start, Duration::minutes(15));
        assert_eq!(sunset.title, "תחילת Test");
        assert!(sunset.uid.starts_with("sunset-5784-13-14-"));
    }

    #[test]
    fn test_sunset_disabled() {
        let provider = FixedSunset(datetime!(2000-01-01 17:57 +2));
        let mut config = config();
        config.create_sunset_event = false;

        let pair = Materializer::new(&config, &provider).materialize(&candidate());
        assert!(pair.sunset.is_none());
    }

    #[test]
    fn test_solar_failure_keeps_all_day_event() {
        let config = config();
        let pair = Materializer::new(&config, &PolarNight).materialize(&candidate());

        assert!(pair.sunset.is_none());
        assert!(pair.all_day.uid.starts_with("allday-5784-13-14-"));
    }
}
