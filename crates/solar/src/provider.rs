use time::{Date, Duration, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

use crate::{GeoLocation, SolarError, spa};

/// Solving for the wrong UTC day is off by at most one day in either
/// direction, so two corrections always suffice.
const MAX_SOLVES: usize = 3;

/// Source of sunset instants for a civil date at a location.
pub trait SunsetProvider {
    /// Sunset on the civil `date`, expressed in `timezone` (IANA name).
    fn sunset(
        &self,
        location: &GeoLocation,
        timezone: &str,
        date: Date,
    ) -> Result<OffsetDateTime, SolarError>;
}

/// [`SunsetProvider`] backed by the NREL Solar Position Algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaSunset;

impl SpaSunset {
    fn solve_utc(location: &GeoLocation, utc_date: Date) -> Result<OffsetDateTime, SolarError> {
        let minutes = spa::sunset_minutes_utc(location, utc_date)?;
        let offset = Duration::seconds((minutes * 60.0).round() as i64);

        utc_date
            .midnight()
            .assume_utc()
            .checked_add(offset)
            .ok_or(SolarError::OutOfRange)
    }
}

impl SunsetProvider for SpaSunset {
    fn sunset(
        &self,
        location: &GeoLocation,
        timezone: &str,
        date: Date,
    ) -> Result<OffsetDateTime, SolarError> {
        let tz = timezones::get_by_name(timezone)
            .ok_or_else(|| SolarError::UnknownTimezone(timezone.to_owned()))?;

        // The solver works in UTC days; step the UTC day until the sunset it
        // returns lands on `date` locally.
        let mut utc_date = date;
        for _ in 0..MAX_SOLVES {
            let instant = Self::solve_utc(location, utc_date)?.to_timezone(tz);
            let drift = (instant.date() - date).whole_days();

            if drift == 0 {
                tracing::trace!(%date, %instant, timezone, "sunset computed");
                return Ok(instant);
            }

            utc_date = utc_date
                .checked_sub(Duration::days(drift))
                .ok_or(SolarError::OutOfRange)?;
        }

        Err(SolarError::NoLocalSunset {
            date,
            timezone: timezone.to_owned(),
        })
    }
}
