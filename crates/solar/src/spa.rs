//! Sunset from the NREL Solar Position Algorithm (`solar_positioning::spa`).

use solar_positioning::{Horizon, SunriseResult, spa};
use time::Date;

use crate::{GeoLocation, SolarError};

/// Approximate TT - UT1 for the 2020s, in seconds. A few seconds of error
/// here moves sunset by well under a second.
const DELTA_T_SECONDS: f64 = 69.0;

/// Minutes after 00:00 UTC of `date` at which the Sun sets for `location`.
///
/// This is the sunset that falls within the UTC day `date`. For far western
/// longitudes that is the evening of the previous local day; mapping it to a
/// civil date is the caller's job (see [`crate::SpaSunset`]).
pub fn sunset_minutes_utc(location: &GeoLocation, date: Date) -> Result<f64, SolarError> {
    let horizon = Horizon::Custom(-location.horizon_depression_deg());

    let result = spa::sunrise_sunset_utc_for_horizon(
        date.year().into(),
        u8::from(date.month()).into(),
        date.day().into(),
        location.latitude,
        location.longitude,
        DELTA_T_SECONDS,
        horizon,
    )
    .map_err(|e| SolarError::Computation(e.to_string()))?;

    match result {
        SunriseResult::RegularDay { sunset, .. } => Ok(sunset.hours() * 60.0),
        SunriseResult::AllDay { .. } => Err(SolarError::NeverSets {
            date,
            latitude: location.latitude,
        }),
        SunriseResult::AllNight { .. } => Err(SolarError::NeverRises {
            date,
            latitude: location.latitude,
        }),
    }
}
