use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    #[error("Sun does not set on {date} at latitude {latitude}")]
    NeverSets { date: time::Date, latitude: f64 },

    #[error("Sun does not rise on {date} at latitude {latitude}")]
    NeverRises { date: time::Date, latitude: f64 },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Sunset instant is outside the supported date range")]
    OutOfRange,

    #[error("No sunset falls on {date} in {timezone}")]
    NoLocalSunset { date: time::Date, timezone: String },

    #[error("Solar position computation failed: {0}")]
    Computation(String),
}
