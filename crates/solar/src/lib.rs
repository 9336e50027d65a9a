//! Sunset computation for geographic locations.

mod error;
mod location;
mod provider;
mod spa;

pub use error::SolarError;
pub use location::GeoLocation;
pub use provider::{SpaSunset, SunsetProvider};
pub use spa::sunset_minutes_utc;
