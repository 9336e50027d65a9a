/// Mean Earth radius in meters, for the horizon dip of elevated observers.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Atmospheric refraction at the horizon plus the solar semidiameter, in
/// degrees (34' + 16').
const STANDARD_DEPRESSION_DEG: f64 = 50.0 / 60.0;

/// Observer position on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Meters above mean sea level.
    pub elevation: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Solar altitude (negated) at which the upper limb touches the apparent
    /// horizon. Elevated observers see past the geometric horizon by
    /// `sqrt(2h/R)` radians.
    pub fn horizon_depression_deg(&self) -> f64 {
        if self.elevation > 0.0 {
            let dip = (2.0 * self.elevation / EARTH_RADIUS_M).sqrt().to_degrees();
            STANDARD_DEPRESSION_DEG + dip
        } else {
            STANDARD_DEPRESSION_DEG
        }
    }
}
