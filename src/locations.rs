//! Named places a calendar can be generated for.

use luach_solar::GeoLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time_tz::timezones;

/// Fallback for unknown location names.
pub const DEFAULT_LOCATION: &str = "Jerusalem";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Location '{name}' has unknown timezone '{timezone}'")]
    UnknownTimezone { name: String, timezone: String },

    #[error("Location '{name}' has coordinates out of range")]
    InvalidCoordinates { name: String },

    #[error("Location name must not be empty")]
    EmptyName,

    #[error("Default location '{0}' is not a known location")]
    UnknownDefault(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level.
    #[serde(default)]
    pub elevation: f64,
    /// IANA timezone name.
    pub timezone: String,
}

impl LocationEntry {
    fn builtin(name: &str, latitude: f64, longitude: f64, elevation: f64, timezone: &str) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            elevation,
            timezone: timezone.to_string(),
        }
    }

    pub fn geo(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude, self.elevation)
    }

    pub fn check(&self) -> Result<(), LocationError> {
        if self.name.trim().is_empty() {
            return Err(LocationError::EmptyName);
        }
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LocationError::InvalidCoordinates {
                name: self.name.clone(),
            });
        }
        if timezones::get_by_name(&self.timezone).is_none() {
            return Err(LocationError::UnknownTimezone {
                name: self.name.clone(),
                timezone: self.timezone.clone(),
            });
        }
        Ok(())
    }
}

/// Alternative names resolving to a registry entry.
const ALIASES: &[(&str, &str)] = &[("Israel", "Jerusalem")];

fn builtin_entries() -> Vec<LocationEntry> {
    const ISRAEL: &str = "Asia/Jerusalem";

    vec![
        LocationEntry::builtin("Jerusalem", 31.7683, 35.2137, 754.0, ISRAEL),
        LocationEntry::builtin("Tel Aviv", 32.0853, 34.7818, 5.0, ISRAEL),
        LocationEntry::builtin("Haifa", 32.7940, 34.9896, 30.0, ISRAEL),
        LocationEntry::builtin("Rishon LeZion", 31.9730, 34.7925, 40.0, ISRAEL),
        LocationEntry::builtin("Petah Tikva", 32.0840, 34.8878, 40.0, ISRAEL),
        LocationEntry::builtin("Ashdod", 31.8014, 34.6435, 25.0, ISRAEL),
        LocationEntry::builtin("Netanya", 32.3215, 34.8532, 30.0, ISRAEL),
        LocationEntry::builtin("Beersheba", 31.2520, 34.7915, 280.0, ISRAEL),
        LocationEntry::builtin("Bnei Brak", 32.0807, 34.8338, 30.0, ISRAEL),
        LocationEntry::builtin("Holon", 32.0158, 34.7874, 35.0, ISRAEL),
        LocationEntry::builtin("Ramat Gan", 32.0684, 34.8248, 40.0, ISRAEL),
        LocationEntry::builtin("Rehovot", 31.8928, 34.8113, 60.0, ISRAEL),
        LocationEntry::builtin("Ashkelon", 31.6688, 34.5743, 30.0, ISRAEL),
        LocationEntry::builtin("Modiin", 31.8980, 35.0104, 270.0, ISRAEL),
        LocationEntry::builtin("Beit Shemesh", 31.7470, 34.9881, 300.0, ISRAEL),
        // Below sea level; no horizon dip applies.
        LocationEntry::builtin("Tiberias", 32.7922, 35.5312, -200.0, ISRAEL),
        LocationEntry::builtin("Safed", 32.9646, 35.4960, 900.0, ISRAEL),
        LocationEntry::builtin("Eilat", 29.5577, 34.9519, 10.0, ISRAEL),
        LocationEntry::builtin("Kfar Saba", 32.1782, 34.9076, 45.0, ISRAEL),
        LocationEntry::builtin("Ra'anana", 32.1848, 34.8713, 50.0, ISRAEL),
        LocationEntry::builtin("New York", 40.7128, -74.0060, 10.0, "America/New_York"),
        LocationEntry::builtin("Los Angeles", 34.0522, -118.2437, 90.0, "America/Los_Angeles"),
        LocationEntry::builtin("Miami", 25.7617, -80.1918, 2.0, "America/New_York"),
        LocationEntry::builtin("Chicago", 41.8781, -87.6298, 180.0, "America/Chicago"),
        LocationEntry::builtin("London", 51.5074, -0.1278, 11.0, "Europe/London"),
        LocationEntry::builtin("Paris", 48.8566, 2.3522, 35.0, "Europe/Paris"),
        LocationEntry::builtin("Antwerp", 51.2194, 4.4025, 10.0, "Europe/Brussels"),
        LocationEntry::builtin(
            "Buenos Aires",
            -34.6037,
            -58.3816,
            25.0,
            "America/Argentina/Buenos_Aires",
        ),
        LocationEntry::builtin("Toronto", 43.6532, -79.3832, 76.0, "America/Toronto"),
        LocationEntry::builtin("Montreal", 45.5017, -73.5673, 36.0, "America/Toronto"),
        LocationEntry::builtin("Moscow", 55.7558, 37.6173, 156.0, "Europe/Moscow"),
        LocationEntry::builtin("Melbourne", -37.8136, 144.9631, 31.0, "Australia/Melbourne"),
        LocationEntry::builtin("Sydney", -33.8688, 151.2093, 58.0, "Australia/Sydney"),
        LocationEntry::builtin("Johannesburg", -26.2041, 28.0473, 1753.0, "Africa/Johannesburg"),
        LocationEntry::builtin("Sao Paulo", -23.5505, -46.6333, 760.0, "America/Sao_Paulo"),
    ]
}

/// Immutable name-to-place mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    entries: Vec<LocationEntry>,
    default_index: usize,
}

impl LocationRegistry {
    /// Built-in places only, defaulting to Jerusalem.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
            default_index: 0,
        }
    }

    /// Built-ins with `overrides` applied: an entry replaces the built-in of
    /// the same name, or is appended.
    pub fn new(overrides: &[LocationEntry], default_location: &str) -> Result<Self, LocationError> {
        let mut entries = builtin_entries();

        for entry in overrides {
            entry.check()?;
            match entries.iter_mut().find(|e| e.name == entry.name) {
                Some(existing) => *existing = entry.clone(),
                None => entries.push(entry.clone()),
            }
        }

        let default_index = entries
            .iter()
            .position(|e| e.name == default_location)
            .ok_or_else(|| LocationError::UnknownDefault(default_location.to_string()))?;

        Ok(Self {
            entries,
            default_index,
        })
    }

    pub fn from_config(config: &crate::config::Config) -> Result<Self, LocationError> {
        Self::new(&config.locations, &config.calendar.default_location)
    }

    fn find(&self, name: &str) -> Option<&LocationEntry> {
        let name = ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map_or(name, |(_, target)| *target);

        self.entries.iter().find(|e| e.name == name)
    }

    /// Entry for `name`, or the default location when the name is unknown.
    pub fn resolve(&self, name: &str) -> &LocationEntry {
        match self.find(name.trim()) {
            Some(entry) => entry,
            None => {
                let fallback = self.default_location();
                tracing::debug!(requested = name, fallback = %fallback.name, "unknown location");
                fallback
            }
        }
    }

    pub fn default_location(&self) -> &LocationEntry {
        &self.entries[self.default_index]
    }

    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }
}
