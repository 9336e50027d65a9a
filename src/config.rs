use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use luach_recurrence::{
    DEFAULT_HORIZON_YEARS, DEFAULT_SUNSET_TITLE_PREFIX, DEFAULT_UID_DOMAIN,
    ics::DEFAULT_REFRESH_INTERVAL,
};
use serde::Deserialize;
use std::env;

use crate::locations::{DEFAULT_LOCATION, LocationEntry, LocationRegistry};

/// Largest accepted `calendar.horizon_years`.
pub const MAX_HORIZON_YEARS: u32 = 1000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Extra or overriding entries for the location registry.
    #[serde(default)]
    pub locations: Vec<LocationEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
    #[serde(default = "default_location")]
    pub default_location: String,
    #[serde(default = "default_sunset_title_prefix")]
    pub sunset_title_prefix: String,
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
    /// `REFRESH-INTERVAL` advertised by subscription feeds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            horizon_years: default_horizon_years(),
            default_location: default_location(),
            sunset_title_prefix: default_sunset_title_prefix(),
            uid_domain: default_uid_domain(),
            refresh_interval: default_refresh_interval(),
        }
    }
}

fn default_horizon_years() -> u32 {
    DEFAULT_HORIZON_YEARS
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_sunset_title_prefix() -> String {
    DEFAULT_SUNSET_TITLE_PREFIX.to_string()
}

fn default_uid_domain() -> String {
    DEFAULT_UID_DOMAIN.to_string()
}

fn default_refresh_interval() -> String {
    DEFAULT_REFRESH_INTERVAL.to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (LUACH__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file leaves defaults and environment in charge
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("LUACH")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.calendar.horizon_years == 0 || self.calendar.horizon_years > MAX_HORIZON_YEARS {
            return Err(format!(
                "Calendar horizon_years must be between 1 and {MAX_HORIZON_YEARS}"
            ));
        }
        if self.calendar.uid_domain.trim().is_empty() {
            return Err("Calendar uid_domain must not be empty".to_string());
        }

        LocationRegistry::from_config(self).map_err(|e| e.to_string())?;

        Ok(())
    }
}
