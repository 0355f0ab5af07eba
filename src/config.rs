use std::env;

use crate::error::ConfigError;
use crate::handlers::booking::DEFAULT_BOOKING_YEAR;
use crate::notify::SinkKind;

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub booking_year: i32,
    pub sinks: Vec<SinkKind>,
    pub offices_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            booking_year: DEFAULT_BOOKING_YEAR,
            sinks: vec![SinkKind::Console],
            offices_file: None,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let booking_year = match lookup("BOOKING_YEAR") {
            Some(value) => value
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidYear(value.clone()))?,
            None => defaults.booking_year,
        };

        let sinks = match lookup("NOTIFY_SINKS") {
            Some(value) => SinkKind::parse_list(&value)?,
            None => defaults.sinks,
        };

        let offices_file = lookup("OFFICES_FILE")
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty());

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(AppConfig {
            booking_year,
            sinks,
            offices_file,
            log_level,
        })
    }
}
