//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use finder_core::{ApiConfig, DEFAULT_ENDPOINT};
use finder_engine::FetchSettings;
use finder_logging::{LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;
use thiserror::Error;

pub const ENV_APP_ID: &str = "RECIPE_APP_ID";
pub const ENV_APP_KEY: &str = "RECIPE_APP_KEY";
pub const ENV_ENDPOINT: &str = "RECIPE_API_ENDPOINT";
pub const ENV_REQUEST_TIMEOUT: &str = "RECIPE_REQUEST_TIMEOUT_SECS";
pub const ENV_LOG: &str = "RECIPE_LOG";
pub const ENV_LOG_LEVEL: &str = "RECIPE_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "RECIPE_LOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RECIPE_API_ENDPOINT is not a valid url ({value}): {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("RECIPE_LOG must be one of file, terminal, both (got {0:?})")]
    InvalidLogDestination(String),
    #[error("RECIPE_LOG_LEVEL is not a log level (got {0:?})")]
    InvalidLogLevel(String),
    #[error("RECIPE_REQUEST_TIMEOUT_SECS must be a whole number of seconds (got {0:?})")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub fetch: FetchSettings,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Defaults that were applied; logged once the logger is up.
    pub notes: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut notes = Vec::new();
        let mut var_or = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| {
                notes.push(format!("{key} not set, using default: {default:?}"));
                default.to_string()
            })
        };

        let app_id = var_or(ENV_APP_ID, "");
        let app_key = var_or(ENV_APP_KEY, "");
        let endpoint = var_or(ENV_ENDPOINT, DEFAULT_ENDPOINT);
        let destination = var_or(ENV_LOG, "file");
        let level = var_or(ENV_LOG_LEVEL, "info");
        let log_file = var_or(ENV_LOG_FILE, DEFAULT_LOG_FILE);
        let timeout = lookup(ENV_REQUEST_TIMEOUT);

        let api = ApiConfig::new(&endpoint, app_id, app_key).map_err(|source| {
            ConfigError::InvalidEndpoint {
                value: endpoint.clone(),
                source,
            }
        })?;

        let request_timeout = match timeout {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            )),
            None => None,
        };

        Ok(Self {
            api,
            fetch: FetchSettings {
                connect_timeout: None,
                request_timeout,
            },
            log_destination: parse_destination(&destination)?,
            log_level: level
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?,
            log_file: PathBuf::from(log_file),
            notes,
        })
    }
}

fn parse_destination(raw: &str) -> Result<LogDestination, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "file" => Ok(LogDestination::File),
        "terminal" => Ok(LogDestination::Terminal),
        "both" => Ok(LogDestination::Both),
        _ => Err(ConfigError::InvalidLogDestination(raw.to_string())),
    }
}
