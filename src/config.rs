use std::env;
use std::num::ParseIntError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("LOG_LEVEL is not a valid log filter: {value:?}")]
    InvalidLogLevel {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("{key} must be true/false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

/// Server settings read from the environment (a `.env` file is loaded first by `main`).
///
/// | Variable | Default |
/// |---|---|
/// | `HOST` | `127.0.0.1` |
/// | `PORT` | `8080` |
/// | `LOG_LEVEL` | `info` (ignored when `RUST_LOG` is set) |
/// | `SWAGGER_UI` | `true` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub swagger_ui: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            swagger_ui: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let swagger_ui = match get("SWAGGER_UI") {
            Some(value) => parse_flag("SWAGGER_UI", value)?,
            None => defaults.swagger_ui,
        };

        let log_level = match get("LOG_LEVEL") {
            Some(value) => match EnvFilter::try_new(&value) {
                Ok(_) => value,
                Err(source) => return Err(ConfigError::InvalidLogLevel { value, source }),
            },
            None => defaults.log_level,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            log_level,
            swagger_ui,
        })
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}
