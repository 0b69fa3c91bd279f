/// Runtime configuration
///
/// Settings come from environment variables, optionally loaded from a
/// `.env` file:
///
/// | Variable | Default |
/// |---|---|
/// | `LOG_LEVEL` | `info` |
/// | `LOG_FORMAT` | `pretty` (or `json`) |
/// | `CAMPUS_DATA` | `./data/campus.json` |
/// | `DISTANCE_SCALE` | `750` |
/// | `ROUTE_STRATEGY` | `dijkstra` |
/// | `ROUTE_ACCESSIBLE_ONLY` | `false` |
/// | `ROUTE_MAX_STEPS` | unset (unlimited) |

use crate::algorithms::{SearchOptions, SearchStrategy};
use crate::tools::DEFAULT_SCALE_FACTOR;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::prelude::*;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Logging already initialized: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub search: SearchConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
    pub accessible_only: bool,
    pub max_steps: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub campus_path: PathBuf,
    pub scale_factor: f64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            campus_path: PathBuf::from("./data/campus.json"),
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl SearchConfig {
    /// Search options for a query
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            accessible_only: self.accessible_only,
            max_steps: self.max_steps,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or(defaults.logging.level),
                format: lookup("LOG_FORMAT").unwrap_or(defaults.logging.format),
            },
            search: SearchConfig {
                strategy: parse_var(&lookup, "ROUTE_STRATEGY")?.unwrap_or(defaults.search.strategy),
                accessible_only: parse_var(&lookup, "ROUTE_ACCESSIBLE_ONLY")?
                    .unwrap_or(defaults.search.accessible_only),
                max_steps: parse_var(&lookup, "ROUTE_MAX_STEPS")?,
            },
            data: DataConfig {
                campus_path: lookup("CAMPUS_DATA")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.data.campus_path),
                scale_factor: parse_var(&lookup, "DISTANCE_SCALE")?
                    .unwrap_or(defaults.data.scale_factor),
            },
        };

        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> ConfigResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                reason: e.to_string(),
                value,
            }),
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> ConfigResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.search.strategy, SearchStrategy::Dijkstra);
        assert!(!config.search.accessible_only);
        assert_eq!(config.search.max_steps, None);
        assert_eq!(config.data.campus_path, PathBuf::from("./data/campus.json"));
        assert_eq!(config.data.scale_factor, 750.0);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_FORMAT", "json"),
            ("ROUTE_STRATEGY", "bfs"),
            ("ROUTE_ACCESSIBLE_ONLY", "true"),
            ("ROUTE_MAX_STEPS", " 500 "),
            ("CAMPUS_DATA", "/srv/maps/fullerton.json"),
            ("DISTANCE_SCALE", "1000"),
        ]))
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.search.strategy, SearchStrategy::Bfs);
        assert_eq!(config.data.scale_factor, 1000.0);

        let options = config.search.options();
        assert!(options.accessible_only);
        assert_eq!(options.max_steps, Some(500));
    }

    #[test]
    fn test_invalid_value() {
        let err = Config::from_lookup(lookup(&[("ROUTE_MAX_STEPS", "lots")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "ROUTE_MAX_STEPS");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {}", other),
        }

        assert!(Config::from_lookup(lookup(&[("ROUTE_STRATEGY", "astar")])).is_err());
    }
}
