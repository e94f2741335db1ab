//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LUMINES_SEED` | 1 | Piece pattern seed |
//! | `LUMINES_THEME` | 0 | Starting theme (any integer, wrapped) |
//! | `LUMINES_LOG_LEVEL` | info | off, error, warn, info, debug, trace |
//! | `LUMINES_LOG_PATH` | unset | Log file; no logging when unset or empty |
//! | `LUMINES_SLAM_RELEASE_MS` | 350 | Synthesized slam release timeout |

use std::path::PathBuf;

use log::LevelFilter;
use thiserror::Error;

use crate::input::DEFAULT_SLAM_RELEASE_TIMEOUT_MS;

pub const ENV_SEED: &str = "LUMINES_SEED";
pub const ENV_THEME: &str = "LUMINES_THEME";
pub const ENV_LOG_LEVEL: &str = "LUMINES_LOG_LEVEL";
pub const ENV_LOG_PATH: &str = "LUMINES_LOG_PATH";
pub const ENV_SLAM_RELEASE_MS: &str = "LUMINES_SLAM_RELEASE_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected {expected}, got {value:?}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub theme: i64,
    pub log_level: LevelFilter,
    pub log_path: Option<PathBuf>,
    pub slam_release_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            theme: 0,
            log_level: LevelFilter::Info,
            log_path: None,
            slam_release_ms: DEFAULT_SLAM_RELEASE_TIMEOUT_MS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `None` and empty values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let seed = match get(ENV_SEED) {
            Some(v) => parse_number(ENV_SEED, v, "an unsigned 32-bit integer")?,
            None => defaults.seed,
        };
        let theme = match get(ENV_THEME) {
            Some(v) => parse_number(ENV_THEME, v, "an integer")?,
            None => defaults.theme,
        };
        let log_level = match get(ENV_LOG_LEVEL) {
            Some(v) => parse_level(v)?,
            None => defaults.log_level,
        };
        let slam_release_ms = match get(ENV_SLAM_RELEASE_MS) {
            Some(v) => parse_number(ENV_SLAM_RELEASE_MS, v, "milliseconds as an unsigned integer")?,
            None => defaults.slam_release_ms,
        };
        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        Ok(Self {
            seed,
            theme,
            log_level,
            log_path,
            slam_release_ms,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            var,
            value,
            expected,
        })
}

fn parse_level(value: String) -> Result<LevelFilter, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::InvalidValue {
            var: ENV_LOG_LEVEL,
            value,
            expected: "off, error, warn, info, debug or trace",
        }),
    }
}
