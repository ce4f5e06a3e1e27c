//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default timetable location.
const DEFAULT_SCHEDULE_PATH: &str = "schedule.csv";

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub const SCHEDULE_PATH_VAR: &str = "JOURNEY_SCHEDULE_PATH";
pub const LOCATIONS_PATH_VAR: &str = "JOURNEY_LOCATIONS_PATH";
pub const BIND_ADDR_VAR: &str = "JOURNEY_BIND_ADDR";
pub const LAZY_SCHEDULE_VAR: &str = "JOURNEY_LAZY_SCHEDULE";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}: {source}")]
    BindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{var}: expected a boolean, got {value:?}")]
    Flag { var: &'static str, value: String },
}

/// Configuration for the server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Timetable CSV file
    pub schedule_path: PathBuf,
    /// Optional JSON name table; the built-in table is used otherwise
    pub locations_path: Option<PathBuf>,
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Defer loading the timetable until the first query
    pub lazy_schedule: bool,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let schedule_path = lookup(SCHEDULE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SCHEDULE_PATH.to_string())
            .into();

        let locations_path = lookup(LOCATIONS_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let bind_value = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
                source,
            })?;

        let lazy_schedule = match lookup(LAZY_SCHEDULE_VAR) {
            Some(value) => parse_flag(LAZY_SCHEDULE_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            schedule_path,
            locations_path,
            bind_addr,
            lazy_schedule,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            schedule_path: PathBuf::from(DEFAULT_SCHEDULE_PATH),
            locations_path: None,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            lazy_schedule: false,
        }
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag {
            var,
            value: value.to_string(),
        }),
    }
}
