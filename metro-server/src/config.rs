//! Runtime configuration for the metro server.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::Fare;
use crate::planner::DEFAULT_FARE_PER_HOP;

pub const ENV_DATA_DIR: &str = "METRO_DATA_DIR";
pub const ENV_BIND_ADDR: &str = "METRO_BIND_ADDR";
pub const ENV_FARE_PER_HOP: &str = "METRO_FARE_PER_HOP";
pub const ENV_CURRENCY: &str = "METRO_CURRENCY";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that does not parse
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration parameters for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `stations.csv`, `lines.csv` and `edges.csv`.
    pub data_dir: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Flat charge per hop.
    pub fare_per_hop: Fare,

    /// Symbol shown next to fares in the HTML front end.
    pub currency: String,
}

impl AppConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the per-hop fare.
    pub fn with_fare_per_hop(mut self, fare: Fare) -> Self {
        self.fare_per_hop = fare;
        self
    }

    /// Defaults overridden by `METRO_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: ENV_BIND_ADDR,
                    value: addr.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(fare) = lookup(ENV_FARE_PER_HOP) {
            let units: u32 = fare.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: ENV_FARE_PER_HOP,
                    value: fare.clone(),
                    reason: e.to_string(),
                }
            })?;
            config.fare_per_hop = Fare::new(units);
        }

        if let Some(currency) = lookup(ENV_CURRENCY) {
            config.currency = currency;
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            fare_per_hop: DEFAULT_FARE_PER_HOP,
            currency: "₹".to_string(),
        }
    }
}
