use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::database::{seed, ActivityStore};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("HOST must be an IP address, got '{0}'")]
    InvalidHost(String),
    #[error(transparent)]
    Seed(#[from] seed::SeedError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub activities_file: Option<PathBuf>,
}

impl Config {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let activities_file = lookup("ACTIVITIES_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
            activities_file,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Fallback address tried when the primary port is taken.
    pub fn fallback_addr(&self) -> Option<SocketAddr> {
        self.port
            .checked_add(1)
            .map(|port| SocketAddr::new(self.host, port))
    }

    pub fn build_store(&self) -> Result<ActivityStore, ConfigError> {
        match &self.activities_file {
            Some(path) => Ok(ActivityStore::from_seed(seed::load_from_file(path)?)),
            None => Ok(ActivityStore::with_default_seed()),
        }
    }
}
