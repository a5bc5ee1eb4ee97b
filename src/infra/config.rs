//! Centralized configuration (environment variables + defaults).
//!
//! A `.env` file, if present, is loaded before reading the process environment.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("expected `postgres` or `memory`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is `Postgres`.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Load the sample contacts when the store starts out empty.
    pub seed_contacts: bool,
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn load() -> ConfigResult<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Reads the process environment only.
    ///
    /// - `STORE_BACKEND`: `postgres` (default) or `memory`
    /// - `DATABASE_URL`: required for `postgres`
    /// - `DB_MAX_CONNECTIONS`: pool size (default: 5)
    /// - `BIND_ADDR`: listen address (default: `0.0.0.0:3000`)
    /// - `SEED_CONTACTS`: `true`/`false` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        let store_backend = parse_var("STORE_BACKEND", StoreBackend::Postgres)?;

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingVar("DATABASE_URL".to_string()));
        }

        let db_max_connections: u32 = parse_var("DB_MAX_CONNECTIONS", 5)?;
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let bind_addr = parse_var("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;
        let seed_contacts = parse_var("SEED_CONTACTS", false)?;

        Ok(Config {
            store_backend,
            database_url,
            db_max_connections,
            bind_addr,
            seed_contacts,
        })
    }

    pub fn database_url(&self) -> ConfigResult<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar("DATABASE_URL".to_string()))
    }
}

fn parse_var<T>(var: &str, default: T) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) if !val.trim().is_empty() => {
            val.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: var.to_string(),
                    reason: format!("{} (got: {})", e, val),
                })
        }
        _ => Ok(default),
    }
}
