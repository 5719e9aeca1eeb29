//! Runtime configuration from the environment
//!
//! # Environment Variables
//!
//! * `DATABASE_URL` - Postgres connection string. Unset means in-memory storage.
//! * `BIND_ADDR` - Listen address (default: 0.0.0.0:8000)
//! * `RUN_MIGRATIONS` - Set to "false" to skip migrations on startup

use std::env;

const ENV_DATABASE_URL: &str = "DATABASE_URL";
const ENV_BIND_ADDR: &str = "BIND_ADDR";
const ENV_RUN_MIGRATIONS: &str = "RUN_MIGRATIONS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub run_migrations: bool,
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(ENV_DATABASE_URL).filter(|s| !s.trim().is_empty());

        let bind_addr = lookup(ENV_BIND_ADDR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let run_migrations = lookup(ENV_RUN_MIGRATIONS)
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            database_url,
            bind_addr,
            run_migrations,
        }
    }
}
