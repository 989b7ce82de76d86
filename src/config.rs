use dotenv::dotenv;
use log::LevelFilter;
use once_cell::sync::Lazy;
use std::env;

use crate::error::RegistryError;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/test";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,
    pub log_level: String,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, RegistryError> {
        self.log_level
            .parse()
            .map_err(|_| RegistryError::InvalidLogLevel(self.log_level.clone()))
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
