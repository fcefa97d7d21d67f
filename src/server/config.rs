use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Insert sample restaurants and pizzas into an empty database on startup.
    pub seed: bool,
}

impl Config {
    /// Reads configuration from the process environment, falling back to defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - Loaded configuration
    /// - `Err(AppError::ConfigErr)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DB_URI")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_var("PORT")?.unwrap_or(DEFAULT_PORT),
            seed: parse_flag("SEED_DATABASE")?,
        })
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

fn parse_flag(name: &str) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        },
        Err(_) => Ok(false),
    }
}
