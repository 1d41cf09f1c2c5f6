use std::net::IpAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Server configuration read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `HOST`, `PORT` or `LOG_LEVEL` could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "HOST".to_string(),
                reason: e.to_string(),
            })?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|level| level.to_lowercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            log_level,
        })
    }
}
