//! Configuration management
//!
//! Settings are assembled from built-in defaults overridden by environment
//! variables (`PASTELINK_` prefix, `__` as section separator, e.g.
//! `PASTELINK_SERVER__PORT=9000`). `DATABASE_URL` is honored unprefixed
//! as the conventional override.

use config::{Config, Environment};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::errors::{PastelinkError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// sqlite://, mysql:// or postgres:// URL, or "memory" for the
    /// in-memory backend (tests, throwaway deployments).
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdConfig {
    /// Random identifiers draw their length uniformly from
    /// `min_length..=max_length`.
    pub min_length: usize,
    pub max_length: usize,
    /// Retry budget for random allocation before giving up.
    pub max_attempts: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub id: IdConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")
            .and_then(|b| b.set_default("server.port", 8080))
            .and_then(|b| b.set_default("database.url", "sqlite://pastelink.db"))
            .and_then(|b| b.set_default("id.min_length", 5))
            .and_then(|b| b.set_default("id.max_length", 9))
            .and_then(|b| b.set_default("id.max_attempts", 100))
            .and_then(|b| b.set_default("logging.level", "info"))
            .and_then(|b| b.set_default("logging.format", "text"))
            .map_err(|e| PastelinkError::database_config(e.to_string()))?
            .add_source(Environment::with_prefix("PASTELINK").separator("__"))
            .build()
            .map_err(|e| PastelinkError::database_config(e.to_string()))?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| PastelinkError::database_config(e.to_string()))?;

        if let Ok(url) = std::env::var("DATABASE_URL")
            && !url.is_empty()
        {
            config.database.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.id.min_length == 0 || self.id.min_length > self.id.max_length {
            return Err(PastelinkError::database_config(format!(
                "invalid id length range: {}..={}",
                self.id.min_length, self.id.max_length
            )));
        }
        if self.id.max_attempts == 0 {
            return Err(PastelinkError::database_config(
                "id.max_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::load().unwrap_or_else(|e| {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    })
});

pub fn get_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.id.min_length, 5);
        assert_eq!(config.id.max_length, 9);
        assert_eq!(config.id.max_attempts, 100);
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = AppConfig::load().unwrap();
        config.id.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_length_range() {
        let mut config = AppConfig::load().unwrap();
        config.id.min_length = 10;
        config.id.max_length = 5;
        assert!(config.validate().is_err());
    }
}
