//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://snaplink.db`)
//! - `BASE_URL` - Public base URL used in short links and QR payloads
//!   (default: `http://localhost:3000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 10000, min: 100)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Public base URL, stored without a trailing slash.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub click_queue_capacity: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://snaplink.db".to_string());

        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let click_queue_capacity = env::var("CLICK_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            click_queue_capacity,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `click_queue_capacity` is outside `[100, 1000000]`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite connection string
    /// - `base_url` is not an HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        if self.click_queue_capacity < 100 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 100, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.click_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            database_url: "sqlite://test.db".to_string(),
            base_url: "http://localhost:3000".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            click_queue_capacity: 10_000,
            db_max_connections: 10,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.click_queue_capacity = 50;
        assert!(config.validate().is_err());
        config.click_queue_capacity = 2_000_000;
        assert!(config.validate().is_err());
        config.click_queue_capacity = 10_000;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        for key in [
            "DATABASE_URL",
            "BASE_URL",
            "LISTEN",
            "RUST_LOG",
            "LOG_FORMAT",
            "CLICK_QUEUE_CAPACITY",
            "DB_MAX_CONNECTIONS",
            "DB_CONNECT_TIMEOUT",
        ] {
            env::remove_var(key);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite://snaplink.db");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.click_queue_capacity, 10_000);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.db_connect_timeout, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_base_url_trailing_slash_is_trimmed() {
        env::set_var("BASE_URL", "https://sn.ap/");

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://sn.ap");

        env::remove_var("BASE_URL");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("DATABASE_URL", "sqlite://custom.db");
        env::set_var("LISTEN", "127.0.0.1:8080");
        env::set_var("CLICK_QUEUE_CAPACITY", "500");

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite://custom.db");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.click_queue_capacity, 500);

        env::remove_var("DATABASE_URL");
        env::remove_var("LISTEN");
        env::remove_var("CLICK_QUEUE_CAPACITY");
    }
}
