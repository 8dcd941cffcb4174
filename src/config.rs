//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `SECRET` - Shared secret required to create links. There is no default:
//!   starting without one would leave creation open to anyone.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5050`)
//! - `BASE_URL` - Public base URL short links are composed against
//!   (default: `http://127.0.0.1:5050/`)
//! - `DATABASE_PATH` - Path of the embedded database file
//!   (default: `data/links.redb`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL returned to clients in create responses. Set this to
    /// the externally reachable address when running behind a proxy.
    pub base_url: String,
    /// Shared secret presented by create requests.
    pub secret: String,
    /// Path of the redb database file. Parent directories are created at
    /// startup when missing.
    pub database_path: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let secret = env::var("SECRET").context("SECRET must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5050".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5050/".to_string());
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/links.redb"));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            secret,
            database_path,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an absolute HTTP/HTTPS URL
    /// - `secret` or `database_path` is empty
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate base URL format
        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL must be an absolute URL, got '{}'", self.base_url))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must use the http or https scheme, got '{}'",
                base.scheme()
            );
        }

        // Validate secret
        if self.secret.is_empty() {
            anyhow::bail!("SECRET must not be empty");
        }

        // Validate database path
        if self.database_path.as_os_str().is_empty() {
            anyhow::bail!("DATABASE_PATH must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database path: {}", self.database_path.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:5050".to_string(),
            base_url: "http://127.0.0.1:5050/".to_string(),
            secret: "test-secret".to_string(),
            database_path: PathBuf::from("data/links.redb"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "5050".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:5050".to_string();

        // Test invalid base URL
        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://example.com/".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://sho.rt".to_string();
        assert!(config.validate().is_ok());

        // Test empty secret
        config.secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_secret() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("SECRET");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_applies_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SECRET", "test-secret");
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("DATABASE_PATH");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:5050");
        assert_eq!(config.base_url, "http://127.0.0.1:5050/");
        assert_eq!(config.database_path, PathBuf::from("data/links.redb"));
        assert_eq!(config.log_format, "text");

        // Cleanup
        unsafe {
            env::remove_var("SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SECRET", "override-secret");
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BASE_URL", "https://sho.rt/");
            env::set_var("DATABASE_PATH", "/tmp/test-links.redb");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.secret, "override-secret");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.base_url, "https://sho.rt/");
        assert_eq!(config.database_path, PathBuf::from("/tmp/test-links.redb"));
        assert_eq!(config.log_format, "json");

        // Cleanup
        unsafe {
            env::remove_var("SECRET");
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("DATABASE_PATH");
            env::remove_var("LOG_FORMAT");
        }
    }
}
