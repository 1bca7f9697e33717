//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `S3_BUCKET` - bucket receiving uploaded images
//!
//! ## Optional Variables
//!
//! - `SECRET_TOKEN` - admin secret for mutating endpoints; when unset, every
//!   mutating request is rejected
//! - `BLOGPOST_TABLE` / `PORTFOLIO_TABLE` / `EXPERIENCE_TABLE` - table names
//!   (defaults: `blogpost`, `portfolio`, `experience`)
//! - `S3_PUBLIC_BASE_URL` - URL prefix for stored images (default: the
//!   standard virtual-hosted bucket URL)
//! - `AWS_ENDPOINT_URL` - endpoint override for LocalStack-style setups
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Admin secret for mutating endpoints. `None` disables all mutations.
    pub secret_token: Option<String>,
    pub blogpost_table: String,
    pub portfolio_table: String,
    pub experience_table: String,
    pub s3_bucket: String,
    /// Overrides the URL prefix returned for uploaded images.
    pub s3_public_base_url: Option<String>,
    /// AWS endpoint override for local development (LocalStack etc.).
    pub aws_endpoint_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `S3_BUCKET` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let secret_token = env::var("SECRET_TOKEN").ok().filter(|s| !s.is_empty());

        let blogpost_table =
            env::var("BLOGPOST_TABLE").unwrap_or_else(|_| "blogpost".to_string());
        let portfolio_table =
            env::var("PORTFOLIO_TABLE").unwrap_or_else(|_| "portfolio".to_string());
        let experience_table =
            env::var("EXPERIENCE_TABLE").unwrap_or_else(|_| "experience".to_string());

        let s3_bucket = env::var("S3_BUCKET").context("S3_BUCKET must be set")?;
        let s3_public_base_url = env::var("S3_PUBLIC_BASE_URL").ok().filter(|s| !s.is_empty());
        let aws_endpoint_url = env::var("AWS_ENDPOINT_URL").ok().filter(|s| !s.is_empty());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            secret_token,
            blogpost_table,
            portfolio_table,
            experience_table,
            s3_bucket,
            s3_public_base_url,
            aws_endpoint_url,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - a table name or the bucket name is empty
    pub fn validate(&self) -> Result<()> {
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

        for (name, value) in [
            ("BLOGPOST_TABLE", &self.blogpost_table),
            ("PORTFOLIO_TABLE", &self.portfolio_table),
            ("EXPERIENCE_TABLE", &self.experience_table),
            ("S3_BUCKET", &self.s3_bucket),
        ] {
            if value.is_empty() {
                anyhow::bail!("{name} must not be empty");
            }
        }

        Ok(())
    }

    /// Prints a configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Tables: {}, {}, {}",
            self.blogpost_table,
            self.portfolio_table,
            self.experience_table
        );
        tracing::info!("  Image bucket: {}", self.s3_bucket);

        if let Some(endpoint) = &self.aws_endpoint_url {
            tracing::info!("  AWS endpoint override: {endpoint}");
        }

        if self.secret_token.is_some() {
            tracing::info!("  Admin token: configured");
        } else {
            tracing::warn!("  Admin token: NOT configured, mutating endpoints are disabled");
        }

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

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            secret_token: Some("secret".to_string()),
            blogpost_table: "blogpost".to_string(),
            portfolio_table: "portfolio".to_string(),
            experience_table: "experience".to_string(),
            s3_bucket: "images".to_string(),
            s3_public_base_url: None,
            aws_endpoint_url: None,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.s3_bucket = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("S3_BUCKET", "test-bucket");
            env::remove_var("SECRET_TOKEN");
            env::remove_var("BLOGPOST_TABLE");
            env::remove_var("LISTEN");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.blogpost_table, "blogpost");
        assert_eq!(config.portfolio_table, "portfolio");
        assert_eq!(config.experience_table, "experience");
        assert_eq!(config.s3_bucket, "test-bucket");
        assert!(config.secret_token.is_none());

        // Cleanup
        unsafe {
            env::remove_var("S3_BUCKET");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_bucket() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("S3_BUCKET");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_empty_secret_token_treated_as_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("S3_BUCKET", "test-bucket");
            env::set_var("SECRET_TOKEN", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.secret_token.is_none());

        // Cleanup
        unsafe {
            env::remove_var("S3_BUCKET");
            env::remove_var("SECRET_TOKEN");
        }
    }
}
