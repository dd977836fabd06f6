//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts.
//!
//! ## Required Variables
//!
//! - `SUPABASE_URL` - Base URL of the external data store
//! - `SUPABASE_ANON_KEY` - API key for the external data store
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS allow-list; entries may use
//!   a single `*` wildcard (default: localhost dev server plus Vercel
//!   deployments)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external data store's REST interface.
    pub store_url: String,
    /// API key sent with every store request.
    pub store_api_key: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// CORS origin allow-list. Entries may contain a single `*` wildcard.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required store configuration is missing.
    pub fn from_env() -> Result<Self> {
        let store_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let store_api_key =
            env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_else(|_| default_origins());

        Ok(Self {
            store_url,
            store_api_key,
            listen_addr,
            log_level,
            log_format,
            allowed_origins,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `store_url` is not an http(s) URL
    /// - `store_api_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is missing a port separator
    /// - the origin allow-list is empty
    pub fn validate(&self) -> Result<()> {
        if !self.store_url.starts_with("http://") && !self.store_url.starts_with("https://") {
            anyhow::bail!(
                "SUPABASE_URL must start with 'http://' or 'https://', got '{}'",
                self.store_url
            );
        }

        if self.store_api_key.is_empty() {
            anyhow::bail!("SUPABASE_ANON_KEY must not be empty");
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

        if self.allowed_origins.is_empty() {
            anyhow::bail!("ALLOWED_ORIGINS must list at least one origin");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Store: {}", self.store_url);
        tracing::info!("  Allowed origins: {}", self.allowed_origins.join(", "));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses a comma-separated origin list, skipping empty entries.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Default allow-list: the local dev server plus Vercel deployments of
/// the browser client.
fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://*.vercel.app".to_string(),
    ]
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
