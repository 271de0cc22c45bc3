//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://sho.rt"
//! export SHORT_CODE_LENGTH="6"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public origin used in `short_url` (default: derived from the request)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_CODE_LENGTH` - Generated code length (default: 6, range: 4-16)
//! - `CODE_GENERATION_ATTEMPTS` - Random draws per code before lengthening (default: 1000)
//! - `CODE_INSERT_ATTEMPTS` - Store insert retries on collision (default: 8)

use anyhow::Result;
use std::env;

use crate::application::services::CodeSettings;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_GENERATION_ATTEMPTS};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public origin prepended to short codes. When `None`, the origin of each
    /// request is used.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub short_code_length: usize,
    pub code_generation_attempts: usize,
    pub code_insert_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let short_code_length = env::var("SHORT_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let code_generation_attempts = env::var("CODE_GENERATION_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(MAX_GENERATION_ATTEMPTS);

        let code_insert_attempts = env::var("CODE_INSERT_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            short_code_length,
            code_generation_attempts,
            code_insert_attempts,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute http(s) origin
    /// - any code allocation setting is out of range
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

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if !(4..=16).contains(&self.short_code_length) {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between 4 and 16, got {}",
                self.short_code_length
            );
        }

        if self.code_generation_attempts == 0 || self.code_generation_attempts > 100_000 {
            anyhow::bail!(
                "CODE_GENERATION_ATTEMPTS must be between 1 and 100000, got {}",
                self.code_generation_attempts
            );
        }

        if self.code_insert_attempts == 0 || self.code_insert_attempts > 64 {
            anyhow::bail!(
                "CODE_INSERT_ATTEMPTS must be between 1 and 64, got {}",
                self.code_insert_attempts
            );
        }

        Ok(())
    }

    /// Code allocation settings derived from this configuration.
    pub fn code_settings(&self) -> CodeSettings {
        CodeSettings {
            length: self.short_code_length,
            generation_attempts: self.code_generation_attempts,
            insert_attempts: self.code_insert_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from request"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Short code length: {}", self.short_code_length);
        tracing::info!(
            "  Code attempts: {} draws, {} inserts",
            self.code_generation_attempts,
            self.code_insert_attempts
        );
    }
}
