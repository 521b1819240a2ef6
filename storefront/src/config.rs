//! # Client Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! to fail fast if misconfigured.
//!
//! | Variable                        | Default                       |
//! |---------------------------------|-------------------------------|
//! | `STOREFRONT_API_URL`            | `http://127.0.0.1:8000/api`   |
//! | `STOREFRONT_HTTP_TIMEOUT_SECS`  | `10`                          |
//! | `STOREFRONT_LOCALE`             | `ar`                          |
//! | `STOREFRONT_SESSION_FILE`       | `./storefront-session.json`   |
//! | `STOREFRONT_LOG_DIR`            | `logs`                        |
//! | `STOREFRONT_MAX_UPLOAD_BYTES`   | `2097152` (2 MiB)             |
//! | `RUST_LOG`                      | `storefront=info,warn`        |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::i18n::Locale;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

/// Storefront client configuration
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the marketplace REST API, without trailing slash
    pub api_base_url: String,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// Initial interface language
    pub default_locale: Locale,
    /// Where the bearer token is persisted between runs
    pub session_file: PathBuf,
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// Log filter (e.g. "storefront=debug,info")
    pub log_level: String,
    /// Largest image accepted by the product upload forms
    pub max_upload_bytes: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(10),
            default_locale: Locale::Ar,
            session_file: PathBuf::from("./storefront-session.json"),
            log_dir: PathBuf::from("logs"),
            log_level: "storefront=info,warn".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("STOREFRONT_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let http_timeout = match env::var("STOREFRONT_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse().map_err(|e| {
                AppError::Config(format!("STOREFRONT_HTTP_TIMEOUT_SECS must be a number: {}", e))
            })?),
            Err(_) => defaults.http_timeout,
        };

        let default_locale = match env::var("STOREFRONT_LOCALE") {
            Ok(raw) => raw.parse().map_err(AppError::Config)?,
            Err(_) => defaults.default_locale,
        };

        let max_upload_bytes = match env::var("STOREFRONT_MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::Config(format!("STOREFRONT_MAX_UPLOAD_BYTES must be a number: {}", e))
            })?,
            Err(_) => defaults.max_upload_bytes,
        };

        Ok(Self {
            api_base_url,
            http_timeout,
            default_locale,
            session_file: env::var("STOREFRONT_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            log_dir: env::var("STOREFRONT_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            max_upload_bytes,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "STOREFRONT_API_URL must start with http:// or https:// (got {})",
                self.api_base_url
            )));
        }

        if self.http_timeout.is_zero() || self.http_timeout > Duration::from_secs(120) {
            return Err(AppError::Config(
                "STOREFRONT_HTTP_TIMEOUT_SECS must be between 1 and 120".to_string(),
            ));
        }

        if self.max_upload_bytes == 0 {
            return Err(AppError::Config(
                "STOREFRONT_MAX_UPLOAD_BYTES must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build a config pointing at a specific backend (tests, tooling).
    pub fn with_api_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_locale, Locale::Ar);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = StorefrontConfig::with_api_url("ftp://shop.example.com");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = StorefrontConfig {
            http_timeout: Duration::ZERO,
            ..StorefrontConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_api_url_strips_trailing_slash() {
        let config = StorefrontConfig::with_api_url("https://shop.example.com/api/");
        assert_eq!(config.api_base_url, "https://shop.example.com/api");
    }
}
