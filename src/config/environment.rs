// ABOUTME: Environment configuration for the recipe REST client and kitchen session
// ABOUTME: Reads variables with defaults, parses numbers with context, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use anyhow::{bail, Context, Result};
use kitchen_core::catalog::DEFAULT_ITEMS_PER_PAGE;
use std::env;
use std::error::Error as StdError;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Backend base URL used when `RECIPE_API_BASE` is unset
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL, without trailing slash
    pub api_base: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Fridge page size
    pub items_per_page: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or validation fails
    pub fn from_env() -> Result<Self> {
        let config = Self {
            api_base: normalize_base(&env_var_or("RECIPE_API_BASE", DEFAULT_API_BASE)),
            timeout_secs: parse_env("RECIPE_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                "RECIPE_HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            items_per_page: parse_env("KITCHEN_ITEMS_PER_PAGE", DEFAULT_ITEMS_PER_PAGE)?,
        };

        config.validate()?;
        debug!(api_base = %config.api_base, "Client configuration loaded");
        Ok(config)
    }

    /// Replace the API base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the new URL is invalid
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self> {
        self.api_base = normalize_base(api_base);
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base)
            .with_context(|| format!("Invalid RECIPE_API_BASE '{}'", self.api_base))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("RECIPE_API_BASE must be an http or https URL");
        }
        if self.timeout_secs == 0 {
            bail!("Request timeout must be greater than 0");
        }
        if self.connect_timeout_secs == 0 {
            bail!("Connect timeout must be greater than 0");
        }
        if self.items_per_page == 0 {
            bail!("Items per page must be greater than 0");
        }
        Ok(())
    }

    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.items_per_page, 9);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let no_paging = ClientConfig {
            items_per_page: 0,
            ..ClientConfig::default()
        };
        assert!(no_paging.validate().is_err());

        let no_timeout = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(no_timeout.validate().is_err());

        assert!(ClientConfig::default().with_api_base("not a url").is_err());
        assert!(ClientConfig::default()
            .with_api_base("ftp://example.com/api")
            .is_err());
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let config = ClientConfig::default()
            .with_api_base("http://recipes.local:8080/api/")
            .unwrap();
        assert_eq!(config.api_base, "http://recipes.local:8080/api");
    }
}
