//! Client configuration.

use thiserror::Error;
use url::Url;

/// Base address used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable holding the backend base address.
pub const API_URL_ENV: &str = "ITEMDESK_API_URL";

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base address is not a valid URL.
    #[error("invalid API URL {value:?}: {reason}")]
    InvalidUrl {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The base address does not use http or https.
    #[error("API URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Settings for the resource client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    /// Creates a configuration for the given base address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let value = base_url.trim();
        let parsed = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self { base_url: parsed }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `ITEMDESK_API_URL` is set to an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to
    /// [`DEFAULT_API_URL`] when the variable is unset or blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable holds an invalid URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(API_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the base address.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins `path` onto the base address, keeping any path prefix the
    /// base address carries.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).unwrap_or_else(|_| unreachable!()),
        }
    }
}
