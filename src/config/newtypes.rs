//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;

/// A validated Zendesk subdomain.
///
/// This newtype ensures the subdomain is non-empty and uses only the
/// characters Zendesk allows (letters, digits, and dashes). The subdomain is
/// the `example` part of `https://example.zendesk.com`.
///
/// # Example
///
/// ```rust
/// use zendesk_api::Subdomain;
///
/// let subdomain = Subdomain::new("my-company").unwrap();
/// assert_eq!(subdomain.as_ref(), "my-company");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subdomain(String);

impl Subdomain {
    /// Creates a new validated subdomain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySubdomain`] if the subdomain is empty, or
    /// [`ConfigError::InvalidSubdomain`] if it contains characters other
    /// than letters, digits, and dashes.
    pub fn new(subdomain: impl Into<String>) -> Result<Self, ConfigError> {
        let subdomain = subdomain.into();
        if subdomain.is_empty() {
            return Err(ConfigError::EmptySubdomain);
        }
        if !subdomain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::InvalidSubdomain { subdomain });
        }
        Ok(Self(subdomain))
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API base URL.
///
/// Overrides the `https://{subdomain}.zendesk.com/api/v2/` base URL derived
/// from the subdomain. Intended for proxies and test servers.
///
/// The stored value always ends with a single `/` so endpoints can be
/// appended directly.
///
/// # Example
///
/// ```rust
/// use zendesk_api::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("http://127.0.0.1:9090/api/v2").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:9090/api/v2/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Creates a new validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL does not start with
    /// `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidApiUrl { url });
        }
        let trimmed = url.trim_end_matches('/');
        Ok(Self(format!("{trimmed}/")))
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
