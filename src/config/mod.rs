//! Configuration types for the Zendesk API SDK.
//!
//! This module provides the core configuration types used to initialize the
//! SDK for API communication with Zendesk.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ZendeskConfig`]: The main configuration struct holding all SDK settings
//! - [`ZendeskConfigBuilder`]: A builder for constructing [`ZendeskConfig`] instances
//! - [`Subdomain`]: A validated Zendesk subdomain
//! - [`ApiBaseUrl`]: A validated base URL override for proxies and test servers
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{Subdomain, ZendeskConfig};
//!
//! let config = ZendeskConfig::builder()
//!     .subdomain(Subdomain::new("my-company").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url(), "https://my-company.zendesk.com/api/v2/");
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, Subdomain};

use crate::error::ConfigError;

/// Configuration for the Zendesk API SDK.
///
/// Holds the target account (subdomain or explicit base URL) and optional
/// client identification settings.
///
/// # Thread Safety
///
/// `ZendeskConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use zendesk_api::{ApiBaseUrl, ZendeskConfig};
///
/// // Point the client at a local test server instead of zendesk.com
/// let config = ZendeskConfig::builder()
///     .api_url(ApiBaseUrl::new("http://127.0.0.1:9090/api/v2").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ZendeskConfig {
    subdomain: Option<Subdomain>,
    api_url: Option<ApiBaseUrl>,
    user_agent_prefix: Option<String>,
}

impl ZendeskConfig {
    /// Creates a new builder for constructing a `ZendeskConfig`.
    #[must_use]
    pub fn builder() -> ZendeskConfigBuilder {
        ZendeskConfigBuilder::default()
    }

    /// Returns the subdomain, if configured.
    #[must_use]
    pub const fn subdomain(&self) -> Option<&Subdomain> {
        self.subdomain.as_ref()
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_url(&self) -> Option<&ApiBaseUrl> {
        self.api_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the API base URL all endpoints are resolved against.
    ///
    /// Uses the explicit [`ApiBaseUrl`] override when present, otherwise
    /// `https://{subdomain}.zendesk.com/api/v2/`. Always ends with `/`.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.api_url.as_ref().map_or_else(
            || {
                let subdomain = self
                    .subdomain
                    .as_ref()
                    .map_or("", std::convert::AsRef::as_ref);
                format!("https://{subdomain}.zendesk.com/api/v2/")
            },
            |url| url.as_ref().to_string(),
        )
    }
}

// Verify ZendeskConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZendeskConfig>();
};

/// Builder for constructing [`ZendeskConfig`] instances.
///
/// Either `subdomain` or `api_url` must be set before building; all other
/// fields are optional.
///
/// # Example
///
/// ```rust
/// use zendesk_api::{Subdomain, ZendeskConfig};
///
/// let config = ZendeskConfig::builder()
///     .subdomain(Subdomain::new("my-company").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ZendeskConfigBuilder {
    subdomain: Option<Subdomain>,
    api_url: Option<ApiBaseUrl>,
    user_agent_prefix: Option<String>,
}

impl ZendeskConfigBuilder {
    /// Sets the Zendesk subdomain.
    #[must_use]
    pub fn subdomain(mut self, subdomain: Subdomain) -> Self {
        self.subdomain = Some(subdomain);
        self
    }

    /// Sets an explicit API base URL, overriding the subdomain-derived one.
    #[must_use]
    pub fn api_url(mut self, api_url: ApiBaseUrl) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ZendeskConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when neither
    /// `subdomain` nor `api_url` was set.
    pub fn build(self) -> Result<ZendeskConfig, ConfigError> {
        if self.subdomain.is_none() && self.api_url.is_none() {
            return Err(ConfigError::MissingRequiredField { field: "subdomain" });
        }

        Ok(ZendeskConfig {
            subdomain: self.subdomain,
            api_url: self.api_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
