//! Authentication strategies for the Zendesk API SDK.
//!
//! This module defines the [`AuthStrategy`] capability and the strategies
//! Zendesk supports out of the box:
//!
//! - [`BasicAuth`]: username + password over the Basic scheme
//! - [`ApiTokenAuth`]: agent email + API token (`{email}/token:{token}`)
//! - [`OAuthTokenAuth`]: OAuth access token as a Bearer header
//!
//! # Overview
//!
//! The dispatcher hands each draft request to the configured strategy as the
//! final step before sending it. The strategy consumes the builder and
//! returns it with credentials attached; it never mutates shared state. A
//! `reqwest::RequestBuilder` carries both the draft request and its
//! per-request transport options, so a strategy can adjust either.
//!
//! # Failure
//!
//! A strategy that cannot produce valid credentials returns [`AuthError`].
//! The error propagates unmodified to the caller of
//! [`send`](crate::clients::HttpClient::send); the request is never
//! dispatched and never retried.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::auth::ApiTokenAuth;
//!
//! let auth = ApiTokenAuth::new("agent@example.com", "s3cr3t-token").unwrap();
//! ```

mod error;
mod strategies;

pub use error::AuthError;
pub use strategies::{ApiTokenAuth, BasicAuth, OAuthTokenAuth};

/// A pluggable authentication capability.
///
/// Implementations attach credential material to a draft request: a header
/// for the Basic and Bearer schemes, or any transport-level option reqwest
/// exposes on its builder. The builder is consumed and returned rather than
/// mutated in place.
///
/// # Implementing a custom strategy
///
/// ```rust
/// use zendesk_api::auth::{AuthError, AuthStrategy};
///
/// #[derive(Debug)]
/// struct StaticHeader;
///
/// impl AuthStrategy for StaticHeader {
///     fn prepare_request(
///         &self,
///         request: reqwest::RequestBuilder,
///     ) -> Result<reqwest::RequestBuilder, AuthError> {
///         Ok(request.header("X-On-Behalf-Of", "agent@example.com"))
///     }
/// }
/// ```
pub trait AuthStrategy: std::fmt::Debug + Send + Sync {
    /// Finalizes a draft request with credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when valid credentials cannot be produced; the
    /// dispatcher propagates the error without sending anything.
    fn prepare_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError>;
}
