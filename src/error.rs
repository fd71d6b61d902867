//! Error types for the Zendesk API SDK.
//!
//! This module contains the configuration error type and the unified
//! [`Error`] enum that every fallible API operation returns.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. API operations return `Result<T, Error>`; the
//! variants mirror the crate's error taxonomy:
//!
//! - [`Error::ApiResponse`] — transport/HTTP failure, wraps the cause
//! - [`Error::Auth`] — the auth strategy could not produce credentials
//! - [`Error::Route`] — caller error resolving a route
//! - [`Error::InvalidRequest`] — caller error building a request body
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{ConfigError, Subdomain};
//!
//! let result = Subdomain::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySubdomain)));
//! ```

use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::{ApiResponseError, InvalidRequestError};
use crate::rest::RouteError;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Subdomain cannot be empty.
    #[error("Subdomain cannot be empty. Please provide your Zendesk subdomain.")]
    EmptySubdomain,

    /// Subdomain contains characters Zendesk does not allow.
    #[error("Invalid subdomain '{subdomain}'. Expected letters, digits, and dashes only.")]
    InvalidSubdomain {
        /// The invalid subdomain that was provided.
        subdomain: String,
    },

    /// API base URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a URL with scheme (e.g., 'https://example.zendesk.com/api/v2').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Unified error type for all API operations.
///
/// This enum is the crate's whole error surface: nothing else escapes to
/// callers. Use pattern matching to handle specific failure classes.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::Error;
///
/// match client.organizations().find(123, &Default::default()).await {
///     Ok(response) => println!("Body: {}", response.body),
///     Err(Error::ApiResponse(e)) => {
///         println!("API failure ({:?}): {}", e.status, e);
///     }
///     Err(Error::Auth(e)) => println!("Auth failure: {e}"),
///     Err(e) => println!("Caller error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Transport or HTTP failure while dispatching a request.
    #[error(transparent)]
    ApiResponse(#[from] ApiResponseError),

    /// The authentication strategy could not produce valid credentials.
    ///
    /// The request never left the client; nothing was dispatched.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A route could not be resolved from the supplied parameters.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The request options could not be turned into a request body.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};
