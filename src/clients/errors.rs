//! Dispatch error types for the Zendesk API SDK.
//!
//! This module contains the error types produced while building and
//! dispatching requests:
//!
//! - [`ApiResponseError`]: transport faults and non-2xx HTTP responses
//! - [`InvalidRequestError`]: request options that cannot become a body
//!
//! # Example
//!
//! ```rust,ignore
//! use zendesk_api::Error;
//!
//! match client.get("organizations.json", HashMap::new()).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(Error::ApiResponse(e)) => {
//!         println!("API failure: {} (status {:?})", e, e.status);
//!         println!("debug: {:?}", e.debug);
//!     }
//!     Err(e) => println!("other failure: {e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::DebugRecord;

/// Error returned when a dispatched request fails.
///
/// Covers both transport-level faults (connection refused, TLS failure) and
/// non-2xx HTTP responses. The original cause, when one exists, is preserved
/// as the error source; the per-call [`DebugRecord`] carries the final
/// request headers plus whatever response details were obtained before the
/// failure.
///
/// This error is never retried by the SDK; retry policy is a caller concern.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiResponseError {
    /// Human-readable description of the failure.
    pub message: String,
    /// The HTTP status code, when a response was obtained.
    pub status: Option<u16>,
    /// Diagnostics captured for this call.
    pub debug: Box<DebugRecord>,
    /// The underlying cause, when the failure originated below this SDK.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ApiResponseError {
    /// Creates an error for a non-2xx HTTP response.
    #[must_use]
    pub fn http(status: u16, message: String, debug: DebugRecord) -> Self {
        Self {
            message,
            status: Some(status),
            debug: Box::new(debug),
            source: None,
        }
    }

    /// Creates an error for a transport-level fault.
    #[must_use]
    pub fn transport(source: reqwest::Error, debug: DebugRecord) -> Self {
        Self {
            message: format!("Transport error: {source}"),
            status: source.status().map(|s| s.as_u16()),
            debug: Box::new(debug),
            source: Some(Box::new(source)),
        }
    }
}

/// Error returned when request options cannot be turned into a request.
///
/// Raised before any network activity.
#[derive(Debug, Error)]
pub enum InvalidRequestError {
    /// The upload file exists but could not be opened for streaming.
    #[error("Cannot open upload file '{}' for streaming.", path.display())]
    FileUnreadable {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A multipart part declared a content type the transport rejects.
    #[error("Invalid content type '{value}' for multipart part '{name}'.")]
    InvalidPartContentType {
        /// The part's form field name.
        name: String,
        /// The rejected content type value.
        value: String,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiResponseError>();
    assert_send_sync::<InvalidRequestError>();
};
