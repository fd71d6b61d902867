//! Response envelope and per-call diagnostics.
//!
//! This module provides the [`ApiResponse`] envelope returned by every
//! successful dispatch and the [`DebugRecord`] snapshot bundled with it.

use std::collections::HashMap;

/// Diagnostic snapshot of one dispatched request.
///
/// Exactly one record is produced per dispatch, on every exit path: it
/// travels inside the [`ApiResponse`] envelope on success and inside
/// [`ApiResponseError`](crate::clients::ApiResponseError) on failure. When a
/// request fails before it is sent (an authentication error), no record
/// exists — nothing was dispatched.
///
/// Records are per-call values, so concurrent calls on one client never
/// overwrite each other's diagnostics.
#[derive(Clone, Debug, Default)]
pub struct DebugRecord {
    /// The final request headers, after authentication. Sensitive values
    /// (the `Authorization` header) are masked.
    pub request_headers: HashMap<String, String>,
    /// Snapshot of the request body. JSON bodies are recorded verbatim;
    /// multipart and streamed file bodies are recorded as markers since they
    /// cannot be re-read without consuming them.
    pub request_body: Option<String>,
    /// The response status code, if a response was obtained.
    pub response_status: Option<u16>,
    /// The response headers, if a response was obtained. Headers may carry
    /// multiple values.
    pub response_headers: HashMap<String, Vec<String>>,
    /// Description of the error, if the dispatch failed.
    pub error: Option<String>,
}

/// A response from the Zendesk API.
///
/// Bundles the parsed body with the per-call [`DebugRecord`]. The body is
/// passed through without schema validation; callers interpret it.
///
/// # Example
///
/// ```rust,ignore
/// let response = client.organizations().find(123, &Default::default()).await?;
/// println!("status: {}", response.status);
/// println!("name: {}", response.body["organization"]["name"]);
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body parsed as JSON (`Null` when the body was empty).
    pub body: serde_json::Value,
    /// Diagnostics for this call.
    pub debug: DebugRecord,
}

impl ApiResponse {
    /// Creates a new response envelope.
    #[must_use]
    pub const fn new(status: u16, body: serde_json::Value, debug: DebugRecord) -> Self {
        Self {
            status,
            body,
            debug,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the URL of the next page for a paginated collection, if the
    /// body carries one.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.body.get("next_page").and_then(serde_json::Value::as_str)
    }

    /// Returns the URL of the previous page for a paginated collection, if
    /// the body carries one.
    #[must_use]
    pub fn previous_page(&self) -> Option<&str> {
        self.body
            .get("previous_page")
            .and_then(serde_json::Value::as_str)
    }

    /// Returns the total record count for a paginated collection, if the
    /// body carries one.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        self.body.get("count").and_then(serde_json::Value::as_u64)
    }
}
