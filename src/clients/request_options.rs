//! Request option types for the Zendesk API SDK.
//!
//! This module provides the [`RequestOptions`] bundle and its builder, used
//! by the dispatcher to assemble one HTTP request.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// HTTP methods supported by the Zendesk API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One part of a multipart request body.
///
/// Parts are transport-agnostic descriptions; the dispatcher converts them
/// into the transport's own multipart form so it can generate the
/// boundary-aware `Content-Type` header itself.
///
/// # Example
///
/// ```rust
/// use zendesk_api::MultipartPart;
///
/// let part = MultipartPart::new("uploaded_data", b"hello".to_vec())
///     .file_name("hello.txt")
///     .content_type("text/plain");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartPart {
    /// The form field name.
    pub name: String,
    /// The raw part contents.
    pub contents: Vec<u8>,
    /// Optional file name reported for the part.
    pub file_name: Option<String>,
    /// Optional MIME type of the part contents.
    pub content_type: Option<String>,
}

impl MultipartPart {
    /// Creates a new part with the given field name and contents.
    #[must_use]
    pub fn new(name: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            contents,
            file_name: None,
            content_type: None,
        }
    }

    /// Sets the file name reported for the part.
    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the MIME type of the part contents.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// The options bundle for one dispatched request.
///
/// Defaults: `method` GET, `content_type` `application/json`, no body, no
/// query parameters.
///
/// At most one body source should be set. When several are, the dispatcher
/// applies them in priority order — `multipart`, then `post_fields`, then
/// `file` — so multipart is always authoritative and `post_fields` is never
/// JSON-encoded alongside it.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zendesk_api::{HttpMethod, RequestOptions};
///
/// let options = RequestOptions::builder()
///     .method(HttpMethod::Post)
///     .post_fields(json!({"organization": {"name": "Acme"}}))
///     .build();
///
/// assert_eq!(options.method, HttpMethod::Post);
/// assert_eq!(options.content_type, "application/json");
/// ```
#[derive(Clone, Debug)]
pub struct RequestOptions {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The `Content-Type` header value (ignored for multipart bodies).
    pub content_type: String,
    /// Key/value mapping JSON-encoded into the request body.
    pub post_fields: Option<serde_json::Value>,
    /// Query parameters merged into the URL (last write per key wins).
    pub query_params: Option<HashMap<String, String>>,
    /// Multipart parts passed through to the transport.
    pub multipart: Option<Vec<MultipartPart>>,
    /// Path of a file streamed as the request body.
    pub file: Option<PathBuf>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            content_type: "application/json".to_string(),
            post_fields: None,
            query_params: None,
            multipart: None,
            file: None,
        }
    }
}

impl RequestOptions {
    /// Creates a new builder with the documented defaults.
    #[must_use]
    pub fn builder() -> RequestOptionsBuilder {
        RequestOptionsBuilder::default()
    }
}

/// Builder for constructing [`RequestOptions`] instances.
#[derive(Debug, Default)]
pub struct RequestOptionsBuilder {
    options: RequestOptions,
}

impl RequestOptionsBuilder {
    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.options.method = method;
        self
    }

    /// Sets the `Content-Type` header value.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.options.content_type = content_type.into();
        self
    }

    /// Sets the fields JSON-encoded into the request body.
    #[must_use]
    pub fn post_fields(mut self, fields: impl Into<serde_json::Value>) -> Self {
        self.options.post_fields = Some(fields.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query_params(mut self, params: HashMap<String, String>) -> Self {
        self.options.query_params = Some(params);
        self
    }

    /// Adds a single query parameter, overwriting any earlier value for the
    /// same key.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .query_params
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the multipart parts for the request body.
    #[must_use]
    pub fn multipart(mut self, parts: Vec<MultipartPart>) -> Self {
        self.options.multipart = Some(parts);
        self
    }

    /// Sets a file to stream as the request body.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.file = Some(path.into());
        self
    }

    /// Builds the [`RequestOptions`].
    #[must_use]
    pub fn build(self) -> RequestOptions {
        self.options
    }
}
