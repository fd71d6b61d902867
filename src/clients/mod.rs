//! HTTP dispatch types for Zendesk API communication.
//!
//! This module provides the foundational request layer: option bundles,
//! query parameter building, the dispatcher itself, and the per-call
//! response envelope.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: assembles, authenticates, and dispatches one request
//! - [`RequestOptions`]: the options bundle (method, body source, query)
//! - [`ApiResponse`]: parsed body + per-call [`DebugRecord`]
//! - [`ApiResponseError`]: transport/HTTP failure carrying diagnostics
//! - [`prepare_query_params`]: side-load and iterator query building
//!
//! # Example
//!
//! ```rust,ignore
//! use zendesk_api::{HttpMethod, RequestOptions};
//!
//! let options = RequestOptions::builder()
//!     .method(HttpMethod::Post)
//!     .post_fields(serde_json::json!({"organization": {"name": "Acme"}}))
//!     .build();
//!
//! let response = http_client.send("organizations.json", options).await?;
//! println!("{}", response.body);
//! ```

mod errors;
mod http_client;
mod query;
mod request_options;
mod response;

pub use errors::{ApiResponseError, InvalidRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use query::{prepare_query_params, ITERATOR_KEYS};
pub use request_options::{HttpMethod, MultipartPart, RequestOptions, RequestOptionsBuilder};
pub use response::{ApiResponse, DebugRecord};
