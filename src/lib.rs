//! # Zendesk API Rust SDK
//!
//! A Rust SDK for the Zendesk REST API, providing type-safe configuration,
//! pluggable authentication strategies, and resource façades over an
//! authenticated HTTP dispatcher.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ZendeskConfig`] and [`ZendeskConfigBuilder`]
//! - Validated newtypes for the target account ([`Subdomain`], [`ApiBaseUrl`])
//! - Pluggable authentication: API token, Basic, and OAuth Bearer strategies
//!   via [`auth::AuthStrategy`]
//! - A request dispatcher ([`HttpClient`]) handling headers, JSON bodies,
//!   multipart forms, streamed file uploads, and query merging
//! - Typed route descriptors and explicit ancestor chains for nested
//!   resource calls via [`rest`]
//! - Resource façades (Organizations, Users, Tickets, memberships) composed
//!   from capability traits
//! - A per-call [`ApiResponse`] envelope bundling the parsed body with a
//!   [`DebugRecord`] diagnostic snapshot
//!
//! ## Quick Start
//!
//! ```rust
//! use zendesk_api::auth::ApiTokenAuth;
//! use zendesk_api::{Subdomain, ZendeskClient, ZendeskConfig};
//!
//! let config = ZendeskConfig::builder()
//!     .subdomain(Subdomain::new("my-company").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let auth = ApiTokenAuth::new("agent@example.com", "your-api-token").unwrap();
//! let client = ZendeskClient::new(&config, auth);
//! ```
//!
//! ## Making API Requests
//!
//! Resource façades cover the common operations:
//!
//! ```rust,ignore
//! use zendesk_api::rest::{Creatable, Findable, Listable};
//!
//! // GET /api/v2/organizations.json
//! let all = client.organizations().list(&Default::default()).await?;
//!
//! // GET /api/v2/organizations/42.json
//! let one = client.organizations().find(42, &Default::default()).await?;
//!
//! // POST /api/v2/organizations.json with {"organization": {...}}
//! let created = client
//!     .organizations()
//!     .create(serde_json::json!({"name": "Acme"}))
//!     .await?;
//!
//! // Organization-specific verbs
//! let matches = client
//!     .organizations()
//!     .autocomplete("Acm", &Default::default())
//!     .await?;
//! ```
//!
//! ## Nested Resources
//!
//! Chained accessors thread an explicit ancestor chain through calls:
//!
//! ```rust,ignore
//! use zendesk_api::rest::Listable;
//!
//! // GET /api/v2/users/5/organizations.json
//! let theirs = client.users().organizations(5).list(&Default::default()).await?;
//! ```
//!
//! ## Side-loading and Iteration
//!
//! Caller-supplied parameters pass through a strict contract: a `sideload`
//! key becomes the comma-joined `include` parameter, the whitelisted
//! iterator keys (`per_page`, `page`, `sort_order`, `sort_by`,
//! `external_id`) are copied, and everything else is dropped before the
//! query string is built.
//!
//! ```rust,ignore
//! let mut params = HashMap::new();
//! params.insert("sideload".to_string(), "users,groups".to_string());
//! params.insert("per_page".to_string(), "50".to_string());
//!
//! // GET /api/v2/organizations.json?include=users,groups&per_page=50
//! let response = client.organizations().list(&params).await?;
//! ```
//!
//! ## Diagnostics
//!
//! Every dispatched request produces exactly one [`DebugRecord`] — on the
//! [`ApiResponse`] envelope for successes, inside
//! [`ApiResponseError`] for failures — so concurrent calls never overwrite
//! each other's diagnostics.
//!
//! ## Design Principles
//!
//! - **No global state**: side-loading and diagnostics are per-call values
//! - **Fail-fast validation**: newtypes, credentials, and route tokens are
//!   validated before any network activity
//! - **Thread-safe**: all shared types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Pass-through bodies**: responses are `serde_json::Value`, never
//!   schema-validated by the SDK

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

mod client;

// Re-export public types at crate root for convenience
pub use client::ZendeskClient;
pub use config::{ApiBaseUrl, Subdomain, ZendeskConfig, ZendeskConfigBuilder};
pub use error::{ConfigError, Error};

// Re-export HTTP dispatch types
pub use clients::{
    prepare_query_params, ApiResponse, ApiResponseError, DebugRecord, HttpClient, HttpMethod,
    InvalidRequestError, MultipartPart, RequestOptions, RequestOptionsBuilder, ITERATOR_KEYS,
};

// Re-export auth types for convenience
pub use auth::{ApiTokenAuth, AuthError, AuthStrategy, BasicAuth, OAuthTokenAuth};
