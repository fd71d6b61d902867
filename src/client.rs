//! The top-level Zendesk API client.

use std::collections::HashMap;

use crate::auth::AuthStrategy;
use crate::clients::{ApiResponse, HttpClient, HttpMethod, RequestOptions};
use crate::config::ZendeskConfig;
use crate::error::Error;
use crate::rest::resources::{Organizations, Tickets, Users};
use crate::rest::ResourceChain;

/// Client for the Zendesk REST API.
///
/// Pairs a configuration with an authentication strategy and exposes the
/// resource accessors plus low-level verb helpers. Each call is dispatched
/// independently and returns its own [`ApiResponse`] envelope.
///
/// # Thread Safety
///
/// `ZendeskClient` is `Send + Sync`; calls share no mutable state, so the
/// client can be used concurrently from multiple tasks.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::auth::ApiTokenAuth;
/// use zendesk_api::rest::Listable;
/// use zendesk_api::{Subdomain, ZendeskClient, ZendeskConfig};
///
/// let config = ZendeskConfig::builder()
///     .subdomain(Subdomain::new("my-company")?)
///     .build()?;
/// let auth = ApiTokenAuth::new("agent@example.com", "api-token")?;
/// let client = ZendeskClient::new(&config, auth);
///
/// let response = client.organizations().list(&Default::default()).await?;
/// println!("{}", response.body["organizations"]);
/// ```
#[derive(Debug)]
pub struct ZendeskClient {
    http: HttpClient,
}

// Verify ZendeskClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZendeskClient>();
};

impl ZendeskClient {
    /// Creates a new client for the given configuration and strategy.
    #[must_use]
    pub fn new(config: &ZendeskConfig, auth: impl AuthStrategy + 'static) -> Self {
        Self {
            http: HttpClient::new(config, Box::new(auth)),
        }
    }

    /// Returns the underlying HTTP dispatcher.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Returns a handle for the Organizations endpoints.
    #[must_use]
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(self, ResourceChain::new())
    }

    /// Returns a handle for the Users endpoints.
    #[must_use]
    pub fn users(&self) -> Users<'_> {
        Users::new(self, ResourceChain::new())
    }

    /// Returns a handle for the Tickets endpoints.
    #[must_use]
    pub fn tickets(&self) -> Tickets<'_> {
        Tickets::new(self, ResourceChain::new())
    }

    /// Extracts the side-load list from caller-supplied parameters.
    ///
    /// Side-loading is call-scoped: the `sideload` key carries a
    /// comma-separated list of related resource names and is consumed here;
    /// it never reaches the query string itself (the builder emits the
    /// `include` parameter instead).
    #[must_use]
    pub fn sideload(&self, params: &HashMap<String, String>) -> Option<Vec<String>> {
        params.get("sideload").map(|list| {
            list.split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect()
        })
    }

    /// Sends a GET request to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on authentication or dispatch failure.
    pub async fn get(
        &self,
        endpoint: &str,
        query: HashMap<String, String>,
    ) -> Result<ApiResponse, Error> {
        let options = RequestOptions::builder().query_params(query).build();
        self.http.send(endpoint, options).await
    }

    /// Sends a POST request with a JSON body to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on authentication or dispatch failure.
    pub async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, Error> {
        let options = RequestOptions::builder()
            .method(HttpMethod::Post)
            .post_fields(body)
            .build();
        self.http.send(endpoint, options).await
    }

    /// Sends a PUT request with a JSON body to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on authentication or dispatch failure.
    pub async fn put(&self, endpoint: &str, body: serde_json::Value) -> Result<ApiResponse, Error> {
        let options = RequestOptions::builder()
            .method(HttpMethod::Put)
            .post_fields(body)
            .build();
        self.http.send(endpoint, options).await
    }

    /// Sends a DELETE request to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on authentication or dispatch failure.
    pub async fn delete(
        &self,
        endpoint: &str,
        query: HashMap<String, String>,
    ) -> Result<ApiResponse, Error> {
        let options = RequestOptions::builder()
            .method(HttpMethod::Delete)
            .query_params(query)
            .build();
        self.http.send(endpoint, options).await
    }

    /// Sends a request with full control over the options bundle
    /// (multipart bodies, file uploads, custom content types).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on authentication or dispatch failure.
    pub async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error> {
        self.http.send(endpoint, options).await
    }
}
