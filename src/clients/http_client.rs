//! HTTP dispatch for Zendesk API communication.
//!
//! This module provides the [`HttpClient`] type, which assembles one HTTP
//! request from an endpoint and a [`RequestOptions`] bundle, delegates to
//! the configured [`AuthStrategy`], sends it, and classifies the outcome.

use std::collections::HashMap;

use tokio_util::io::ReaderStream;

use crate::auth::AuthStrategy;
use crate::clients::errors::{ApiResponseError, InvalidRequestError};
use crate::clients::request_options::{HttpMethod, MultipartPart, RequestOptions};
use crate::clients::response::{ApiResponse, DebugRecord};
use crate::config::ZendeskConfig;
use crate::error::Error;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Zendesk API.
///
/// The client handles:
/// - Base URL construction from the configured subdomain or override
/// - Default headers including `Accept` and a client-identifying `User-Agent`
/// - Body resolution (multipart, JSON fields, streamed file upload)
/// - Delegation to the configured authentication strategy
/// - Outcome classification into the SDK's error taxonomy
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async
/// tasks. Each call produces its own [`DebugRecord`]; no state is shared
/// between in-flight requests.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::auth::ApiTokenAuth;
/// use zendesk_api::{HttpClient, RequestOptions, Subdomain, ZendeskConfig};
///
/// let config = ZendeskConfig::builder()
///     .subdomain(Subdomain::new("my-company").unwrap())
///     .build()
///     .unwrap();
/// let auth = ApiTokenAuth::new("agent@example.com", "token").unwrap();
/// let client = HttpClient::new(&config, Box::new(auth));
///
/// let response = client
///     .send("organizations.json", RequestOptions::default())
///     .await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL all endpoints are resolved against, ending with `/`.
    base_url: String,
    /// The `User-Agent` header sent with every request.
    user_agent: String,
    /// The authentication strategy finalizing every request.
    auth: Box<dyn AuthStrategy>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration and strategy.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &ZendeskConfig, auth: Box<dyn AuthStrategy>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Zendesk API Library v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_base_url(),
            user_agent,
            auth,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the `User-Agent` header value for this client.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends one request to the Zendesk API.
    ///
    /// Assembles the request from `endpoint` and `options` (defaults:
    /// GET, `application/json`), resolves the body from the first available
    /// source in priority order (multipart, then `post_fields`, then an
    /// existing `file`), appends query parameters, hands the draft to the
    /// authentication strategy, dispatches it, and parses the response body
    /// as JSON.
    ///
    /// Every dispatched request produces exactly one [`DebugRecord`],
    /// regardless of outcome: it is returned inside the [`ApiResponse`]
    /// envelope on success and carried by [`ApiResponseError`] on failure.
    ///
    /// # Errors
    ///
    /// - [`Error::Auth`] when the strategy cannot produce credentials; the
    ///   request never leaves the client.
    /// - [`Error::InvalidRequest`] when the options cannot become a body.
    /// - [`Error::ApiResponse`] on any transport fault or non-2xx response.
    ///   No retries are performed at this layer.
    pub async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, Error> {
        let url = format!("{}{}", self.base_url, endpoint.trim_start_matches('/'));

        let mut builder = match options.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        builder = builder
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, &self.user_agent);

        // Body resolution. Multipart is authoritative; the transport
        // generates its own boundary-aware Content-Type header for it.
        let mut body_snapshot: Option<String> = None;
        if let Some(parts) = options.multipart {
            body_snapshot = Some(format!("<multipart body: {} part(s)>", parts.len()));
            builder = builder.multipart(build_multipart_form(parts)?);
        } else {
            builder = builder.header(reqwest::header::CONTENT_TYPE, &options.content_type);
            if let Some(fields) = options.post_fields {
                let encoded = fields.to_string();
                body_snapshot = Some(encoded.clone());
                builder = builder.body(encoded);
            } else if let Some(path) = options.file {
                if path.is_file() {
                    let file = tokio::fs::File::open(&path).await.map_err(|source| {
                        InvalidRequestError::FileUnreadable {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    body_snapshot = Some(format!("<file stream: {}>", path.display()));
                    // The handle is owned by the body stream and closed on
                    // every exit path when the stream is dropped.
                    builder = builder.body(reqwest::Body::wrap_stream(ReaderStream::new(file)));
                }
            }
        }

        if let Some(params) = options.query_params {
            if !params.is_empty() {
                builder = builder.query(&params);
            }
        }

        // AuthError propagates unchanged; nothing has been dispatched yet.
        let builder = self.auth.prepare_request(builder)?;

        let request = match builder.build() {
            Ok(request) => request,
            Err(source) => {
                let debug = DebugRecord {
                    request_body: body_snapshot,
                    error: Some(source.to_string()),
                    ..DebugRecord::default()
                };
                return Err(ApiResponseError::transport(source, debug).into());
            }
        };

        let mut debug = DebugRecord {
            request_headers: flatten_request_headers(request.headers()),
            request_body: body_snapshot,
            ..DebugRecord::default()
        };

        tracing::debug!(method = %options.method, url = %request.url(), "dispatching request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(source) => {
                debug.error = Some(source.to_string());
                return Err(ApiResponseError::transport(source, debug).into());
            }
        };

        let status = response.status().as_u16();
        debug.response_status = Some(status);
        debug.response_headers = parse_response_headers(response.headers());

        let text = response.text().await.unwrap_or_default();

        if !(200..=299).contains(&status) {
            let message = error_message(status, &text);
            debug.error = Some(message.clone());
            return Err(ApiResponseError::http(status, message, debug).into());
        }

        let body = if text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::Null)
        };

        Ok(ApiResponse::new(status, body, debug))
    }
}

/// Converts transport-agnostic parts into a reqwest multipart form.
fn build_multipart_form(
    parts: Vec<MultipartPart>,
) -> Result<reqwest::multipart::Form, InvalidRequestError> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        let MultipartPart {
            name,
            contents,
            file_name,
            content_type,
        } = part;

        let mut piece = reqwest::multipart::Part::bytes(contents);
        if let Some(file_name) = file_name {
            piece = piece.file_name(file_name);
        }
        if let Some(value) = content_type {
            piece = piece.mime_str(&value).map_err(|_| {
                InvalidRequestError::InvalidPartContentType {
                    name: name.clone(),
                    value,
                }
            })?;
        }
        form = form.part(name, piece);
    }
    Ok(form)
}

/// Flattens request headers into a single-valued map, masking sensitive
/// values.
fn flatten_request_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut result = HashMap::new();
    for (name, value) in headers {
        let rendered = if value.is_sensitive() {
            "*****".to_string()
        } else {
            value.to_str().unwrap_or_default().to_string()
        };
        result.insert(name.as_str().to_string(), rendered);
    }
    result
}

/// Parses response headers into a multi-valued map.
fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

/// Builds a failure message from a non-2xx response body.
///
/// Zendesk error bodies carry `error` (a string or an object with a
/// `title`) and often a `description`; fall back to the bare status when
/// the body is not recognizable.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let error = match value.get("error") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Object(map)) => map
                .get("title")
                .and_then(serde_json::Value::as_str)
                .map(String::from),
            _ => None,
        };
        let description = value
            .get("description")
            .and_then(serde_json::Value::as_str)
            .map(String::from);

        match (error, description) {
            (Some(error), Some(description)) => {
                return format!("HTTP {status}: {error} - {description}");
            }
            (Some(error), None) => return format!("HTTP {status}: {error}"),
            (None, Some(description)) => return format!("HTTP {status}: {description}"),
            (None, None) => {}
        }
    }
    format!("HTTP {status} response from the Zendesk API")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiTokenAuth;
    use crate::config::Subdomain;

    fn create_test_client() -> HttpClient {
        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("test-company").unwrap())
            .build()
            .unwrap();
        let auth = ApiTokenAuth::new("agent@example.com", "test-token").unwrap();
        HttpClient::new(&config, Box::new(auth))
    }

    #[test]
    fn test_base_url_from_subdomain() {
        let client = create_test_client();
        assert_eq!(
            client.base_url(),
            "https://test-company.zendesk.com/api/v2/"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();
        assert!(client.user_agent().contains("Zendesk API Library v"));
        assert!(client.user_agent().contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("test-company").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let auth = ApiTokenAuth::new("agent@example.com", "test-token").unwrap();
        let client = HttpClient::new(&config, Box::new(auth));

        assert!(client.user_agent().starts_with("MyApp/1.0 | "));
        assert!(client.user_agent().contains("Zendesk API Library"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_error_message_with_error_and_description() {
        let body = r#"{"error":"RecordNotFound","description":"Not found"}"#;
        assert_eq!(
            error_message(404, body),
            "HTTP 404: RecordNotFound - Not found"
        );
    }

    #[test]
    fn test_error_message_with_object_error() {
        let body = r#"{"error":{"title":"Forbidden","message":"You do not have access"}}"#;
        assert_eq!(error_message(403, body), "HTTP 403: Forbidden");
    }

    #[test]
    fn test_error_message_falls_back_for_unrecognized_body() {
        assert_eq!(
            error_message(500, "<html>oops</html>"),
            "HTTP 500 response from the Zendesk API"
        );
        assert_eq!(
            error_message(500, ""),
            "HTTP 500 response from the Zendesk API"
        );
    }

    #[test]
    fn test_auth_failure_returns_before_dispatch() {
        #[derive(Debug)]
        struct FailingAuth;

        impl crate::auth::AuthStrategy for FailingAuth {
            fn prepare_request(
                &self,
                _request: reqwest::RequestBuilder,
            ) -> Result<reqwest::RequestBuilder, crate::auth::AuthError> {
                Err(crate::auth::AuthError::MissingCredential { field: "token" })
            }
        }

        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("test-company").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config, Box::new(FailingAuth));

        let result =
            tokio_test::block_on(client.send("organizations.json", RequestOptions::default()));
        assert!(matches!(result, Err(Error::Auth(_))));
    }

    #[test]
    fn test_build_multipart_form_rejects_bad_content_type() {
        let parts = vec![
            MultipartPart::new("uploaded_data", b"x".to_vec()).content_type("definitely not mime")
        ];
        let result = build_multipart_form(parts);
        assert!(matches!(
            result,
            Err(InvalidRequestError::InvalidPartContentType { .. })
        ));
    }
}
