//! The authentication strategies Zendesk supports out of the box.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::auth::{AuthError, AuthStrategy};

/// Builds a sensitive `Authorization` header value.
///
/// The value is marked sensitive so it is masked when headers are logged.
fn authorization_header(value: &str, strategy: &'static str) -> Result<HeaderValue, AuthError> {
    let mut header =
        HeaderValue::from_str(value).map_err(|_| AuthError::InvalidCredential { strategy })?;
    header.set_sensitive(true);
    Ok(header)
}

/// Basic authentication with an agent's username and password.
///
/// # Example
///
/// ```rust
/// use zendesk_api::auth::BasicAuth;
///
/// let auth = BasicAuth::new("agent@example.com", "hunter2").unwrap();
/// ```
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Creates a new Basic authentication strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if either value is empty.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() {
            return Err(AuthError::MissingCredential { field: "username" });
        }
        if password.is_empty() {
            return Err(AuthError::MissingCredential { field: "password" });
        }
        Ok(Self { username, password })
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

impl AuthStrategy for BasicAuth {
    fn prepare_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let header = authorization_header(&format!("Basic {encoded}"), "basic")?;
        Ok(request.header(AUTHORIZATION, header))
    }
}

/// API token authentication.
///
/// Zendesk's token scheme is Basic authentication with the username
/// `{email}/token` and the API token as the password.
///
/// # Example
///
/// ```rust
/// use zendesk_api::auth::ApiTokenAuth;
///
/// let auth = ApiTokenAuth::new("agent@example.com", "s3cr3t-token").unwrap();
/// ```
#[derive(Clone)]
pub struct ApiTokenAuth {
    email: String,
    token: String,
}

impl ApiTokenAuth {
    /// Creates a new API token authentication strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if either value is empty.
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Result<Self, AuthError> {
        let email = email.into();
        let token = token.into();
        if email.is_empty() {
            return Err(AuthError::MissingCredential { field: "email" });
        }
        if token.is_empty() {
            return Err(AuthError::MissingCredential { field: "token" });
        }
        Ok(Self { email, token })
    }
}

impl std::fmt::Debug for ApiTokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTokenAuth")
            .field("email", &self.email)
            .field("token", &"*****")
            .finish()
    }
}

impl AuthStrategy for ApiTokenAuth {
    fn prepare_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let encoded = STANDARD.encode(format!("{}/token:{}", self.email, self.token));
        let header = authorization_header(&format!("Basic {encoded}"), "api token")?;
        Ok(request.header(AUTHORIZATION, header))
    }
}

/// OAuth access token authentication via the Bearer scheme.
///
/// Obtaining the access token (authorization code flow, token refresh) is an
/// external concern; this strategy only attaches an already-issued token.
///
/// # Example
///
/// ```rust
/// use zendesk_api::auth::OAuthTokenAuth;
///
/// let auth = OAuthTokenAuth::new("0cbe0c07...").unwrap();
/// ```
#[derive(Clone)]
pub struct OAuthTokenAuth {
    token: String,
}

impl OAuthTokenAuth {
    /// Creates a new OAuth token authentication strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        if token.is_empty() {
            return Err(AuthError::MissingCredential { field: "token" });
        }
        Ok(Self { token })
    }
}

impl std::fmt::Debug for OAuthTokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthTokenAuth")
            .field("token", &"*****")
            .finish()
    }
}

impl AuthStrategy for OAuthTokenAuth {
    fn prepare_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let header = authorization_header(&format!("Bearer {}", self.token), "oauth")?;
        Ok(request.header(AUTHORIZATION, header))
    }
}
