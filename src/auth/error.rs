//! Authentication error types.

use thiserror::Error;

/// Error returned when an authentication strategy cannot produce valid
/// credentials.
///
/// This error is raised before any network activity: when it surfaces from
/// [`send`](crate::clients::HttpClient::send), the request never left the
/// client. It is never retried and never swallowed.
///
/// # Example
///
/// ```rust
/// use zendesk_api::auth::{AuthError, BasicAuth};
///
/// let result = BasicAuth::new("", "password");
/// assert!(matches!(
///     result,
///     Err(AuthError::MissingCredential { field: "username" })
/// ));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required piece of credential material is empty.
    #[error("Missing credential material: '{field}' cannot be empty.")]
    MissingCredential {
        /// The name of the empty credential field.
        field: &'static str,
    },

    /// Credential material cannot be encoded into a request header.
    #[error("Credential material for {strategy} cannot be encoded into a request header.")]
    InvalidCredential {
        /// The strategy that rejected the credential material.
        strategy: &'static str,
    },
}
