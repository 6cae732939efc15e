//! Dispatch error types for the Partner API client.
//!
//! Every failed call resolves to exactly one [`DispatchError`]. Callers
//! branch on [`DispatchError::kind`] rather than on transport internals:
//!
//! - [`FailureKind::Authentication`]: 401, the secret or partner ID is wrong
//! - [`FailureKind::Authorization`]: 403, the partner lacks scope for the operation
//! - [`FailureKind::Remote`]: Any other non-2xx response
//! - [`FailureKind::Transport`]: No response was received
//! - [`FailureKind::Signing`]: The bearer token could not be built locally
//!
//! # Example
//!
//! ```rust,ignore
//! use partner_api::{DispatchError, FailureKind};
//!
//! match client.list_users().await {
//!     Ok(payload) => println!("Users: {payload}"),
//!     Err(e) if e.kind() == FailureKind::Authorization => {
//!         println!("Partner may not read users, skipping");
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::auth::TokenError;

/// Discriminant of a [`DispatchError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The server rejected the token's identity (HTTP 401).
    Authentication,
    /// The server accepted the identity but denied the operation (HTTP 403).
    Authorization,
    /// The server returned any other non-2xx status.
    Remote,
    /// No response was received.
    Transport,
    /// The bearer token could not be signed.
    Signing,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::Remote => "remote",
            Self::Transport => "transport",
            Self::Signing => "signing",
        };
        f.write_str(name)
    }
}

/// The body of an error response.
///
/// Holds the decoded JSON when the body parses, otherwise the raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDetail {
    /// The response body decoded as JSON.
    Json(serde_json::Value),
    /// The raw response text (possibly empty).
    Text(String),
}

impl ErrorDetail {
    /// Decodes `body` as JSON, falling back to the raw text.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).map_or_else(|_| Self::Text(body.to_string()), Self::Json)
    }

    /// Returns the decoded JSON, if the body was JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A classified failure of a dispatched request.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// HTTP 401: the shared secret or partner ID does not match the server's.
    #[error("Authentication failed ({status}): {detail}")]
    Authentication {
        /// Always 401.
        status: u16,
        /// The decoded error body.
        detail: ErrorDetail,
    },

    /// HTTP 403: the partner lacks permission for this operation.
    #[error("Authorization failed ({status}): {detail}")]
    Authorization {
        /// Always 403.
        status: u16,
        /// The decoded error body.
        detail: ErrorDetail,
    },

    /// Any other non-2xx response.
    #[error("Remote error ({status}): {detail}")]
    Remote {
        /// The HTTP status code.
        status: u16,
        /// The decoded error body, or the raw text if it was not JSON.
        detail: ErrorDetail,
    },

    /// No response was received (timeout, DNS, refused connection, TLS).
    #[error("Transport error: {source}")]
    Transport {
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The bearer token could not be signed.
    #[error(transparent)]
    Signing(#[from] TokenError),
}

impl DispatchError {
    /// Classifies a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = ErrorDetail::from_body(body);
        match status {
            401 => Self::Authentication { status, detail },
            403 => Self::Authorization { status, detail },
            _ => Self::Remote { status, detail },
        }
    }

    /// Returns the failure discriminant.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Authentication { .. } => FailureKind::Authentication,
            Self::Authorization { .. } => FailureKind::Authorization,
            Self::Remote { .. } => FailureKind::Remote,
            Self::Transport { .. } => FailureKind::Transport,
            Self::Signing(_) => FailureKind::Signing,
        }
    }

    /// Returns the HTTP status, or `None` when no response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::Authorization { status, .. }
            | Self::Remote { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Signing(_) => None,
        }
    }

    /// Returns the error body, when a response was received.
    #[must_use]
    pub const fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::Authentication { detail, .. }
            | Self::Authorization { detail, .. }
            | Self::Remote { detail, .. } => Some(detail),
            Self::Transport { .. } | Self::Signing(_) => None,
        }
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_401_classifies_as_authentication() {
        let error = DispatchError::from_status(401, r#"{"error":"invalid token"}"#);
        assert_eq!(error.kind(), FailureKind::Authentication);
        assert_eq!(error.status(), Some(401));
        assert_eq!(
            error.detail().and_then(ErrorDetail::as_json),
            Some(&json!({"error": "invalid token"}))
        );
    }

    #[test]
    fn test_403_classifies_as_authorization_not_authentication() {
        let error = DispatchError::from_status(403, "");
        assert_eq!(error.kind(), FailureKind::Authorization);
        assert_eq!(error.status(), Some(403));
    }

    #[test]
    fn test_other_statuses_classify_as_remote() {
        for status in [400, 404, 409, 422, 429, 500, 502, 503] {
            let error = DispatchError::from_status(status, "{}");
            assert_eq!(error.kind(), FailureKind::Remote);
            assert_eq!(error.status(), Some(status));
        }
    }

    #[test]
    fn test_undecodable_body_is_kept_as_raw_text() {
        let error = DispatchError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(
            error.detail(),
            Some(&ErrorDetail::Text("<html>Bad Gateway</html>".to_string()))
        );
    }

    #[test]
    fn test_signing_error_has_no_status() {
        let error = DispatchError::from(TokenError::InvalidTtl { ttl_seconds: 0 });
        assert_eq!(error.kind(), FailureKind::Signing);
        assert_eq!(error.status(), None);
        assert!(error.detail().is_none());
    }

    #[test]
    fn test_error_message_includes_status_and_detail() {
        let error = DispatchError::from_status(422, r#"{"errors":["quantity must be positive"]}"#);
        let message = error.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("quantity must be positive"));
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::Authentication.to_string(), "authentication");
        assert_eq!(FailureKind::Authorization.to_string(), "authorization");
        assert_eq!(FailureKind::Transport.to_string(), "transport");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &DispatchError::from_status(500, "boom");
        let _ = error;
    }
}
