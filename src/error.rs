//! Error types for the Partner API client.
//!
//! This module contains the configuration errors raised while building
//! [`Credentials`](crate::Credentials) and the HTTP client. Every constructor
//! validates eagerly so that a bad secret or URL is reported before any
//! request is attempted.
//!
//! # Example
//!
//! ```rust
//! use partner_api::{ConfigError, SharedSecret};
//!
//! let result = SharedSecret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySharedSecret)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Partner identifier cannot be empty.
    #[error("Partner ID cannot be empty. Please provide the partner identifier issued by the API provider.")]
    EmptyPartnerId,

    /// Shared secret cannot be empty.
    #[error("Shared secret cannot be empty. Please provide the signing secret issued by the API provider.")]
    EmptySharedSecret,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the credentials.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is missing or empty.
    #[error("Environment variable '{name}' is not set. It is required to sign partner tokens.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client could not be constructed: {reason}")]
    HttpClientBuild {
        /// Description of the transport builder failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shared_secret_error_message() {
        let message = ConfigError::EmptySharedSecret.to_string();
        assert!(message.contains("Shared secret cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme and host"));
    }

    #[test]
    fn test_missing_env_var_error_names_variable() {
        let error = ConfigError::MissingEnvVar {
            name: "JWT_SECRET_PARTNER_A",
        };
        assert!(error.to_string().contains("JWT_SECRET_PARTNER_A"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPartnerId;
        let _: &dyn std::error::Error = &error;
    }
}
