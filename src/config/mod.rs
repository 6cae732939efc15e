//! Configuration types for the Partner API client.
//!
//! This module provides the values used to initialize a client:
//!
//! - [`Credentials`]: The partner identity, signing secret, and base URL
//! - [`CredentialsBuilder`]: A builder for constructing [`Credentials`] instances
//! - [`ClientOptions`]: Transport settings (user agent, timeout, TLS opt-out)
//! - [`PartnerId`], [`SharedSecret`], [`BaseUrl`]: Validated newtypes
//!
//! The dispatcher never reads process state. Environment loading is offered
//! by [`Credentials::from_env`] for callers who want it.
//!
//! # Example
//!
//! ```rust
//! use partner_api::{BaseUrl, Credentials, PartnerId, SharedSecret};
//!
//! let credentials = Credentials::builder()
//!     .partner_id(PartnerId::new("partner-company-a").unwrap())
//!     .shared_secret(SharedSecret::new("dev-secret").unwrap())
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, PartnerId, SharedSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the partner identifier.
pub const PARTNER_ID_ENV: &str = "PARTNER_ID";

/// Environment variable holding the shared signing secret.
pub const SHARED_SECRET_ENV: &str = "JWT_SECRET_PARTNER_A";

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

const DEFAULT_PARTNER_ID: &str = "partner-company-a";
const DEFAULT_BASE_URL: &str = "https://localhost";

/// Credentials for the Partner API.
///
/// Immutable once built. A client takes its own clone at construction.
///
/// # Thread Safety
///
/// `Credentials` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    partner_id: PartnerId,
    shared_secret: SharedSecret,
    base_url: BaseUrl,
}

impl Credentials {
    /// Creates credentials from already-validated parts.
    #[must_use]
    pub const fn new(partner_id: PartnerId, shared_secret: SharedSecret, base_url: BaseUrl) -> Self {
        Self {
            partner_id,
            shared_secret,
            base_url,
        }
    }

    /// Creates a new builder for constructing `Credentials`.
    #[must_use]
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::new()
    }

    /// Loads credentials from the process environment.
    ///
    /// Reads `PARTNER_ID` (default `partner-company-a`),
    /// `JWT_SECRET_PARTNER_A` (required), and `API_BASE_URL`
    /// (default `https://localhost`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the secret is unset or empty,
    /// or a validation error for a malformed partner ID or base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads credentials through an arbitrary variable lookup.
    ///
    /// Same rules as [`from_env`](Self::from_env).
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(SHARED_SECRET_ENV)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnvVar {
                name: SHARED_SECRET_ENV,
            })?;
        let partner_id =
            lookup(PARTNER_ID_ENV).unwrap_or_else(|| DEFAULT_PARTNER_ID.to_string());
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            partner_id: PartnerId::new(partner_id)?,
            shared_secret: SharedSecret::new(secret)?,
            base_url: BaseUrl::new(base_url)?,
        })
    }

    /// Returns the partner identifier.
    #[must_use]
    pub const fn partner_id(&self) -> &PartnerId {
        &self.partner_id
    }

    /// Returns the shared signing secret.
    #[must_use]
    pub const fn shared_secret(&self) -> &SharedSecret {
        &self.shared_secret
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};

/// Builder for constructing [`Credentials`] instances.
///
/// All three fields are required.
#[derive(Debug, Default)]
pub struct CredentialsBuilder {
    partner_id: Option<PartnerId>,
    shared_secret: Option<SharedSecret>,
    base_url: Option<BaseUrl>,
}

impl CredentialsBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the partner identifier (required).
    #[must_use]
    pub fn partner_id(mut self, partner_id: PartnerId) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    /// Sets the shared signing secret (required).
    #[must_use]
    pub fn shared_secret(mut self, secret: SharedSecret) -> Self {
        self.shared_secret = Some(secret);
        self
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Builds the [`Credentials`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first unset field.
    pub fn build(self) -> Result<Credentials, ConfigError> {
        let partner_id = self
            .partner_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "partner_id",
            })?;
        let shared_secret = self
            .shared_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "shared_secret",
            })?;
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(Credentials {
            partner_id,
            shared_secret,
            base_url,
        })
    }
}

/// Transport options for the HTTP client.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-imposed deadline)
/// - `accept_invalid_certs`: `false`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use partner_api::ClientOptions;
///
/// let options = ClientOptions::builder()
///     .user_agent_prefix("MyIntegration/1.0")
///     .timeout(Duration::from_secs(10))
///     .build();
///
/// assert_eq!(options.timeout(), Some(Duration::from_secs(10)));
/// assert!(!options.accept_invalid_certs());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientOptions {
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
}

impl ClientOptions {
    /// Creates a new builder for constructing `ClientOptions`.
    #[must_use]
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether certificate validation is disabled.
    #[must_use]
    pub const fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

/// Builder for constructing [`ClientOptions`] instances.
#[derive(Debug, Default)]
pub struct ClientOptionsBuilder {
    options: ClientOptions,
}

impl ClientOptionsBuilder {
    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a deadline applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Disables TLS certificate validation.
    ///
    /// Only for development servers with self-signed certificates.
    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.options.accept_invalid_certs = accept;
        self
    }

    /// Builds the [`ClientOptions`].
    #[must_use]
    pub fn build(self) -> ClientOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_builder_requires_partner_id() {
        let result = CredentialsBuilder::new()
            .shared_secret(SharedSecret::new("secret").unwrap())
            .base_url(BaseUrl::new("https://host").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "partner_id"
            })
        ));
    }

    #[test]
    fn test_builder_requires_shared_secret() {
        let result = CredentialsBuilder::new()
            .partner_id(PartnerId::new("partner").unwrap())
            .base_url(BaseUrl::new("https://host").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "shared_secret"
            })
        ));
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = CredentialsBuilder::new()
            .partner_id(PartnerId::new("partner").unwrap())
            .shared_secret(SharedSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_from_lookup_requires_secret() {
        let result = Credentials::from_lookup(lookup_from(&[("PARTNER_ID", "partner-b")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar {
                name: "JWT_SECRET_PARTNER_A"
            })
        ));

        let result = Credentials::from_lookup(lookup_from(&[("JWT_SECRET_PARTNER_A", "")]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar { .. })));
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let credentials =
            Credentials::from_lookup(lookup_from(&[("JWT_SECRET_PARTNER_A", "s3cret")])).unwrap();

        assert_eq!(credentials.partner_id().as_ref(), "partner-company-a");
        assert_eq!(credentials.base_url().as_ref(), "https://localhost");
        assert_eq!(credentials.shared_secret().as_ref(), "s3cret");
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let credentials = Credentials::from_lookup(lookup_from(&[
            ("PARTNER_ID", "partner-b"),
            ("JWT_SECRET_PARTNER_A", "s3cret"),
            ("API_BASE_URL", "https://api.example.com/"),
        ]))
        .unwrap();

        assert_eq!(credentials.partner_id().as_ref(), "partner-b");
        assert_eq!(credentials.base_url().as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_from_lookup_rejects_malformed_base_url() {
        let result = Credentials::from_lookup(lookup_from(&[
            ("JWT_SECRET_PARTNER_A", "s3cret"),
            ("API_BASE_URL", "api.example.com"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_credentials_debug_masks_secret() {
        let credentials = Credentials::new(
            PartnerId::new("partner").unwrap(),
            SharedSecret::new("do-not-print").unwrap(),
            BaseUrl::new("https://host").unwrap(),
        );
        let debug_str = format!("{credentials:?}");
        assert!(debug_str.contains("Credentials"));
        assert!(!debug_str.contains("do-not-print"));
    }

    #[test]
    fn test_client_options_defaults() {
        let options = ClientOptions::default();
        assert!(options.user_agent_prefix().is_none());
        assert!(options.timeout().is_none());
        assert!(!options.accept_invalid_certs());
    }

    #[test]
    fn test_credentials_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Credentials>();
    }
}
