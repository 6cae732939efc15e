//! Validated newtype wrappers for credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated partner identifier.
///
/// The identifier becomes the `sub` claim of every issued token.
///
/// # Example
///
/// ```rust
/// use partner_api::PartnerId;
///
/// let id = PartnerId::new("partner-company-a").unwrap();
/// assert_eq!(id.as_ref(), "partner-company-a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartnerId(String);

impl PartnerId {
    /// Creates a new validated partner identifier.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPartnerId`] if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyPartnerId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for PartnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PartnerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PartnerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated shared signing secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SharedSecret(*****)` instead of the actual key. The secret is never
/// trimmed: every byte participates in the signature.
///
/// # Example
///
/// ```rust
/// use partner_api::SharedSecret;
///
/// let secret = SharedSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SharedSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Creates a new validated shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySharedSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySharedSecret);
        }
        Ok(Self(secret))
    }

    /// Returns the raw secret bytes used as the HMAC key.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for SharedSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(*****)")
    }
}

/// A validated base URL for the partner API.
///
/// Trailing slashes are stripped on construction so that joining a route
/// never produces a double slash.
///
/// # Example
///
/// ```rust
/// use partner_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// assert_eq!(url.join("/partner/api/order/"), "https://api.example.com/partner/api/order/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends a route to the base URL with exactly one separating slash.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_id_rejects_empty_and_blank() {
        assert!(matches!(PartnerId::new(""), Err(ConfigError::EmptyPartnerId)));
        assert!(matches!(
            PartnerId::new("   "),
            Err(ConfigError::EmptyPartnerId)
        ));
    }

    #[test]
    fn test_partner_id_trims_whitespace() {
        let id = PartnerId::new("  partner-company-a\n").unwrap();
        assert_eq!(id.as_ref(), "partner-company-a");
    }

    #[test]
    fn test_shared_secret_rejects_empty_string() {
        assert!(matches!(
            SharedSecret::new(""),
            Err(ConfigError::EmptySharedSecret)
        ));
    }

    #[test]
    fn test_shared_secret_masks_value_in_debug() {
        let secret = SharedSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "SharedSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_shared_secret_keeps_surrounding_whitespace() {
        let secret = SharedSecret::new(" padded ").unwrap();
        assert_eq!(secret.as_bytes(), b" padded ");
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.example.com");

        let url = BaseUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https:///").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("https://:443").is_err());
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://host//").unwrap();
        assert_eq!(url.as_ref(), "https://host");
    }

    #[test]
    fn test_join_never_doubles_or_drops_slash() {
        let with_slash = BaseUrl::new("https://host/").unwrap();
        let without_slash = BaseUrl::new("https://host").unwrap();

        assert_eq!(
            with_slash.join("/partner/api/order/"),
            "https://host/partner/api/order/"
        );
        assert_eq!(
            without_slash.join("/partner/api/order/"),
            "https://host/partner/api/order/"
        );
        assert_eq!(
            without_slash.join("partner/api/order/"),
            "https://host/partner/api/order/"
        );
    }

    #[test]
    fn test_join_preserves_base_path_prefix() {
        let url = BaseUrl::new("https://host/gateway/").unwrap();
        assert_eq!(url.host_name(), "host");
        assert_eq!(
            url.join("/partner/api/user/"),
            "https://host/gateway/partner/api/user/"
        );
    }

    #[test]
    fn test_partner_id_serde_round_trip_validates() {
        let id: PartnerId = serde_json::from_str(r#""partner-b""#).unwrap();
        assert_eq!(id.as_ref(), "partner-b");
        assert!(serde_json::from_str::<PartnerId>(r#""""#).is_err());
    }
}
