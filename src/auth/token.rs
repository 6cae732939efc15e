//! Signed partner tokens.
//!
//! This module provides [`TokenIssuer`], which signs short-lived HS256 JWTs
//! binding a partner identity to the partner API audience, and
//! [`PartnerClaims`], the claim set carried by those tokens.
//!
//! # JWT Structure
//!
//! Every token carries exactly these claims:
//!
//! - `sub`: The partner identifier
//! - `iss`: Always [`TOKEN_ISSUER`]
//! - `aud`: Always [`TOKEN_AUDIENCE`]
//! - `iat`: Issued-at timestamp (Unix seconds)
//! - `exp`: Expiration timestamp, `iat + ttl`
//!
//! # Lifetime Policy
//!
//! No maximum ttl is enforced unless the issuer is built with
//! [`TokenIssuer::with_max_ttl`]. A long-lived bearer token is as powerful as
//! the secret for its whole lifetime; integrators who accept caller-supplied
//! ttls should set a cap.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{PartnerId, SharedSecret};

/// Issuer claim stamped on every token.
pub const TOKEN_ISSUER: &str = "partner-api-system";

/// Audience claim stamped on every token.
pub const TOKEN_AUDIENCE: &str = "partner-api";

/// Default token lifetime in seconds (one hour).
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Leeway for time-based claims during verification.
const JWT_LEEWAY_SECS: u64 = 10;

/// Errors raised while issuing or verifying partner tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The requested ttl is zero or too large to express as a timestamp.
    #[error("Token ttl must be a positive number of seconds, got {ttl_seconds}")]
    InvalidTtl {
        /// The rejected ttl.
        ttl_seconds: u64,
    },

    /// The requested ttl exceeds the issuer's configured maximum.
    #[error("Token ttl of {requested}s exceeds the configured maximum of {max}s")]
    TtlExceedsPolicy {
        /// The rejected ttl.
        requested: u64,
        /// The configured maximum.
        max: u64,
    },

    /// The claims could not be signed.
    #[error("Failed to sign partner token: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),

    /// A token failed verification.
    #[error("Invalid partner token: {reason}")]
    Invalid {
        /// Why verification failed.
        reason: String,
    },
}

/// The claim set of a partner token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerClaims {
    /// Subject - the partner identifier.
    pub sub: String,

    /// Issuer - always [`TOKEN_ISSUER`].
    pub iss: String,

    /// Audience - always [`TOKEN_AUDIENCE`].
    pub aud: String,

    /// Issued at timestamp (Unix timestamp).
    pub iat: i64,

    /// Expiration timestamp (Unix timestamp).
    pub exp: i64,
}

impl PartnerClaims {
    /// Decodes and validates a partner token.
    ///
    /// Checks the HS256 signature against `secret`, the `exp` claim (with a
    /// 10 second leeway), and that `iss` and `aud` carry the fixed values.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] if any check fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use partner_api::{PartnerClaims, PartnerId, SharedSecret, TokenIssuer};
    ///
    /// let secret = SharedSecret::new("s3cret").unwrap();
    /// let issuer = TokenIssuer::new(PartnerId::new("partner-a").unwrap(), &secret);
    /// let token = issuer.issue(60).unwrap();
    ///
    /// let claims = PartnerClaims::verify(&token, &secret).unwrap();
    /// assert_eq!(claims.sub, "partner-a");
    /// assert_eq!(claims.exp - claims.iat, 60);
    /// ```
    pub fn verify(token: &str, secret: &SharedSecret) -> Result<Self, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = JWT_LEEWAY_SECS;
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_audience(&[TOKEN_AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        let key = DecodingKey::from_secret(secret.as_bytes());
        decode::<Self>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid {
                reason: e.to_string(),
            })
    }

    /// Returns the token lifetime in seconds.
    #[must_use]
    pub const fn ttl_seconds(&self) -> i64 {
        self.exp - self.iat
    }
}

/// Issues signed partner tokens.
///
/// The signing key is derived once from the shared secret; each call to
/// [`issue`](Self::issue) reads the clock and signs a fresh claim set.
/// Issuance has no side effects beyond reading the clock.
///
/// # Thread Safety
///
/// `TokenIssuer` is `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use partner_api::{PartnerId, SharedSecret, TokenIssuer};
///
/// let issuer = TokenIssuer::new(
///     PartnerId::new("partner-company-a").unwrap(),
///     &SharedSecret::new("s3cret").unwrap(),
/// );
///
/// let token = issuer.issue_default().unwrap();
/// assert_eq!(token.split('.').count(), 3);
/// ```
#[derive(Clone)]
pub struct TokenIssuer {
    partner_id: PartnerId,
    key: EncodingKey,
    max_ttl: Option<u64>,
}

// Verify TokenIssuer is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenIssuer>();
};

impl TokenIssuer {
    /// Creates an issuer for `partner_id` signing with `secret`.
    #[must_use]
    pub fn new(partner_id: PartnerId, secret: &SharedSecret) -> Self {
        Self {
            partner_id,
            key: EncodingKey::from_secret(secret.as_bytes()),
            max_ttl: None,
        }
    }

    /// Rejects any ttl above `max_ttl_seconds` at issuance.
    #[must_use]
    pub const fn with_max_ttl(mut self, max_ttl_seconds: u64) -> Self {
        self.max_ttl = Some(max_ttl_seconds);
        self
    }

    /// Returns the partner identifier used as the `sub` claim.
    #[must_use]
    pub const fn partner_id(&self) -> &PartnerId {
        &self.partner_id
    }

    /// Returns the configured maximum ttl, if any.
    #[must_use]
    pub const fn max_ttl(&self) -> Option<u64> {
        self.max_ttl
    }

    /// Issues a token valid for [`DEFAULT_TOKEN_TTL_SECS`], or for the
    /// configured maximum when that is shorter.
    ///
    /// # Errors
    ///
    /// See [`issue`](Self::issue).
    pub fn issue_default(&self) -> Result<String, TokenError> {
        self.issue(self.default_ttl())
    }

    /// Returns the ttl used by [`issue_default`](Self::issue_default).
    #[must_use]
    pub fn default_ttl(&self) -> u64 {
        self.max_ttl
            .map_or(DEFAULT_TOKEN_TTL_SECS, |max| max.min(DEFAULT_TOKEN_TTL_SECS))
    }

    /// Issues a token valid for `ttl_seconds` from now.
    ///
    /// # Errors
    ///
    /// - [`TokenError::InvalidTtl`] if `ttl_seconds` is zero
    /// - [`TokenError::TtlExceedsPolicy`] if a maximum is configured and exceeded
    /// - [`TokenError::Encoding`] if signing fails
    pub fn issue(&self, ttl_seconds: u64) -> Result<String, TokenError> {
        self.issue_at(ttl_seconds, Utc::now())
    }

    /// Issues a token as if the clock read `now`.
    pub(crate) fn issue_at(&self, ttl_seconds: u64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = self.claims_at(ttl_seconds, now)?;
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)?;

        tracing::debug!(
            partner_id = %self.partner_id,
            expires_at = claims.exp,
            "Issued partner token"
        );

        Ok(token)
    }

    fn claims_at(&self, ttl_seconds: u64, now: DateTime<Utc>) -> Result<PartnerClaims, TokenError> {
        if ttl_seconds == 0 {
            return Err(TokenError::InvalidTtl { ttl_seconds });
        }
        if let Some(max) = self.max_ttl {
            if ttl_seconds > max {
                return Err(TokenError::TtlExceedsPolicy {
                    requested: ttl_seconds,
                    max,
                });
            }
        }

        let iat = now.timestamp();
        let exp = i64::try_from(ttl_seconds)
            .ok()
            .and_then(|ttl| iat.checked_add(ttl))
            .ok_or(TokenError::InvalidTtl { ttl_seconds })?;

        Ok(PartnerClaims {
            sub: self.partner_id.as_ref().to_string(),
            iss: TOKEN_ISSUER.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
            iat,
            exp,
        })
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("partner_id", &self.partner_id)
            .field("max_ttl", &self.max_ttl)
            .finish_non_exhaustive()
    }
}
