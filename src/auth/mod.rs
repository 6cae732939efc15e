//! Authentication types for the Partner API client.
//!
//! Partners authenticate by presenting a short-lived HS256 JWT as a bearer
//! credential. There is no OAuth exchange: the token is signed locally with
//! the shared secret issued by the API provider.
//!
//! - [`TokenIssuer`]: Signs a fresh token for the configured partner
//! - [`PartnerClaims`]: The claim set, with verification against a secret
//!
//! # Example
//!
//! ```rust
//! use partner_api::auth::{PartnerClaims, TokenIssuer, TOKEN_AUDIENCE};
//! use partner_api::{PartnerId, SharedSecret};
//!
//! let secret = SharedSecret::new("s3cret").unwrap();
//! let issuer = TokenIssuer::new(PartnerId::new("partner-a").unwrap(), &secret);
//!
//! let token = issuer.issue_default().unwrap();
//! let claims = PartnerClaims::verify(&token, &secret).unwrap();
//! assert_eq!(claims.aud, TOKEN_AUDIENCE);
//! ```

mod token;

pub use token::{
    PartnerClaims, TokenError, TokenIssuer, DEFAULT_TOKEN_TTL_SECS, TOKEN_AUDIENCE, TOKEN_ISSUER,
};
