//! # Partner API Rust Client
//!
//! A Rust client for partner-facing HTTP APIs that authenticate callers with
//! short-lived HS256 tokens signed from a shared secret.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated credentials via [`Credentials`] and [`CredentialsBuilder`]
//! - Token signing and verification via [`TokenIssuer`] and [`PartnerClaims`]
//! - An async dispatcher, [`HttpClient`], that attaches a fresh bearer token
//!   to every request and classifies the response
//! - The order, product, and user operations via [`PartnerClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use partner_api::{BaseUrl, ClientOptions, Credentials, PartnerClient, PartnerId, SharedSecret};
//!
//! let credentials = Credentials::builder()
//!     .partner_id(PartnerId::new("partner-company-a").unwrap())
//!     .shared_secret(SharedSecret::new("your-shared-secret").unwrap())
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = PartnerClient::new(&credentials, &ClientOptions::default()).unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use partner_api::{FailureKind, PartnerClient};
//! use serde_json::json;
//!
//! let orders = client.list_orders().await?;
//! println!("Orders: {orders}");
//!
//! match client.list_users().await {
//!     Ok(users) => println!("Users: {users}"),
//!     Err(e) if e.kind() == FailureKind::Authorization => println!("No access to users"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Credentials are passed explicitly; the dispatcher
//!   never reads the environment
//! - **Fail-fast validation**: An empty secret is rejected at construction
//! - **Typed outcomes**: Failures are values with a [`FailureKind`], not panics
//! - **No hidden retries**: Each call is exactly one round trip
//! - **Thread-safe**: All client types are `Send + Sync`

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{PartnerClaims, TokenError, TokenIssuer, DEFAULT_TOKEN_TTL_SECS};
pub use config::{
    BaseUrl, ClientOptions, ClientOptionsBuilder, Credentials, CredentialsBuilder, PartnerId,
    SharedSecret,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DispatchError, ErrorDetail, FailureKind, HttpClient, HttpMethod, HttpRequest,
    HttpRequestBuilder, PartnerClient, Payload,
};
