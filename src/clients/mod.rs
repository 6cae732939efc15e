//! HTTP client types for Partner API communication.
//!
//! This module provides the request pipeline: it signs a bearer token,
//! performs the call, and classifies the outcome.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async dispatcher (`execute` / `request`)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Payload`]: The decoded body of a successful response
//! - [`DispatchError`] / [`FailureKind`]: The classified failure
//! - [`partner::PartnerClient`]: The named order/product/user operations
//!
//! # Classification
//!
//! | response | outcome |
//! |---|---|
//! | 2xx, body | `Ok(Payload::Json)` (or `Payload::Text` if not JSON) |
//! | 2xx, no body | `Ok(Payload::Empty)` |
//! | 401 | `Err(DispatchError::Authentication)` |
//! | 403 | `Err(DispatchError::Authorization)` |
//! | other | `Err(DispatchError::Remote)` |
//! | none | `Err(DispatchError::Transport)` |
//!
//! Requests are attempted exactly once.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod partner;

pub use errors::{DispatchError, ErrorDetail, FailureKind};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::Payload;

pub use partner::PartnerClient;
