//! Named Partner API operations.
//!
//! This module provides the [`PartnerClient`] type, whose methods are fixed
//! method/route pairs over [`HttpClient::execute`].

use crate::clients::{DispatchError, HttpClient, HttpMethod, Payload};
use crate::config::{ClientOptions, Credentials};
use crate::error::ConfigError;

/// Route for the order collection.
pub const ORDERS_PATH: &str = "/partner/api/order/";

/// Route for the product collection.
pub const PRODUCTS_PATH: &str = "/partner/api/product/";

/// Route for the user collection.
pub const USERS_PATH: &str = "/partner/api/user/";

/// Returns the route of a single order.
///
/// The identifier is percent-encoded so it always stays one path segment.
///
/// # Example
///
/// ```rust
/// use partner_api::clients::partner::order_path;
///
/// assert_eq!(order_path("42"), "/partner/api/order/42");
/// assert_eq!(order_path("a/b?c"), "/partner/api/order/a%2Fb%3Fc");
/// ```
#[must_use]
pub fn order_path(order_id: &str) -> String {
    format!("{ORDERS_PATH}{}", urlencoding::encode(order_id))
}

/// Client for the Partner API's order, product, and user operations.
///
/// Each method is a pure pass-through: it picks the method and route and
/// returns whatever the dispatcher returns.
///
/// # Thread Safety
///
/// `PartnerClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use partner_api::{ClientOptions, Credentials, FailureKind, PartnerClient};
/// use serde_json::json;
///
/// let client = PartnerClient::new(&Credentials::from_env()?, &ClientOptions::default())?;
///
/// let orders = client.list_orders().await?;
///
/// match client.create_order(json!({"product_id": "123", "quantity": 5})).await {
///     Ok(order) => println!("Created: {order}"),
///     Err(e) if e.kind() == FailureKind::Authorization => println!("Not permitted to create orders"),
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug)]
pub struct PartnerClient {
    http_client: HttpClient,
}

// Verify PartnerClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartnerClient>();
};

impl PartnerClient {
    /// Creates a new client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(credentials: &Credentials, options: &ClientOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(credentials, options)?,
        })
    }

    /// Wraps an existing [`HttpClient`].
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Lists orders (`GET /partner/api/order/`).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] as classified by [`HttpClient::request`].
    pub async fn list_orders(&self) -> Result<Payload, DispatchError> {
        self.http_client
            .execute(HttpMethod::Get, ORDERS_PATH, None)
            .await
    }

    /// Creates an order (`POST /partner/api/order/`).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] as classified by [`HttpClient::request`].
    pub async fn create_order(&self, order: serde_json::Value) -> Result<Payload, DispatchError> {
        self.http_client
            .execute(HttpMethod::Post, ORDERS_PATH, Some(order))
            .await
    }

    /// Updates an order (`PUT /partner/api/order/{order_id}`).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] as classified by [`HttpClient::request`].
    pub async fn update_order(
        &self,
        order_id: &str,
        order: serde_json::Value,
    ) -> Result<Payload, DispatchError> {
        self.http_client
            .execute(HttpMethod::Put, &order_path(order_id), Some(order))
            .await
    }

    /// Lists products (`GET /partner/api/product/`).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] as classified by [`HttpClient::request`].
    pub async fn list_products(&self) -> Result<Payload, DispatchError> {
        self.http_client
            .execute(HttpMethod::Get, PRODUCTS_PATH, None)
            .await
    }

    /// Creates a product (`POST /partner/api/product/`).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] as classified by [`HttpClient::request`].
    pub async fn create_product(
        &self,
        product: serde_json::Value,
    ) -> Result<Payload, DispatchError> {
        self.http_client
            .execute(HttpMethod::Post, PRODUCTS_PATH, Some(product))
            .await
    }

    /// Lists users (`GET /partner/api/user/`).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] as classified by [`HttpClient::request`].
    pub async fn list_users(&self) -> Result<Payload, DispatchError> {
        self.http_client
            .execute(HttpMethod::Get, USERS_PATH, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, PartnerId, SharedSecret};

    #[test]
    fn test_route_literals() {
        assert_eq!(ORDERS_PATH, "/partner/api/order/");
        assert_eq!(PRODUCTS_PATH, "/partner/api/product/");
        assert_eq!(USERS_PATH, "/partner/api/user/");
    }

    #[test]
    fn test_order_path_encodes_identifier() {
        assert_eq!(order_path("ord-1"), "/partner/api/order/ord-1");
        assert_eq!(order_path("../user/"), "/partner/api/order/..%2Fuser%2F");
    }

    #[test]
    fn test_client_wraps_http_client() {
        let credentials = Credentials::new(
            PartnerId::new("partner-company-a").unwrap(),
            SharedSecret::new("secret").unwrap(),
            BaseUrl::new("https://host/").unwrap(),
        );
        let client = PartnerClient::new(&credentials, &ClientOptions::default()).unwrap();

        assert_eq!(
            client.http_client().base_url().join(ORDERS_PATH),
            "https://host/partner/api/order/"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PartnerClient>();
    }
}
