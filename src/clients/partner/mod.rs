//! Partner API operations for orders, products, and users.
//!
//! This module provides [`PartnerClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient), with one method per
//! operation the Partner API exposes:
//!
//! | method | HTTP | route |
//! |---|---|---|
//! | `list_orders` | GET | `/partner/api/order/` |
//! | `create_order` | POST | `/partner/api/order/` |
//! | `update_order` | PUT | `/partner/api/order/{id}` |
//! | `list_products` | GET | `/partner/api/product/` |
//! | `create_product` | POST | `/partner/api/product/` |
//! | `list_users` | GET | `/partner/api/user/` |
//!
//! Which operations succeed depends on the scopes granted to the partner
//! (e.g. `orders:write`). A missing scope surfaces as
//! [`FailureKind::Authorization`](crate::FailureKind::Authorization).

mod client;

pub use client::{order_path, PartnerClient, ORDERS_PATH, PRODUCTS_PATH, USERS_PATH};
