//! HTTP route handlers for the frontend.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page (product listing; issues shopper cookie)
//! GET  /health            - Health check
//!
//! # Products
//! GET  /product/{sku}     - Product detail
//!
//! # Cart
//! GET  /cart              - Cart page (display join against the catalog)
//! POST /cart              - Add an item, then back to the cart
//! POST /cart/empty        - Empty the cart, then back home
//!
//! # Checkout
//! GET  /checkout          - Checkout form
//! POST /checkout          - Submit checkout, render the confirmation
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod product;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the frontend.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/product/{sku}", get(product::show))
        .route("/cart", get(cart::show).post(cart::add))
        .route("/cart/empty", post(cart::empty))
        .route("/checkout", get(checkout::form).post(checkout::submit))
}
