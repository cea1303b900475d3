//! HTTP clients for the cart, catalog, and checkout services.
//!
//! The gateway speaks the same JSON contracts as the orchestrator. A
//! non-success answer becomes [`UpstreamError::Status`] carrying the
//! originating status code and the service's message, which the error page
//! renders verbatim.

use serde::Serialize;
use thiserror::Error;

use copperline_core::{Cart, CartItem, CheckoutReceipt, Product, Sku};

use crate::config::FrontendConfig;

/// Errors from an upstream service call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request failed at the transport level or the body did not decode.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Status {
        /// The service's status code.
        status: reqwest::StatusCode,
        /// The service's error message, or the status line when the body
        /// carried none.
        message: String,
    },
}

/// Extract an error message from a failure response.
async fn status_error(response: reqwest::Response) -> UpstreamError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                status.to_string()
            } else {
                trimmed.to_string()
            }
        });

    UpstreamError::Status { status, message }
}

/// The upstream service clients, built once and shared via `AppState`.
#[derive(Clone)]
pub struct Upstreams {
    cart: CartClient,
    catalog: CatalogClient,
    checkout: CheckoutClient,
}

impl Upstreams {
    /// Build the service clients from configuration, sharing one connection
    /// pool.
    #[must_use]
    pub fn new(config: &FrontendConfig) -> Self {
        let client = reqwest::Client::new();

        Self {
            cart: CartClient {
                client: client.clone(),
                base_url: config.cart_url.clone(),
            },
            catalog: CatalogClient {
                client: client.clone(),
                base_url: config.product_url.clone(),
            },
            checkout: CheckoutClient {
                client,
                base_url: config.checkout_url.clone(),
            },
        }
    }

    /// Cart service client.
    #[must_use]
    pub const fn cart(&self) -> &CartClient {
        &self.cart
    }

    /// Catalog service client.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Checkout service client.
    #[must_use]
    pub const fn checkout(&self) -> &CheckoutClient {
        &self.checkout
    }
}

/// Client for the cart service.
#[derive(Clone)]
pub struct CartClient {
    client: reqwest::Client,
    base_url: String,
}

impl CartClient {
    /// Store one item in the shopper's cart.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on transport failure or any status other
    /// than 201.
    pub async fn add_item(
        &self,
        sessionid: &str,
        sku: Sku,
        qty: u32,
    ) -> Result<(), UpstreamError> {
        let cart = Cart {
            items: vec![CartItem { sku, qty }],
        };

        let response = self
            .client
            .post(format!("{}/cart/{sessionid}", self.base_url))
            .json(&cart)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::CREATED {
            return Err(status_error(response).await);
        }

        Ok(())
    }

    /// Fetch the shopper's cart.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on transport failure or a non-success status.
    pub async fn fetch(&self, sessionid: &str) -> Result<Cart, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/cart/{sessionid}", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Empty the shopper's cart.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on transport failure or a non-success status.
    pub async fn clear(&self, sessionid: &str) -> Result<(), UpstreamError> {
        let response = self
            .client
            .delete(format!("{}/cart/{sessionid}", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(())
    }
}

/// Client for the catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// List every catalog product.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on transport failure or a non-success status.
    pub async fn list(&self) -> Result<Vec<Product>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/product", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch one product by SKU.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on transport failure or a non-success status
    /// (a 404 for an unknown SKU included).
    pub async fn product(&self, sku: &str) -> Result<Product, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/product/{sku}", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response.json().await?)
    }
}

/// Client for the checkout service.
#[derive(Clone)]
pub struct CheckoutClient {
    client: reqwest::Client,
    base_url: String,
}

/// The payload posted to the checkout orchestrator.
#[derive(Debug, Serialize)]
pub struct CheckoutSubmission {
    pub sessionid: String,
    pub address: String,
    pub email: String,
    pub creditcard: String,
}

impl CheckoutClient {
    /// Submit a checkout and return the receipt.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on transport failure or a non-success status;
    /// the orchestrator's status and message pass through for rendering.
    pub async fn submit(
        &self,
        submission: &CheckoutSubmission,
    ) -> Result<CheckoutReceipt, UpstreamError> {
        let response = self
            .client
            .post(format!("{}/checkout", self.base_url))
            .json(submission)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response.json().await?)
    }
}
