//! HTTP clients for the checkout collaborators.
//!
//! One client struct per collaborator, all sharing a single
//! `reqwest::Client` connection pool. Every call is a plain JSON request;
//! a non-success status becomes [`CollaboratorError::Status`] carrying the
//! collaborator's error message where one can be extracted from the body.
//!
//! No retries, no explicit timeouts beyond the transport defaults: a hung
//! collaborator hangs the calling request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use copperline_core::{Cart, CartItem, Price, Product, Sku};

use crate::config::CheckoutConfig;

/// Errors from a collaborator call.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The request failed at the transport level or the body did not decode.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("{message}")]
    Status {
        /// The collaborator's status code.
        status: reqwest::StatusCode,
        /// The collaborator's error message, or the status line when the
        /// body carried none.
        message: String,
    },
}

/// Extract an error message from a collaborator's failure response.
///
/// Prefers the `{"error": ...}` body every Copperline service emits, falls
/// back to raw body text, then to the status line.
async fn status_error(response: reqwest::Response) -> CollaboratorError {
    #[derive(Deserialize)]
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

    CollaboratorError::Status { status, message }
}

/// All collaborator clients, built once and shared via `AppState`.
#[derive(Clone)]
pub struct Collaborators {
    cart: CartClient,
    catalog: CatalogClient,
    payment: PaymentClient,
    shipping: ShippingClient,
    email: EmailClient,
}

impl Collaborators {
    /// Build the collaborator clients from configuration, sharing one
    /// connection pool.
    #[must_use]
    pub fn new(config: &CheckoutConfig) -> Self {
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
            payment: PaymentClient {
                client: client.clone(),
                base_url: config.payment_url.clone(),
            },
            shipping: ShippingClient {
                client: client.clone(),
                base_url: config.shipping_url.clone(),
            },
            email: EmailClient {
                client,
                base_url: config.email_url.clone(),
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

    /// Payment endpoint client.
    #[must_use]
    pub const fn payment(&self) -> &PaymentClient {
        &self.payment
    }

    /// Shipping endpoint client.
    #[must_use]
    pub const fn shipping(&self) -> &ShippingClient {
        &self.shipping
    }

    /// Email endpoint client.
    #[must_use]
    pub const fn email(&self) -> &EmailClient {
        &self.email
    }
}

/// Client for the cart service.
#[derive(Clone)]
pub struct CartClient {
    client: reqwest::Client,
    base_url: String,
}

impl CartClient {
    /// Fetch the session's cart.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` on transport failure or a non-success
    /// status.
    pub async fn fetch(&self, sessionid: &str) -> Result<Cart, CollaboratorError> {
        tracing::debug!("calling cart service");
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
}

/// Client for the catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Fetch one product by SKU.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` on transport failure or a non-success
    /// status (a 404 for an unknown SKU included).
    pub async fn product(&self, sku: &Sku) -> Result<Product, CollaboratorError> {
        tracing::debug!(%sku, "calling catalog service");
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

/// Client for the payment endpoint.
#[derive(Clone)]
pub struct PaymentClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct PaymentRequest<'a> {
    creditcard: &'a str,
    amount: Price,
}

#[derive(Deserialize)]
struct PaymentResponse {
    transactionid: String,
}

impl PaymentClient {
    /// Charge the credit card for the given amount, returning the
    /// collaborator's transaction identifier.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` on transport failure or a non-success
    /// status.
    pub async fn charge(
        &self,
        creditcard: &str,
        amount: Price,
    ) -> Result<String, CollaboratorError> {
        tracing::debug!(%amount, "calling payment service");
        let response = self
            .client
            .post(format!("{}/payment", self.base_url))
            .json(&PaymentRequest { creditcard, amount })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let payment: PaymentResponse = response.json().await?;
        Ok(payment.transactionid)
    }
}

/// Client for the shipping endpoint.
#[derive(Clone)]
pub struct ShippingClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ShipRequest<'a> {
    address: &'a str,
    items: &'a [CartItem],
}

#[derive(Deserialize)]
struct ShipResponse {
    shippingid: String,
}

impl ShippingClient {
    /// Request shipment of the items to the address, returning the
    /// collaborator's shipping identifier.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` on transport failure or a non-success
    /// status.
    pub async fn ship(
        &self,
        address: &str,
        items: &[CartItem],
    ) -> Result<String, CollaboratorError> {
        tracing::debug!("calling shipping service");
        let response = self
            .client
            .post(format!("{}/ship", self.base_url))
            .json(&ShipRequest { address, items })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let shipment: ShipResponse = response.json().await?;
        Ok(shipment.shippingid)
    }
}

/// Client for the email endpoint.
#[derive(Clone)]
pub struct EmailClient {
    client: reqwest::Client,
    base_url: String,
}

impl EmailClient {
    /// Send the order confirmation email.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` on transport failure or a non-success
    /// status.
    pub async fn send_confirmation(&self, email: &str) -> Result<(), CollaboratorError> {
        tracing::debug!("calling email service");
        let response = self
            .client
            .post(format!("{}/email", self.base_url))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(())
    }
}
