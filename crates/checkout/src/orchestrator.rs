//! The checkout sequence.
//!
//! Checkout is a linear state machine over sequential collaborator calls:
//!
//! ```text
//! validate -> fetch cart -> price -> charge -> ship -> confirm -> respond
//! ```
//!
//! There are no retries, no idempotency keys, and no compensation: a
//! shipment failure after a successful charge does not refund the charge.
//! What the orchestrator does instead is record which stages completed and
//! return that record (plus the transaction identifier, once one exists) to
//! the caller on failure, so partial completion is reported rather than
//! silently dropped.
//!
//! A cart-fetch failure is a hard abort with its own error. Earlier
//! revisions of this flow disagreed on whether to abort or continue with an
//! empty cart; continuing would charge nothing and ship nothing while
//! reporting success, so the abort wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use copperline_core::{CheckoutReceipt, Price, Sku};

use crate::clients::{Collaborators, CollaboratorError};

/// The information required to perform a checkout.
///
/// All four fields must be non-empty; validation happens before any
/// collaborator is called.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "sessionid is required"))]
    pub sessionid: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "creditcard is required"))]
    pub creditcard: String,
}

/// A stage of the checkout sequence that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    CartFetched,
    Priced,
    Charged,
    Shipped,
    ConfirmationSent,
}

/// A failed checkout, carrying how far the sequence got.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct CheckoutFailure {
    /// Stages that completed before the failure, in order.
    pub completed: Vec<CheckoutStage>,
    /// The payment transaction identifier, when the charge had already
    /// succeeded. Reported so the caller can reconcile; never refunded here.
    pub transaction_id: Option<String>,
    /// What went wrong.
    #[source]
    pub kind: FailureKind,
}

/// The step that failed a checkout.
#[derive(Debug, Error)]
pub enum FailureKind {
    #[error("cart service unavailable: {0}")]
    Cart(#[source] CollaboratorError),

    #[error("price lookup failed for sku {sku}: {source}")]
    Pricing {
        sku: Sku,
        #[source]
        source: CollaboratorError,
    },

    #[error("payment failed: {0}")]
    Payment(#[source] CollaboratorError),

    #[error("shipment failed: {0}")]
    Shipping(#[source] CollaboratorError),
}

/// Run the checkout sequence for a validated request.
///
/// # Errors
///
/// Returns [`CheckoutFailure`] naming the failed step and every stage that
/// had already completed. The confirmation email is the one step whose
/// failure is only logged.
pub async fn run(
    collaborators: &Collaborators,
    request: &CheckoutRequest,
) -> Result<CheckoutReceipt, CheckoutFailure> {
    let mut completed = Vec::new();

    // Fetch the cart; a dead cart service is a hard abort, never an empty cart
    let cart = match collaborators.cart().fetch(&request.sessionid).await {
        Ok(cart) => cart,
        Err(e) => {
            return Err(CheckoutFailure {
                completed,
                transaction_id: None,
                kind: FailureKind::Cart(e),
            });
        }
    };
    completed.push(CheckoutStage::CartFetched);

    // Price every line against the catalog; any lookup failure aborts
    let mut total = Price::ZERO;
    for item in &cart.items {
        let product = match collaborators.catalog().product(&item.sku).await {
            Ok(product) => product,
            Err(e) => {
                return Err(CheckoutFailure {
                    completed,
                    transaction_id: None,
                    kind: FailureKind::Pricing {
                        sku: item.sku.clone(),
                        source: e,
                    },
                });
            }
        };
        total = total.add(product.price.line_total(item.qty));
    }
    completed.push(CheckoutStage::Priced);

    // Charge the card
    let transactionid = match collaborators
        .payment()
        .charge(&request.creditcard, total)
        .await
    {
        Ok(id) => id,
        Err(e) => {
            return Err(CheckoutFailure {
                completed,
                transaction_id: None,
                kind: FailureKind::Payment(e),
            });
        }
    };
    completed.push(CheckoutStage::Charged);

    // Request shipment; the completed charge is reported, not reversed
    let shippingid = match collaborators
        .shipping()
        .ship(&request.address, &cart.items)
        .await
    {
        Ok(id) => id,
        Err(e) => {
            return Err(CheckoutFailure {
                completed,
                transaction_id: Some(transactionid),
                kind: FailureKind::Shipping(e),
            });
        }
    };
    completed.push(CheckoutStage::Shipped);

    // Confirmation email failure is logged but never fails the checkout
    match collaborators.email().send_confirmation(&request.email).await {
        Ok(()) => {
            completed.push(CheckoutStage::ConfirmationSent);
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to send confirmation email");
        }
    }

    tracing::info!(
        session = %request.sessionid,
        total = %total,
        "successfully checked out session"
    );

    Ok(CheckoutReceipt {
        transactionid,
        shippingid,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_request() -> CheckoutRequest {
        CheckoutRequest {
            sessionid: "sessiontest".to_string(),
            address: "testlane 1".to_string(),
            email: "test@test.com".to_string(),
            creditcard: "123-456-789cc".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_each_empty_field_fails_validation() {
        for field in ["sessionid", "address", "email", "creditcard"] {
            let mut request = valid_request();
            match field {
                "sessionid" => request.sessionid = String::new(),
                "address" => request.address = String::new(),
                "email" => request.email = String::new(),
                _ => request.creditcard = String::new(),
            }
            let err = request.validate().unwrap_err();
            assert!(err.to_string().contains("required"), "field: {field}");
        }
    }

    #[test]
    fn test_stage_wire_names() {
        let stages = vec![
            CheckoutStage::CartFetched,
            CheckoutStage::Priced,
            CheckoutStage::Charged,
            CheckoutStage::Shipped,
            CheckoutStage::ConfirmationSent,
        ];
        assert_eq!(
            serde_json::to_value(&stages).unwrap(),
            serde_json::json!([
                "cart_fetched",
                "priced",
                "charged",
                "shipped",
                "confirmation_sent"
            ])
        );
    }
}
