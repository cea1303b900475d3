//! JSON bodies exchanged between services.
//!
//! Field names match the wire format exactly (`sku`, `qty`, `transactionid`,
//! ...) so every service serializes the same JSON for the same entity.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Sku};

/// One line of a shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product key.
    pub sku: Sku,
    /// Stored quantity. Repeated adds of the same SKU overwrite this value,
    /// they never sum.
    pub qty: u32,
}

/// A shopping cart as returned by the cart service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart lines. Always present on the wire; an unknown session yields an
    /// empty list, never an error.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product key.
    pub sku: Sku,
    /// Display name.
    pub name: String,
    /// Unit price in the smallest currency unit.
    pub price: Price,
    /// Display description.
    pub description: String,
}

/// The identifiers returned by a completed checkout.
///
/// Both are opaque strings minted by the payment and shipping collaborators;
/// the orchestrator does not validate their format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Payment transaction identifier.
    pub transactionid: String,
    /// Shipment identifier.
    pub shippingid: String,
}
