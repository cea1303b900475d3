//! Validated newtypes shared across services.

mod price;
mod sku;

pub use price::Price;
pub use sku::{Sku, SkuError};
