//! Catalog route handlers.
//!
//! ```text
//! GET  /product        - list all products
//! GET  /product/{sku}  - fetch one product (404 when absent)
//! POST /product        - create a product (400 invalid, 409 duplicate SKU)
//! ```

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use copperline_core::{Price, Product, Sku};

use crate::error::AppError;
use crate::repository::ProductRepository;
use crate::state::AppState;

/// Create the product routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/product", get(list_products).post(create_product))
        .route("/product/{sku}", get(get_product))
}

/// Payload for creating a product.
///
/// Required-field validation runs before the existence check, so an invalid
/// payload never reaches the database.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 64, message = "sku is required"))]
    pub sku: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

impl CreateProductRequest {
    /// Convert into the wire product, enforcing SKU shape.
    fn into_product(self) -> Result<Product, AppError> {
        let sku = Sku::parse(&self.sku).map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Product {
            sku,
            name: self.name,
            price: Price::from_minor_units(self.price),
            description: self.description,
        })
    }
}

/// List every product in the catalog.
#[instrument(skip(state))]
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// Fetch a single product by SKU.
#[instrument(skip(state))]
async fn get_product(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = ProductRepository::new(state.pool())
        .find_by_sku(&sku)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(product))
}

/// Create a new product.
///
/// Validation precedes the existence check; the unique index backstops the
/// check against concurrent creates of the same SKU.
#[instrument(skip(state, payload))]
async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let product = request.into_product()?;

    let repository = ProductRepository::new(state.pool());
    if repository.find_by_sku(product.sku.as_str()).await?.is_some() {
        return Err(AppError::DuplicateSku);
    }

    let created = repository.insert(&product).await?;
    tracing::info!(sku = %created.sku, "created product");

    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProductRequest {
        CreateProductRequest {
            sku: "SKU1".to_string(),
            name: "Raspberry Pi".to_string(),
            price: 3000,
            description: "A small computer.".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let request = CreateProductRequest {
            sku: String::new(),
            ..valid_request()
        };
        assert!(request.validate().is_err());

        let request = CreateProductRequest {
            name: String::new(),
            ..valid_request()
        };
        assert!(request.validate().is_err());

        let request = CreateProductRequest {
            description: String::new(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let request = CreateProductRequest {
            price: -1,
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_product_enforces_sku_shape() {
        let request = CreateProductRequest {
            sku: "has spaces".to_string(),
            ..valid_request()
        };
        assert!(matches!(
            request.into_product(),
            Err(AppError::Validation(_))
        ));

        let product = valid_request().into_product().unwrap();
        assert_eq!(product.sku.as_str(), "SKU1");
        assert_eq!(product.price, Price::from_minor_units(3000));
    }
}
