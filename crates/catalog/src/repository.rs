//! Product repository for database operations.
//!
//! Queries use the runtime sqlx API (`query_as` over a derived `FromRow`)
//! so the crate builds without a live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use copperline_core::{Price, Product, Sku};

use crate::error::AppError;

/// A `product` table row.
///
/// `created_at`/`updated_at` are bookkeeping columns and are not part of the
/// wire [`Product`].
#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            sku: Sku::from(row.sku),
            name: row.name,
            price: Price::from_minor_units(row.price),
            description: row.description,
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, sku, name, price, description, created_at, updated_at FROM product";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every product, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Look up a product by SKU.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_COLUMNS} WHERE sku = $1"))
            .bind(sku)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// Insert a new product and return the created record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateSku` when the unique index rejects the
    /// SKU (the handler's existence check can race a concurrent insert; the
    /// index is authoritative), `AppError::Database` otherwise.
    pub async fn insert(&self, product: &Product) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO product (sku, name, price, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, sku, name, price, description, created_at, updated_at",
        )
        .bind(product.sku.as_str())
        .bind(&product.name)
        .bind(product.price.minor_units())
        .bind(&product.description)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateSku,
            other => AppError::Database(other),
        })?;

        Ok(Product::from(row))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_wire_product() {
        let row = ProductRow {
            id: 1,
            sku: "SKU1".to_string(),
            name: "Raspberry Pi".to_string(),
            price: 3000,
            description: "A small computer.".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let product = Product::from(row);
        assert_eq!(product.sku.as_str(), "SKU1");
        assert_eq!(product.price, Price::from_minor_units(3000));

        // Timestamps stay out of the wire format
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("created_at").is_none());
    }
}
