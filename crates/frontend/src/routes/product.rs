//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use copperline_core::Product;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub product: Product,
}

/// Display one product.
///
/// An unknown SKU renders the error page with the catalog's 404.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<ProductTemplate> {
    let product = state.upstreams().catalog().product(&sku).await?;
    Ok(ProductTemplate { product })
}
