//! Cart route handlers.
//!
//! The cart page joins the cart service's lines with catalog records purely
//! for display; the authoritative pricing happens again in the checkout
//! orchestrator with the same integer arithmetic.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use copperline_core::{Cart, Price, Product, Sku};

use crate::error::Result;
use crate::filters;
use crate::session;
use crate::state::AppState;

/// One display row of the cart page.
pub struct ItemRow {
    pub sku: Sku,
    pub name: String,
    pub qty: u32,
    pub price: Price,
    pub line_total: Price,
}

/// Cart display data for templates.
pub struct CartView {
    pub rows: Vec<ItemRow>,
    pub total: Price,
}

impl CartView {
    /// Whether there is anything to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Join cart lines with catalog records and sum the total.
///
/// A line whose SKU is missing from the catalog still renders (with an empty
/// name and a zero price) rather than hiding what the cart store holds.
fn build_cart_view(cart: &Cart, products: &[Product]) -> CartView {
    let mut rows = Vec::new();
    let mut total = Price::ZERO;

    for line in &cart.items {
        let (name, price) = products
            .iter()
            .find(|product| product.sku == line.sku)
            .map_or_else(
                || (String::new(), Price::ZERO),
                |product| (product.name.clone(), product.price),
            );

        let line_total = price.line_total(line.qty);
        total = total.add(line_total);

        rows.push(ItemRow {
            sku: line.sku.clone(),
            name,
            qty: line.qty,
            price,
            line_total,
        });
    }

    CartView { rows, total }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub sku: String,
    pub qty: Option<u32>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub cart: CartView,
}

/// Display the cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartTemplate> {
    let shopper = session::shopper_id(&session).await?;

    let cart = state.upstreams().cart().fetch(&shopper).await?;
    let products = state.upstreams().catalog().list().await?;

    Ok(CartTemplate {
        cart: build_cart_view(&cart, &products),
    })
}

/// Add an item to the cart, then return to the cart page.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let shopper = session::shopper_id(&session).await?;
    let qty = form.qty.unwrap_or(1);

    state
        .upstreams()
        .cart()
        .add_item(&shopper, Sku::from(form.sku), qty)
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Empty the cart, then return home.
#[instrument(skip(state, session))]
pub async fn empty(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let shopper = session::shopper_id(&session).await?;

    state.upstreams().cart().clear(&shopper).await?;

    Ok(Redirect::to("/"))
}
