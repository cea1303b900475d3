//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use copperline_core::Product;

use crate::error::Result;
use crate::filters;
use crate::session;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<Product>,
}

/// Display the home page with every catalog product.
///
/// Touching the session here is what issues the shopper cookie on the first
/// visit.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    session::shopper_id(&session).await?;

    let products = state.upstreams().catalog().list().await?;
    Ok(HomeTemplate { products })
}
