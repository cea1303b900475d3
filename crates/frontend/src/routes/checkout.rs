//! Checkout route handlers.
//!
//! The frontend collects the shopper's details and hands the whole flow to
//! the checkout orchestrator. Whatever the orchestrator answers - receipt,
//! validation error, collaborator failure - is rendered with its status and
//! message intact.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use copperline_core::CheckoutReceipt;

use crate::clients::CheckoutSubmission;
use crate::error::Result;
use crate::filters;
use crate::session;
use crate::state::AppState;

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {}

/// Confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub receipt: CheckoutReceipt,
}

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub address: String,
    pub email: String,
    pub creditcard: String,
}

/// Display the checkout form.
#[instrument]
pub async fn form() -> CheckoutTemplate {
    CheckoutTemplate {}
}

/// Submit the checkout to the orchestrator and render the confirmation.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<ConfirmationTemplate> {
    let shopper = session::shopper_id(&session).await?;

    let submission = CheckoutSubmission {
        sessionid: shopper,
        address: form.address,
        email: form.email,
        creditcard: form.creditcard,
    };

    let receipt = state.upstreams().checkout().submit(&submission).await?;
    tracing::info!(transaction = %receipt.transactionid, "checkout completed");

    Ok(ConfirmationTemplate { receipt })
}
