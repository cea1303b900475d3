//! Stub collaborator handlers.
//!
//! ```text
//! POST /payment - charge a card    -> 200 {"transactionid": "<uuid>"}
//! POST /ship    - request shipment -> 200 {"shippingid": "<uuid>"}
//! POST /email   - send an email    -> 200 {"success": "true"}
//! ```
//!
//! The payloads are deserialized strictly enough to exercise the checkout
//! orchestrator's contracts, then discarded.

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;
use uuid::Uuid;

use crate::config::StubsConfig;

/// Create the stub routes router.
pub fn routes() -> Router<StubsConfig> {
    Router::new()
        .route("/payment", post(payment))
        .route("/ship", post(ship))
        .route("/email", post(email))
}

#[derive(Debug, Deserialize)]
struct PaymentRequest {
    creditcard: String,
    amount: i64,
}

#[derive(Debug, Deserialize)]
struct ShipRequest {
    address: String,
    items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct EmailRequest {
    email: String,
}

/// Accept any charge and mint a transaction identifier.
#[instrument(skip(config, request))]
async fn payment(State(config): State<StubsConfig>, Json(request): Json<PaymentRequest>) -> Json<Value> {
    tokio::time::sleep(config.delay).await;

    let transactionid = Uuid::new_v4();
    tracing::info!(
        amount = request.amount,
        card_suffix = card_suffix(&request.creditcard),
        %transactionid,
        "processed payment"
    );

    Json(json!({ "transactionid": transactionid.to_string() }))
}

/// Accept any shipment request and mint a shipping identifier.
#[instrument(skip(config, request))]
async fn ship(State(config): State<StubsConfig>, Json(request): Json<ShipRequest>) -> Json<Value> {
    tokio::time::sleep(config.delay).await;

    let shippingid = Uuid::new_v4();
    tracing::info!(
        address = %request.address,
        items = request.items.len(),
        %shippingid,
        "processed shipment"
    );

    Json(json!({ "shippingid": shippingid.to_string() }))
}

/// Accept any confirmation email request.
#[instrument(skip(config, request))]
async fn email(State(config): State<StubsConfig>, Json(request): Json<EmailRequest>) -> Json<Value> {
    tokio::time::sleep(config.delay).await;

    tracing::info!(recipient = %request.email, "sent confirmation email");

    Json(json!({ "success": "true" }))
}

/// The last four characters of a card number; never log the whole thing.
fn card_suffix(creditcard: &str) -> &str {
    let len = creditcard.len();
    creditcard.get(len.saturating_sub(4)..).unwrap_or("")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> Router {
        let config = StubsConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8090,
            delay: Duration::ZERO,
        };
        routes().with_state(config)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_payment_mints_uuid_transaction_id() {
        let response = test_app()
            .oneshot(post_json(
                "/payment",
                json!({ "creditcard": "123-456-789cc", "amount": 6100 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let id = body["transactionid"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_ship_mints_uuid_shipping_id() {
        let response = test_app()
            .oneshot(post_json(
                "/ship",
                json!({ "address": "testlane 1", "items": [{ "sku": "SKU1", "qty": 2 }] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let id = body["shippingid"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_email_reports_success() {
        let response = test_app()
            .oneshot(post_json("/email", json!({ "email": "test@test.com" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "success": "true" }));
    }

    #[test]
    fn test_card_suffix() {
        assert_eq!(card_suffix("123-456-789cc"), "89cc");
        assert_eq!(card_suffix("cc"), "cc");
        assert_eq!(card_suffix(""), "");
    }
}
