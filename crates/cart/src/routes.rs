//! Cart route handlers.
//!
//! The cart API is the storage contract the checkout orchestrator and the
//! frontend gateway rely on:
//!
//! ```text
//! POST   /cart/{sessionid}  - write items (201, last write per SKU wins)
//! GET    /cart/{sessionid}  - read items (200, empty list for unknown session)
//! DELETE /cart/{sessionid}  - drop the cart (200, even when already empty)
//! ```

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use copperline_core::{Cart, CartItem};

use crate::error::AppError;
use crate::state::AppState;

/// Body of a cart write. Unlike the wire [`Cart`], `items` is mandatory
/// here: a write without items is a client error, not a no-op.
#[derive(Debug, Deserialize)]
struct AddItemsRequest {
    items: Vec<CartItem>,
}

/// Create the cart routes router.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/cart/{sessionid}",
        post(add_to_cart).get(get_cart).delete(empty_cart),
    )
}

/// Write the posted items into the session's cart.
///
/// Each item's quantity is set with hash semantics: posting a SKU that is
/// already stored overwrites its quantity. A failing write aborts the batch;
/// earlier writes in the same batch stay applied.
#[instrument(skip(state, payload))]
async fn add_to_cart(
    State(state): State<AppState>,
    Path(sessionid): Path<String>,
    payload: Result<Json<AddItemsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    state.store().put_items(&sessionid, &request.items).await?;

    tracing::debug!(session = %sessionid, items = request.items.len(), "stored cart items");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "added items to cart" })),
    ))
}

/// Return every item stored for the session.
///
/// An unknown session is not an error; it yields an empty item list.
#[instrument(skip(state))]
async fn get_cart(
    State(state): State<AppState>,
    Path(sessionid): Path<String>,
) -> Result<Json<Cart>, AppError> {
    let items = state.store().get_items(&sessionid).await?;
    Ok(Json(Cart { items }))
}

/// Drop the session's cart.
///
/// Deleting a cart that does not exist is a success.
#[instrument(skip(state))]
async fn empty_cart(
    State(state): State<AppState>,
    Path(sessionid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.store().clear(&sessionid).await?;
    Ok(Json(json!({ "message": "cart emptied" })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::CartConfig;
    use crate::store::memory::MemoryCartStore;

    use super::*;

    fn test_config() -> CartConfig {
        CartConfig {
            redis_host: "localhost:6379".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 8081,
            sentry_dsn: None,
        }
    }

    fn test_app(store: MemoryCartStore) -> Router {
        routes().with_state(AppState::new(test_config(), store))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_items(sessionid: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/cart/{sessionid}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_then_get_returns_stored_item() {
        let app = test_app(MemoryCartStore::default());

        let response = app
            .clone()
            .oneshot(post_items(
                "sessiontest",
                r#"{"items":[{"sku":"test","qty":22}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "added items to cart" })
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/cart/sessiontest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "items": [{ "sku": "test", "qty": 22 }] })
        );
    }

    #[tokio::test]
    async fn test_repeated_add_overwrites_quantity() {
        let app = test_app(MemoryCartStore::default());

        for body in [
            r#"{"items":[{"sku":"test","qty":5}]}"#,
            r#"{"items":[{"sku":"test","qty":22}]}"#,
        ] {
            let response = app
                .clone()
                .oneshot(post_items("sessiontest", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/cart/sessiontest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        // Overwritten, not summed
        assert_eq!(
            body_json(response).await,
            json!({ "items": [{ "sku": "test", "qty": 22 }] })
        );
    }

    #[tokio::test]
    async fn test_get_unknown_session_is_empty_not_error() {
        let app = test_app(MemoryCartStore::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/cart/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "items": [] }));
    }

    #[tokio::test]
    async fn test_empty_cart_without_entries_succeeds() {
        let app = test_app(MemoryCartStore::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/cart/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "message": "cart emptied" }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test_app(MemoryCartStore::default());

        let response = app
            .clone()
            .oneshot(post_items("sessiontest", r#"{"items": "nope"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());

        // items is mandatory on writes
        let response = app.oneshot(post_items("sessiontest", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let app = test_app(MemoryCartStore::failing());

        let response = app
            .oneshot(post_items(
                "sessiontest",
                r#"{"items":[{"sku":"test","qty":1}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await["error"].is_string());
    }
}
