//! Cart service end-to-end tests (requires running services and Redis).

#![allow(clippy::unwrap_used)]

use serde_json::json;

use copperline_integration_tests::{TestContext, enabled};

#[tokio::test]
async fn add_then_get_round_trips_exactly() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();
    let session = ctx.fresh_session();

    let resp = ctx
        .client
        .post(format!("{}/cart/{session}", ctx.cart_url))
        .json(&json!({ "items": [{ "sku": "test", "qty": 22 }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let resp = ctx
        .client
        .get(format!("{}/cart/{session}", ctx.cart_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "items": [{ "sku": "test", "qty": 22 }] }));
}

#[tokio::test]
async fn repeated_add_overwrites_not_sums() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();
    let session = ctx.fresh_session();

    for qty in [5, 22] {
        let resp = ctx
            .client
            .post(format!("{}/cart/{session}", ctx.cart_url))
            .json(&json!({ "items": [{ "sku": "test", "qty": qty }] }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let body: serde_json::Value = ctx
        .client
        .get(format!("{}/cart/{session}", ctx.cart_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["items"][0]["qty"], 22);
}

#[tokio::test]
async fn emptying_an_empty_cart_succeeds() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();
    let session = ctx.fresh_session();

    let resp = ctx
        .client
        .delete(format!("{}/cart/{session}", ctx.cart_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "cart emptied");
}
