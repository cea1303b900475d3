//! Catalog service end-to-end tests (requires running services and Postgres).

#![allow(clippy::unwrap_used)]

use serde_json::json;

use copperline_integration_tests::{TestContext, enabled};

#[tokio::test]
async fn create_then_duplicate_conflicts_and_keeps_original() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();
    let sku = ctx.fresh_sku();

    let product = json!({
        "sku": sku,
        "name": "test1",
        "price": 22,
        "description": "used for testing",
    });

    let resp = ctx
        .client
        .post(format!("{}/product", ctx.catalog_url))
        .json(&product)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    // Same SKU, different name: must conflict and leave the record alone
    let mut duplicate = product.clone();
    duplicate["name"] = json!("imposter");
    let resp = ctx
        .client
        .post(format!("{}/product", ctx.catalog_url))
        .json(&duplicate)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    let body: serde_json::Value = ctx
        .client
        .get(format!("{}/product/{sku}", ctx.catalog_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["name"], "test1");
}

#[tokio::test]
async fn unknown_sku_is_not_found() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();

    let resp = ctx
        .client
        .get(format!("{}/product/{}", ctx.catalog_url, ctx.fresh_sku()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();

    let resp = ctx
        .client
        .post(format!("{}/product", ctx.catalog_url))
        .json(&json!({ "sku": ctx.fresh_sku(), "name": "incomplete" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}
