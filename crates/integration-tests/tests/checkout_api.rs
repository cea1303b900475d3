//! Checkout end-to-end tests (requires every service plus the collaborator
//! stubs).

#![allow(clippy::unwrap_used)]

use serde_json::json;

use copperline_integration_tests::{TestContext, enabled};

#[tokio::test]
async fn full_checkout_returns_opaque_identifiers() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();
    let session = ctx.fresh_session();
    let sku = ctx.fresh_sku();

    // A product to buy
    let resp = ctx
        .client
        .post(format!("{}/product", ctx.catalog_url))
        .json(&json!({
            "sku": sku,
            "name": "test product",
            "price": 2500,
            "description": "used for testing",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    // A cart holding two of it
    let resp = ctx
        .client
        .post(format!("{}/cart/{session}", ctx.cart_url))
        .json(&json!({ "items": [{ "sku": sku, "qty": 2 }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let resp = ctx
        .client
        .post(format!("{}/checkout", ctx.checkout_url))
        .json(&json!({
            "sessionid": session,
            "address": "testlane 1",
            "email": "test@test.com",
            "creditcard": "123-456-789cc",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(!body["transactionid"].as_str().unwrap().is_empty());
    assert!(!body["shippingid"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_creditcard_is_rejected() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();

    let resp = ctx
        .client
        .post(format!("{}/checkout", ctx.checkout_url))
        .json(&json!({
            "sessionid": ctx.fresh_session(),
            "address": "testlane 1",
            "email": "test@test.com",
            "creditcard": "",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn frontend_serves_the_shop_and_issues_a_session_cookie() {
    if !enabled() {
        eprintln!("skipping: set COPPERLINE_E2E=1 to run");
        return;
    }
    let ctx = TestContext::from_env();

    let resp = ctx
        .client
        .get(format!("{}/", ctx.frontend_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(
        resp.headers()
            .get_all("set-cookie")
            .iter()
            .any(|v| v.to_str().unwrap().starts_with("copperline_session"))
    );
}
