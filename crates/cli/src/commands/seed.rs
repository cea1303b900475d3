//! Seed the catalog with the demo product set.
//!
//! Goes through the catalog's HTTP API rather than the database so the
//! service's validation and conflict handling apply. Products that already
//! exist (409) are skipped, not errors - re-running the seed is harmless.

use tracing::{error, info, warn};

use copperline_core::{Price, Product, Sku};

/// The demo product set.
fn demo_products() -> Vec<Product> {
    let entries: [(&str, &str, i64, &str); 6] = [
        ("SKU1", "Raspberry Pi", 3000, "A small computer."),
        ("SKU2", "Arduino", 1500, "An even smaller computer."),
        ("SKU3", "Resistor", 100, "Resists stuff."),
        ("SKU4", "Mouse", 2000, "Meep."),
        ("SKU5", "Keyboard", 6000, "For typing."),
        ("SKU6", "Monitor", 10000, "For your eyeballs."),
    ];

    entries
        .into_iter()
        .map(|(sku, name, price, description)| Product {
            sku: Sku::from(sku.to_string()),
            name: name.to_string(),
            price: Price::from_minor_units(price),
            description: description.to_string(),
        })
        .collect()
}

/// POST the demo products to the catalog service.
///
/// # Arguments
///
/// * `url` - Catalog base URL override; falls back to `$PRODUCTSERVICE`,
///   then `http://localhost:8082`
///
/// # Errors
///
/// Returns an error if a request fails at the transport level or the
/// catalog answers with anything other than 201 or 409.
pub async fn catalog(url: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let base_url = url
        .or_else(|| std::env::var("PRODUCTSERVICE").ok())
        .unwrap_or_else(|| "http://localhost:8082".to_string());
    let base_url = base_url.trim_end_matches('/');

    info!(url = %base_url, "Seeding catalog");

    let client = reqwest::Client::new();
    let mut created = 0_u32;
    let mut skipped = 0_u32;

    for product in demo_products() {
        let response = client
            .post(format!("{base_url}/product"))
            .json(&product)
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::CREATED => {
                info!(sku = %product.sku, "created");
                created += 1;
            }
            reqwest::StatusCode::CONFLICT => {
                warn!(sku = %product.sku, "already exists, skipping");
                skipped += 1;
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                error!(sku = %product.sku, %status, body = %body, "seed failed");
                return Err(format!("seeding {} failed with status {status}", product.sku).into());
            }
        }
    }

    info!("Seeding complete: {created} created, {skipped} skipped");
    Ok(())
}
