//! Static seed dataset the registry starts from.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use prodcat_core::DomainError;

use crate::product::{Product, ProductId};
use crate::registry::ProductRegistry;

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed product {id}: {reason}")]
    Invalid { id: ProductId, reason: &'static str },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse a JSON product list, checking the record invariants the form boundary
/// would otherwise guarantee.
pub fn parse_products(json: &str) -> Result<Vec<Product>, SeedError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    for product in &products {
        check(product)?;
    }
    Ok(products)
}

fn check(product: &Product) -> Result<(), SeedError> {
    let reason = if product.name().trim().is_empty() {
        "empty name"
    } else if product.price() < Decimal::ZERO {
        "negative price"
    } else if product.tags().iter().any(|t| t.trim().is_empty()) {
        "empty tag"
    } else {
        return Ok(());
    };
    Err(SeedError::Invalid {
        id: product.id_typed(),
        reason,
    })
}

/// The bundled mock catalog.
pub fn seed_products() -> Result<Vec<Product>, SeedError> {
    parse_products(SEED_JSON)
}

/// A registry holding the bundled mock catalog.
pub fn seeded_registry() -> Result<ProductRegistry, SeedError> {
    let products = seed_products()?;
    info!(count = products.len(), "loaded bundled seed catalog");
    Ok(ProductRegistry::seeded(products)?)
}
