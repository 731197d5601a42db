//! Command implementations for the CLI
//!
//! - quote: price a single variant
//! - grid: price all four variants of a rug size
//! - config: inspect the effective configuration

pub mod config;
pub mod grid;
pub mod quote;

use anyhow::Result;
use rug_pricing::{ClientConfig, PriceStore, StarkClient};

/// Store backed by the configured pricing endpoint
pub fn build_store(cfg: &ClientConfig) -> Result<PriceStore<StarkClient>> {
    let client = StarkClient::new(cfg)?;
    Ok(PriceStore::with_default_binding_method(
        client,
        cfg.default_binding_method.clone(),
    ))
}
