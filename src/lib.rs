pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod store;

pub use config::ClientConfig;
pub use error::PricingError;
pub use models::{generate_price_key, PriceQuote, PriceRequest, PriceResult, PriceVariant, PriceVariantSet};
pub use providers::{PriceFetcher, StarkClient};
pub use store::{cache_key, PriceStore};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `level`. `format` is "text" or "json".
/// Can only be called once per process.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }
}
