pub mod stark;

pub use stark::StarkClient;

use crate::models::{PriceRequest, PriceResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Source of per-variant prices.
///
/// Implementations never fail: transport, status and parse errors come back
/// as `PriceResult::Failure`, so a batch of fetches can always be joined.
#[async_trait]
pub trait PriceFetcher: Send + Sync + 'static {
    async fn fetch_price(&self, request: PriceRequest) -> PriceResult;
}

#[async_trait]
impl<T: PriceFetcher + ?Sized> PriceFetcher for Arc<T> {
    async fn fetch_price(&self, request: PriceRequest) -> PriceResult {
        (**self).fetch_price(request).await
    }
}
