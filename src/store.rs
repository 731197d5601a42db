//! Per-size price cache.
//!
//! Every rug size (`sku` + width + length) is priced in all four
//! padding/pristine combinations at once and cached as a `PriceVariantSet`.
//! Entries are either absent or complete; a lookup never sees a partial set.
//! Failed fetches are cached too, as failure results, until the caller
//! invalidates the entry.
//!
//! Concurrent misses for one key wait on a per-key fill lock. The lock's map
//! entry is released when the filling call returns or is cancelled.

use crate::config::DEFAULT_BINDING_METHOD;
use crate::models::{PriceRequest, PriceResult, PriceVariant, PriceVariantSet};
use crate::providers::PriceFetcher;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Cache key for one rug size: `"{sku}-{width}x{length}"`.
///
/// The binding method is deliberately absent, so sets fetched with different
/// binding methods share an entry.
///
/// Dimensions use `f64` `Display`: integral values print without a fraction
/// (`96`) and `-0` prints as `0`. Very large or very small magnitudes print
/// in positional form (`1e21` as `1000000000000000000000`), never in
/// exponent form.
pub fn cache_key(sku: &str, width_inches: f64, length_inches: f64) -> String {
    format!(
        "{}-{}x{}",
        sku,
        normalize_dimension(width_inches),
        normalize_dimension(length_inches)
    )
}

fn normalize_dimension(value: f64) -> f64 {
    // -0.0 == 0.0, so this folds negative zero into zero
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Releases a key's fill lock entry on every exit path, including cancellation
struct FillLockRelease<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    key: &'a str,
    lock: &'a Arc<Mutex<()>>,
}

impl Drop for FillLockRelease<'_> {
    fn drop(&mut self) {
        // Leave a newer lock for the same key alone
        self.locks
            .remove_if(self.key, |_, current| Arc::ptr_eq(current, self.lock));
    }
}

pub struct PriceStore<F: PriceFetcher> {
    fetcher: F,
    cache: DashMap<String, PriceVariantSet>,
    // One lock per key being filled, so concurrent misses share a fetch group
    fill_locks: DashMap<String, Arc<Mutex<()>>>,
    default_binding_method: String,
}

impl<F: PriceFetcher> PriceStore<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_default_binding_method(fetcher, DEFAULT_BINDING_METHOD)
    }

    /// Binding method `get_price` uses when it has to populate an entry
    pub fn with_default_binding_method(fetcher: F, binding_method: impl Into<String>) -> Self {
        Self {
            fetcher,
            cache: DashMap::new(),
            fill_locks: DashMap::new(),
            default_binding_method: binding_method.into(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn default_binding_method(&self) -> &str {
        &self.default_binding_method
    }

    /// All four variants for a rug size, fetching them on the first request.
    pub async fn fetch_grouped_prices(
        &self,
        sku: &str,
        width_inches: f64,
        length_inches: f64,
        binding_method: &str,
    ) -> PriceVariantSet {
        let key = cache_key(sku, width_inches, length_inches);

        if let Some(set) = self.cached_by_key(&key) {
            debug!(cache_key = %key, "Returning cached price");
            return set;
        }

        let lock = self
            .fill_locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;
        let _release = FillLockRelease {
            locks: &self.fill_locks,
            key: &key,
            lock: &lock,
        };

        // Another task may have filled the entry while we waited
        if let Some(set) = self.cached_by_key(&key) {
            debug!(cache_key = %key, "Returning price fetched by concurrent request");
            return set;
        }

        info!(
            cache_key = %key,
            binding_method = %binding_method,
            "Fetching price variants"
        );

        let set = self
            .fetch_all_variants(sku, width_inches, length_inches, binding_method)
            .await;

        let failed = set.iter().filter(|(_, result)| !result.is_ok()).count();
        info!(cache_key = %key, failed_variants = failed, "Cached price variants");

        self.cache.insert(key.clone(), set.clone());

        set
    }

    /// One variant of a rug size.
    ///
    /// An absent entry is populated with the store's default binding method
    /// (`"Serging"` unless configured otherwise), not a caller-supplied one.
    pub async fn get_price(
        &self,
        sku: &str,
        width_inches: f64,
        length_inches: f64,
        is_pristine: bool,
        is_padding: bool,
    ) -> PriceResult {
        self.get_price_with_binding(
            sku,
            width_inches,
            length_inches,
            &self.default_binding_method,
            is_pristine,
            is_padding,
        )
        .await
    }

    /// Like `get_price`, populating an absent entry with `binding_method`
    pub async fn get_price_with_binding(
        &self,
        sku: &str,
        width_inches: f64,
        length_inches: f64,
        binding_method: &str,
        is_pristine: bool,
        is_padding: bool,
    ) -> PriceResult {
        let key = cache_key(sku, width_inches, length_inches);
        let variant = PriceVariant::from_flags(is_pristine, is_padding);

        if let Some(result) = self.cache.get(&key).map(|set| set.get(variant).clone()) {
            debug!(cache_key = %key, variant = %variant, "Price cache hit");
            return result;
        }

        info!(cache_key = %key, "Fetching new prices");
        self.fetch_grouped_prices(sku, width_inches, length_inches, binding_method)
            .await
            .get(variant)
            .clone()
    }

    /// Cached set for a rug size, without fetching
    pub fn cached(&self, sku: &str, width_inches: f64, length_inches: f64) -> Option<PriceVariantSet> {
        self.cached_by_key(&cache_key(sku, width_inches, length_inches))
    }

    /// Drop one entry; the next lookup refetches it. Returns whether it existed.
    pub fn invalidate(&self, sku: &str, width_inches: f64, length_inches: f64) -> bool {
        let key = cache_key(sku, width_inches, length_inches);
        let removed = self.cache.remove(&key).is_some();
        if removed {
            debug!(cache_key = %key, "Invalidated cached prices");
        }
        removed
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn cached_by_key(&self, key: &str) -> Option<PriceVariantSet> {
        self.cache.get(key).map(|entry| entry.value().clone())
    }

    async fn fetch_all_variants(
        &self,
        sku: &str,
        width_inches: f64,
        length_inches: f64,
        binding_method: &str,
    ) -> PriceVariantSet {
        let request = |variant: PriceVariant| {
            let (is_pristine, is_padding) = variant.flags();
            self.fetcher.fetch_price(PriceRequest::new(
                sku,
                binding_method,
                width_inches,
                length_inches,
                is_pristine,
                is_padding,
            ))
        };

        let (price, with_padding, with_pristine, with_both) = futures::join!(
            request(PriceVariant::Price),
            request(PriceVariant::WithPadding),
            request(PriceVariant::WithPristine),
            request(PriceVariant::WithBoth),
        );

        PriceVariantSet::new(price, with_padding, with_pristine, with_both)
    }
}
