//! Wedding estimate caching using Moka.
//!
//! Keys include the pricing book revision, so replacing the tables or the
//! catalog makes every earlier entry unreachable.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use super::aggregator::EstimateAssumptions;
use super::summary::{WeddingEstimate, WeddingEstimateRequest};
use crate::pricing::PricingBook;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Memoizes wedding summaries.
///
/// Purely a performance layer: a miss recomputes the same value a hit
/// would have returned.
#[derive(Clone)]
pub struct EstimateCache {
    cache: Cache<String, Arc<WeddingEstimate>>,
}

impl EstimateCache {
    /// Creates a cache with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and time-to-live.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Computes a wedding summary, returning a cached copy when available.
    ///
    /// Cached copies come back with `cached: true`.
    #[must_use]
    pub fn estimate(
        &self,
        request: &WeddingEstimateRequest,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> WeddingEstimate {
        let Some(key) = Self::cache_key(request, book, assumptions) else {
            return WeddingEstimate::compute(request, book, assumptions);
        };

        if let Some(hit) = self.cache.get(&key) {
            let mut result = (*hit).clone();
            result.cached = true;
            return result;
        }

        let result = WeddingEstimate::compute(request, book, assumptions);
        self.cache.insert(key, Arc::new(result.clone()));
        result
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs pending maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    fn cache_key(
        request: &WeddingEstimateRequest,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> Option<String> {
        match (
            serde_json::to_string(request),
            serde_json::to_string(assumptions),
        ) {
            (Ok(request), Ok(assumptions)) => {
                Some(format!("{}:{assumptions}:{request}", book.revision))
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "Could not build estimate cache key, skipping cache");
                None
            }
        }
    }
}

impl Default for EstimateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{CeremonyCatalog, CeremonyTemplate, CostUnit, LineItem};
    use crate::wedding::Event;
    use mandap_shared::types::EventId;
    use rust_decimal_macros::dec;

    fn request() -> WeddingEstimateRequest {
        WeddingEstimateRequest {
            events: vec![Event {
                id: EventId::new(),
                name: "Mehndi".to_string(),
                event_type: None,
                guest_count: 100,
                date: None,
                location: None,
            }],
            selections: Default::default(),
        }
    }

    #[test]
    fn test_second_call_is_cached() {
        let cache = EstimateCache::new();
        let book = PricingBook::builtin();
        let assumptions = EstimateAssumptions::default();
        let req = request();

        let first = cache.estimate(&req, &book, &assumptions);
        let second = cache.estimate(&req, &book, &assumptions);

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(first.total_low, second.total_low);
        assert_eq!(first.total_high, second.total_high);
    }

    #[test]
    fn test_new_revision_is_never_served_stale() {
        let cache = EstimateCache::new();
        let book = PricingBook::builtin();
        let assumptions = EstimateAssumptions::default();
        let req = request();

        let before = cache.estimate(&req, &book, &assumptions);

        let catalog = CeremonyCatalog::new(vec![CeremonyTemplate {
            id: "mehndi".to_string(),
            name: "Mehndi".to_string(),
            tradition: "south_asian".to_string(),
            default_guest_count: 100,
            line_items: vec![LineItem::new("Decor", CostUnit::Fixed, dec!(100), dec!(200))],
        }]);
        let updated = book.with_catalog(catalog).unwrap();
        let after = cache.estimate(&req, &updated, &assumptions);

        assert!(!after.cached);
        assert_eq!(after.revision, book.revision + 1);
        assert_eq!(after.total_low, dec!(100));
        assert_ne!(before.total_low, after.total_low);
    }

    #[test]
    fn test_assumptions_are_part_of_key() {
        let cache = EstimateCache::new();
        let book = PricingBook::builtin();
        let mut req = request();
        req.events[0].name = "Cocktail Mixer".to_string();

        let default = cache.estimate(&req, &book, &EstimateAssumptions::default());
        let pricier = EstimateAssumptions {
            fallback_per_guest_low: dec!(60),
            ..EstimateAssumptions::default()
        };
        let changed = cache.estimate(&req, &book, &pricier);

        assert!(!changed.cached);
        assert_eq!(default.total_low, dec!(5000));
        assert_eq!(changed.total_low, dec!(6000));
    }

    #[test]
    fn test_invalidate_all() {
        let cache = EstimateCache::with_config(10, 60);
        let book = PricingBook::builtin();
        let assumptions = EstimateAssumptions::default();
        let req = request();

        assert_eq!(cache.entry_count(), 0);
        let _ = cache.estimate(&req, &book, &assumptions);
        // Counts are only updated by maintenance.
        cache.run_pending_tasks();
        assert!(cache.entry_count() >= 1);

        cache.invalidate_all();
        assert!(!cache.estimate(&req, &book, &assumptions).cached);
    }
}
