//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for estimates, scenarios and forecasts
//! - Shared application state holding the current pricing book
//! - JSON error responses

pub mod error;
pub mod routes;

use axum::Router;
use mandap_core::estimate::{EstimateAssumptions, EstimateCache};
use mandap_core::pricing::{CeremonyCatalog, PricingBook, PricingError};
use mandap_core::scenario::ScenarioAssumptions;
use mandap_shared::AppConfig;
use std::sync::{Arc, PoisonError, RwLock};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pricing: Arc<RwLock<Arc<PricingBook>>>,
    /// Assumptions of the line-item model.
    pub estimate_assumptions: EstimateAssumptions,
    /// Assumptions of the scenario model.
    pub scenario_assumptions: ScenarioAssumptions,
    /// Memoized wedding summaries.
    pub estimate_cache: EstimateCache,
}

impl AppState {
    /// Creates state around a pricing book.
    #[must_use]
    pub fn new(book: PricingBook, config: &AppConfig) -> Self {
        Self {
            pricing: Arc::new(RwLock::new(Arc::new(book))),
            estimate_assumptions: EstimateAssumptions::from(&config.assumptions),
            scenario_assumptions: ScenarioAssumptions::from(&config.assumptions),
            estimate_cache: EstimateCache::with_config(
                config.pricing.estimate_cache_capacity,
                config.pricing.estimate_cache_ttl_secs,
            ),
        }
    }

    /// Returns the current pricing book.
    ///
    /// Handlers take one snapshot per request and use it for the whole
    /// calculation.
    #[must_use]
    pub fn pricing(&self) -> Arc<PricingBook> {
        self.pricing
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the ceremony catalog, bumping the pricing revision.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if the catalog fails validation; the current
    /// book is left untouched.
    pub fn replace_catalog(&self, catalog: CeremonyCatalog) -> Result<Arc<PricingBook>, PricingError> {
        let mut guard = self.pricing.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(guard.with_catalog(catalog)?);
        *guard = Arc::clone(&next);
        drop(guard);

        self.estimate_cache.invalidate_all();
        tracing::info!(revision = next.revision, "Ceremony catalog replaced");
        Ok(next)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
