//! Pricing reference data routes.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, put},
};
use mandap_core::pricing::{CeremonyCatalog, PricingBook};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiResult;

/// Creates the pricing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pricing", get(get_pricing))
        .route("/pricing/catalog", put(replace_catalog))
}

/// Response after a catalog update.
#[derive(Debug, Serialize)]
pub struct CatalogUpdateResponse {
    /// New pricing revision.
    pub revision: u64,
    /// Number of templates in the new catalog.
    pub templates: usize,
}

/// GET /pricing
///
/// Current multiplier tables and catalog, with their revision.
async fn get_pricing(State(state): State<AppState>) -> Json<PricingBook> {
    Json(PricingBook::clone(&state.pricing()))
}

/// PUT /pricing/catalog
///
/// Accepts `{"templates": [...]}` or a bare array of templates.
async fn replace_catalog(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<CatalogUpdateResponse>> {
    let catalog = CeremonyCatalog::from_json(&body)?;
    let book = state.replace_catalog(catalog)?;

    Ok(Json(CatalogUpdateResponse {
        revision: book.revision,
        templates: book.catalog.templates.len(),
    }))
}
