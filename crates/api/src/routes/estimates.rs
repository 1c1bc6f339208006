//! Estimate routes.
//!
//! Both endpoints use the line-item model.

use axum::{Json, Router, extract::State, routing::post};
use mandap_core::estimate::{
    EstimateSelections, EventEstimate, WeddingEstimate, WeddingEstimateRequest,
};
use mandap_core::wedding::Event;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Creates the estimate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/estimates/event", post(estimate_event))
        .route("/estimates/wedding", post(estimate_wedding))
}

/// Request body for a single event estimate.
#[derive(Debug, Deserialize)]
pub struct EventEstimateRequest {
    /// The event to price.
    pub event: Event,
    /// Venue, vendor and city selections.
    #[serde(default)]
    pub selections: EstimateSelections,
    /// Slider position; defaults to the event's guest count.
    #[serde(default)]
    pub guests: Option<i64>,
}

/// Response for a single event estimate.
#[derive(Debug, Serialize)]
pub struct EventEstimateResponse {
    /// Pricing revision used.
    pub revision: u64,
    /// The estimate.
    #[serde(flatten)]
    pub estimate: EventEstimate,
}

/// Response for a wedding summary.
#[derive(Debug, Serialize)]
pub struct WeddingEstimateResponse {
    /// The summary.
    #[serde(flatten)]
    pub estimate: WeddingEstimate,
    /// Midpoint of the total range.
    pub midpoint: Decimal,
}

/// POST /estimates/event
async fn estimate_event(
    State(state): State<AppState>,
    Json(request): Json<EventEstimateRequest>,
) -> Json<EventEstimateResponse> {
    let book = state.pricing();
    let assumptions = &state.estimate_assumptions;

    let mut estimate = EventEstimate::new(&request.event, &request.selections, &book, assumptions);
    if let Some(guests) = request.guests {
        estimate = estimate.with_guests(guests, &book, assumptions);
    }

    Json(EventEstimateResponse {
        revision: book.revision,
        estimate,
    })
}

/// POST /estimates/wedding
async fn estimate_wedding(
    State(state): State<AppState>,
    Json(request): Json<WeddingEstimateRequest>,
) -> Json<WeddingEstimateResponse> {
    let book = state.pricing();
    let estimate = state
        .estimate_cache
        .estimate(&request, &book, &state.estimate_assumptions);
    let midpoint = estimate.midpoint();

    Json(WeddingEstimateResponse { estimate, midpoint })
}
