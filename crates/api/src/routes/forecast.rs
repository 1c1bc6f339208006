//! Cash-flow forecast routes.

use axum::{Json, Router, routing::post};
use chrono::Utc;
use mandap_core::forecast::{BudgetForecast, Contract, ForecastInput, ForecastService};
use mandap_core::wedding::Wedding;
use serde::Deserialize;

use crate::AppState;

/// Creates the forecast routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/forecast", post(forecast))
}

/// Request body for a forecast.
#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    /// The wedding's contracts.
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// The wedding record.
    pub wedding: Wedding,
}

/// POST /forecast
///
/// The server clock supplies the current time.
async fn forecast(Json(request): Json<ForecastRequest>) -> Json<BudgetForecast> {
    Json(ForecastService::forecast(&ForecastInput {
        contracts: request.contracts,
        wedding: request.wedding,
        now: Utc::now(),
    }))
}
