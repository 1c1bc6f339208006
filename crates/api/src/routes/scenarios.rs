//! Scenario routes.
//!
//! These use the proportional scenario model, not the line-item model.

use axum::{Json, Router, extract::State, routing::post};
use mandap_core::scenario::{
    BudgetScenario, ScenarioBaseline, ScenarioComparison, ScenarioFormData, ScenarioImpact,
    ScenarioService,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiResult;

/// Creates the scenario routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/scenarios/preview", post(preview_scenario))
        .route("/scenarios/validate", post(validate_scenario))
        .route("/scenarios/compare", post(compare_scenarios))
}

/// Request body for a scenario preview.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Current budget and guest count.
    pub baseline: ScenarioBaseline,
    /// Adjustments to preview.
    #[serde(default)]
    pub form: ScenarioFormData,
}

/// Request body for scenario validation.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// Current guest count.
    #[serde(alias = "baseGuestCount")]
    pub base_guest_count: i64,
    /// Form to validate.
    pub form: ScenarioFormData,
}

/// Validation result.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// Always true; invalid forms get a 400.
    pub valid: bool,
}

/// Request body for comparing saved scenarios.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Current budget and guest count.
    pub baseline: ScenarioBaseline,
    /// Saved scenarios.
    #[serde(default)]
    pub scenarios: Vec<BudgetScenario>,
}

/// POST /scenarios/preview
async fn preview_scenario(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Json<ScenarioImpact> {
    Json(ScenarioService::calculate_impact(
        &request.baseline,
        &request.form,
        &state.scenario_assumptions,
    ))
}

/// POST /scenarios/validate
async fn validate_scenario(Json(request): Json<ValidateRequest>) -> ApiResult<Json<ValidateResponse>> {
    ScenarioService::validate(&request.form, request.base_guest_count)?;
    Ok(Json(ValidateResponse { valid: true }))
}

/// POST /scenarios/compare
async fn compare_scenarios(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Json<ScenarioComparison> {
    Json(ScenarioService::compare(
        &request.baseline,
        &request.scenarios,
        &state.scenario_assumptions,
    ))
}
