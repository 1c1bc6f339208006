//! Planner commands.

use mandap_shared::types::{ScenarioId, WeddingId, format_amount};
use mandap_shared::{AppError, AppResult};
use rust_decimal::Decimal;

use super::client::BudgetClient;
use crate::scenario::{BudgetScenario, ScenarioFormData, ScenarioService};

/// Service issuing planner commands through a [`BudgetClient`].
pub struct PlannerService;

impl PlannerService {
    /// Sets a wedding's total budget, e.g. to an accepted estimate.
    ///
    /// The amount is sent with exactly two decimal places.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a negative amount, or whatever
    /// error the client reports.
    pub async fn apply_budget(
        client: &dyn BudgetClient,
        wedding_id: WeddingId,
        amount: Decimal,
    ) -> AppResult<()> {
        if amount < Decimal::ZERO {
            return Err(AppError::Validation(
                "Total budget cannot be negative".to_string(),
            ));
        }

        let formatted = format_amount(amount);
        tracing::info!(%wedding_id, amount = %formatted, "Applying total budget");
        client.update_budget(wedding_id, formatted).await
    }

    /// Validates and saves a scenario.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the form is invalid (nothing is
    /// sent), or whatever error the client reports.
    pub async fn save_scenario(
        client: &dyn BudgetClient,
        wedding_id: WeddingId,
        base_guest_count: i64,
        form: ScenarioFormData,
    ) -> AppResult<BudgetScenario> {
        ScenarioService::validate(&form, base_guest_count)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        client.create_scenario(wedding_id, form).await
    }

    /// Deletes a saved scenario.
    ///
    /// # Errors
    ///
    /// Returns whatever error the client reports.
    pub async fn delete_scenario(
        client: &dyn BudgetClient,
        wedding_id: WeddingId,
        scenario_id: ScenarioId,
    ) -> AppResult<()> {
        client.delete_scenario(wedding_id, scenario_id).await
    }
}
