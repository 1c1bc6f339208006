//! Budget API client boundary.

use async_trait::async_trait;
use mandap_shared::AppResult;
use mandap_shared::types::{ScenarioId, WeddingId};

use crate::scenario::{BudgetScenario, ScenarioFormData};

/// Client for the planning API that owns weddings and scenarios.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BudgetClient: Send + Sync {
    /// Replaces a wedding's total budget. The amount is sent as a string.
    async fn update_budget(&self, wedding_id: WeddingId, new_total_budget: String)
    -> AppResult<()>;

    /// Saves a scenario, returning the stored record.
    async fn create_scenario(
        &self,
        wedding_id: WeddingId,
        form: ScenarioFormData,
    ) -> AppResult<BudgetScenario>;

    /// Deletes a saved scenario.
    async fn delete_scenario(&self, wedding_id: WeddingId, scenario_id: ScenarioId)
    -> AppResult<()>;
}
