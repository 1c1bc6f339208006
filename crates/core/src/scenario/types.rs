//! Scenario data types.

use chrono::{DateTime, Utc};
use mandap_shared::AssumptionsConfig;
use mandap_shared::types::{ScenarioId, WeddingId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Proportional weights of the scenario model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioAssumptions {
    /// Share of the budget spent per guest (0.6).
    pub per_guest_share: Decimal,
    /// Share of the budget spent on the venue (0.25).
    pub venue_share: Decimal,
    /// Share of the budget spent on catering (0.35).
    pub catering_share: Decimal,
    /// Per-person cost when the budget or guest count is zero (150).
    pub fallback_per_person_cost: Decimal,
}

impl Default for ScenarioAssumptions {
    fn default() -> Self {
        Self::from(&AssumptionsConfig::default())
    }
}

impl From<&AssumptionsConfig> for ScenarioAssumptions {
    fn from(config: &AssumptionsConfig) -> Self {
        Self {
            per_guest_share: config.per_guest_share,
            venue_share: config.venue_share,
            catering_share: config.catering_share,
            fallback_per_person_cost: config.fallback_per_person_cost,
        }
    }
}

/// Current budget and guest count a scenario is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioBaseline {
    /// Current total budget.
    #[serde(alias = "totalBudget")]
    pub total_budget: Decimal,
    /// Current guest count.
    #[serde(alias = "baseGuestCount")]
    pub base_guest_count: i64,
}

fn one() -> Decimal {
    Decimal::ONE
}

/// User-entered scenario adjustments.
///
/// The multipliers are independent overrides, each applied against the same
/// baseline; they are never compounded with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFormData {
    /// Scenario name.
    #[serde(default)]
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Signed change against the baseline guest count.
    #[serde(default, alias = "guestCountChange")]
    pub guest_count_change: i64,
    /// Venue cost override.
    #[serde(default = "one", alias = "venueMultiplier")]
    pub venue_multiplier: Decimal,
    /// Catering cost override.
    #[serde(default = "one", alias = "cateringMultiplier")]
    pub catering_multiplier: Decimal,
    /// Whole-budget override.
    #[serde(default = "one", alias = "overallMultiplier")]
    pub overall_multiplier: Decimal,
}

impl Default for ScenarioFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            guest_count_change: 0,
            venue_multiplier: Decimal::ONE,
            catering_multiplier: Decimal::ONE,
            overall_multiplier: Decimal::ONE,
        }
    }
}

/// Budget delta produced by a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioImpact {
    /// Cost attributed to one guest.
    pub per_person_cost: Decimal,
    /// Impact of the guest count change.
    pub guest_impact: Decimal,
    /// Impact of the venue override.
    pub venue_impact: Decimal,
    /// Impact of the catering override.
    pub catering_impact: Decimal,
    /// Impact of the overall override.
    pub overall_impact: Decimal,
    /// Sum of the four impacts.
    pub total_impact: Decimal,
    /// Baseline budget plus total impact.
    pub new_total: Decimal,
    /// Total impact as a percentage of the baseline (0 for a zero baseline).
    pub percent_change: Decimal,
}

/// A saved scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetScenario {
    /// Scenario ID.
    pub id: ScenarioId,
    /// Wedding the scenario belongs to.
    pub wedding_id: WeddingId,
    /// Adjustments.
    #[serde(flatten)]
    pub form: ScenarioFormData,
    /// When the scenario was saved.
    pub created_at: DateTime<Utc>,
}

/// One row of a scenario comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedScenario {
    /// Scenario ID.
    pub scenario_id: ScenarioId,
    /// Scenario name.
    pub name: String,
    /// Impact against the shared baseline.
    pub impact: ScenarioImpact,
}

/// Saved scenarios ranked by resulting total, cheapest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioComparison {
    /// Baseline every scenario was measured against.
    pub baseline: ScenarioBaseline,
    /// Ranked rows.
    pub scenarios: Vec<RankedScenario>,
}
