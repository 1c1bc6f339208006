//! What-if budget scenarios.

pub mod error;
pub mod service;
pub mod types;


pub use error::ScenarioError;
pub use service::ScenarioService;
pub use types::{
    BudgetScenario, RankedScenario, ScenarioAssumptions, ScenarioBaseline, ScenarioComparison,
    ScenarioFormData, ScenarioImpact,
};
