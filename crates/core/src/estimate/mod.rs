//! Line-item cost estimation.
//!
//! Used by the interactive estimator ([`EventEstimate`]) and the dashboard
//! summary ([`WeddingEstimate`]). Both go through [`EventCostAggregator`],
//! so they always agree. The scenario planner in `crate::scenario` is a
//! separate proportional model and does not use this module.

pub mod aggregator;
pub mod cache;
pub mod cost;
pub mod resolver;
pub mod session;
pub mod summary;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{
    EstimateAssumptions, EventCostAggregator, EventCostEstimate, EventCostInput, PricedLineItem,
};
pub use cache::EstimateCache;
pub use cost::{LineItemCost, LineItemCostCalculator};
pub use resolver::{CeremonyResolver, KEYWORD_TABLE, RECEPTION_ID};
pub use session::EventEstimate;
pub use summary::{WeddingEstimate, WeddingEstimateRequest};
pub use types::{EstimateSelections, GuestRange};
