//! Wedding-level estimate summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregator::EstimateAssumptions;
use super::session::EventEstimate;
use super::types::EstimateSelections;
use crate::pricing::PricingBook;
use crate::wedding::Event;

/// Request for a wedding-level summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingEstimateRequest {
    /// Events of the wedding, in display order.
    pub events: Vec<Event>,
    /// Selections applied to every event.
    #[serde(default)]
    pub selections: EstimateSelections,
}

/// Summed estimate across all events of a wedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeddingEstimate {
    /// Pricing book revision the estimate was computed against.
    pub revision: u64,
    /// Per-event estimates, in request order.
    pub events: Vec<EventEstimate>,
    /// Sum of event lows.
    pub total_low: Decimal,
    /// Sum of event highs.
    pub total_high: Decimal,
    /// Whether this result was served from the estimate cache.
    pub cached: bool,
}

impl WeddingEstimate {
    /// Estimates every event at its stored guest count and sums the ranges.
    ///
    /// Uses the same per-event path as the interactive estimator, so each
    /// row matches what [`EventEstimate::new`] would show for that event.
    #[must_use]
    pub fn compute(
        request: &WeddingEstimateRequest,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> Self {
        let events: Vec<EventEstimate> = request
            .events
            .iter()
            .map(|event| EventEstimate::new(event, &request.selections, book, assumptions))
            .collect();

        let total_low = events
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.low()));
        let total_high = events
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.high()));

        tracing::debug!(
            revision = book.revision,
            events = events.len(),
            %total_low,
            %total_high,
            "Computed wedding estimate"
        );

        Self {
            revision: book.revision,
            events,
            total_low,
            total_high,
            cached: false,
        }
    }

    /// Midpoint of the total range, rounded to whole currency units.
    #[must_use]
    pub fn midpoint(&self) -> Decimal {
        // Halving first keeps the sum inside the Decimal range.
        mandap_shared::types::round_to_unit(
            (self.total_low / Decimal::TWO).saturating_add(self.total_high / Decimal::TWO),
        )
    }
}
