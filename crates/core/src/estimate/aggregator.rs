//! Event-level cost aggregation.
//!
//! This is the line-item cost model. Both the interactive estimator
//! ([`super::session`]) and the dashboard summary ([`super::summary`]) price
//! events through [`EventCostAggregator::estimate`]; the scenario planner
//! deliberately uses a separate proportional model (`crate::scenario`).

use mandap_shared::AssumptionsConfig;
use mandap_shared::types::round_to_unit;
use rust_decimal::Decimal;
use serde::Serialize;

use super::cost::{LineItemCost, LineItemCostCalculator};
use super::resolver::CeremonyResolver;
use super::types::EstimateSelections;
use crate::pricing::{ComposedMultiplier, LineItem, PricingBook};

/// Assumptions for events without a ceremony breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateAssumptions {
    /// Generic low cost per guest.
    pub fallback_per_guest_low: Decimal,
    /// Generic high cost per guest.
    pub fallback_per_guest_high: Decimal,
    /// Smallest guest count an event is priced at.
    pub guest_floor: u32,
}

impl Default for EstimateAssumptions {
    fn default() -> Self {
        Self::from(&AssumptionsConfig::default())
    }
}

impl From<&AssumptionsConfig> for EstimateAssumptions {
    fn from(config: &AssumptionsConfig) -> Self {
        Self {
            fallback_per_guest_low: config.fallback_per_guest_low,
            fallback_per_guest_high: config.fallback_per_guest_high,
            guest_floor: config.guest_floor,
        }
    }
}

/// A line item together with its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedLineItem {
    /// Copy of the catalog line item.
    pub item: LineItem,
    /// Its price for this event.
    pub cost: LineItemCost,
}

/// Cost range for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCostEstimate {
    /// Low end of the event cost.
    pub low: Decimal,
    /// High end of the event cost.
    pub high: Decimal,
    /// Whether the range comes from a ceremony breakdown.
    pub has_breakdown: bool,
    /// Priced line items, when a breakdown exists.
    pub breakdown: Option<Vec<PricedLineItem>>,
    /// Resolved ceremony id, if any.
    pub ceremony_id: Option<String>,
    /// Guest count the event was priced at.
    pub guests: u32,
    /// Multiplier applied to every base cost.
    pub multiplier: ComposedMultiplier,
}

/// Input for pricing one event.
#[derive(Debug, Clone, Copy)]
pub struct EventCostInput<'a> {
    /// Free-text event name.
    pub name: &'a str,
    /// Free-text event type.
    pub event_type: Option<&'a str>,
    /// Guest count; zero or negative counts are raised to the guest floor.
    pub guests: i64,
    /// Venue, vendor and city selections.
    pub selections: &'a EstimateSelections,
}

/// Aggregates line item costs into an event range.
pub struct EventCostAggregator;

impl EventCostAggregator {
    /// Prices one event.
    ///
    /// Never fails. An unresolved ceremony, or one without line items, is
    /// priced with the catalog's default line items, or with the generic
    /// per-guest estimate when there are none.
    #[must_use]
    pub fn estimate(
        input: &EventCostInput<'_>,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> EventCostEstimate {
        let guests = Self::effective_guests(input.guests, assumptions);
        let multiplier = book.tables.compose(
            input.selections.venue,
            input.selections.vendor,
            input.selections.city.as_deref(),
            guests,
        );

        let ceremony_id =
            CeremonyResolver::new().resolve(input.name, input.event_type, &book.catalog);

        let line_items = ceremony_id
            .as_deref()
            .and_then(|id| book.catalog.get(id))
            .map(|t| t.line_items.as_slice())
            .filter(|items| !items.is_empty())
            .or_else(|| {
                Some(book.catalog.default_line_items.as_slice()).filter(|items| !items.is_empty())
            });

        let Some(line_items) = line_items else {
            tracing::debug!(
                event = input.name,
                ceremony_id = ?ceremony_id,
                "No ceremony breakdown, using generic per-guest estimate"
            );
            let (low, high) = Self::fallback_range(guests, multiplier.total, assumptions);
            return EventCostEstimate {
                low,
                high,
                has_breakdown: false,
                breakdown: None,
                ceremony_id,
                guests,
                multiplier,
            };
        };

        let breakdown: Vec<PricedLineItem> = line_items
            .iter()
            .map(|item| PricedLineItem {
                item: item.clone(),
                cost: LineItemCostCalculator::calculate(item, guests, multiplier.total),
            })
            .collect();

        let low = breakdown
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.cost.low));
        let high = breakdown
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.cost.high));

        EventCostEstimate {
            low,
            high,
            has_breakdown: true,
            breakdown: Some(breakdown),
            ceremony_id,
            guests,
            multiplier,
        }
    }

    /// Raises zero or negative guest counts to the configured floor.
    #[must_use]
    pub fn effective_guests(guests: i64, assumptions: &EstimateAssumptions) -> u32 {
        if guests <= 0 {
            return assumptions.guest_floor;
        }
        u32::try_from(guests).unwrap_or(u32::MAX)
    }

    /// Generic estimate: a per-guest range scaled by the multiplier.
    #[must_use]
    pub fn fallback_range(
        guests: u32,
        multiplier: Decimal,
        assumptions: &EstimateAssumptions,
    ) -> (Decimal, Decimal) {
        let guests = Decimal::from(guests);
        (
            round_to_unit(
                assumptions
                    .fallback_per_guest_low
                    .saturating_mul(guests)
                    .saturating_mul(multiplier),
            ),
            round_to_unit(
                assumptions
                    .fallback_per_guest_high
                    .saturating_mul(guests)
                    .saturating_mul(multiplier),
            ),
        )
    }
}
