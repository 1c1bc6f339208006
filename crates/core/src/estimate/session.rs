//! Interactive per-event estimates.
//!
//! An [`EventEstimate`] is a pure function of the event, the selections and
//! the pricing book. Changing the guest count, venue or vendor builds a new
//! estimate from scratch; nothing is patched in place.

use mandap_shared::types::EventId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregator::{EstimateAssumptions, EventCostAggregator, EventCostEstimate, EventCostInput};
use super::types::{EstimateSelections, GuestRange};
use crate::pricing::{PricingBook, VendorTier, VenueClass};
use crate::wedding::Event;

/// Estimate for one event at the current slider and selector positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventEstimate {
    /// Event ID.
    pub event_id: EventId,
    /// Event name.
    pub name: String,
    /// Guest count stored on the event (after the floor is applied).
    pub original_guests: u32,
    /// Guest count currently selected, always within `guest_range`.
    pub current_guests: u32,
    /// Allowed guest count bounds.
    pub guest_range: GuestRange,
    /// Effective selections (city falls back to the event location).
    pub selections: EstimateSelections,
    /// Priced result.
    pub cost: EventCostEstimate,
    #[serde(skip)]
    event: Event,
    #[serde(skip)]
    requested: EstimateSelections,
}

impl EventEstimate {
    /// Estimates an event at its stored guest count.
    #[must_use]
    pub fn new(
        event: &Event,
        selections: &EstimateSelections,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> Self {
        Self::build(event.clone(), selections.clone(), event.guest_count, book, assumptions)
    }

    /// Recomputes the estimate for a new guest count, clamped to the range.
    #[must_use]
    pub fn with_guests(
        self,
        guests: i64,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> Self {
        Self::build(self.event, self.requested, guests, book, assumptions)
    }

    /// Recomputes the estimate for a new venue class.
    #[must_use]
    pub fn with_venue(
        self,
        venue: VenueClass,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> Self {
        let guests = i64::from(self.current_guests);
        let requested = EstimateSelections {
            venue,
            ..self.requested
        };
        Self::build(self.event, requested, guests, book, assumptions)
    }

    /// Recomputes the estimate for a new vendor tier.
    #[must_use]
    pub fn with_vendor(
        self,
        vendor: VendorTier,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> Self {
        let guests = i64::from(self.current_guests);
        let requested = EstimateSelections {
            vendor,
            ..self.requested
        };
        Self::build(self.event, requested, guests, book, assumptions)
    }

    /// Low end of the event cost.
    #[must_use]
    pub const fn low(&self) -> Decimal {
        self.cost.low
    }

    /// High end of the event cost.
    #[must_use]
    pub const fn high(&self) -> Decimal {
        self.cost.high
    }

    fn build(
        event: Event,
        requested: EstimateSelections,
        guests: i64,
        book: &PricingBook,
        assumptions: &EstimateAssumptions,
    ) -> Self {
        let original_guests = EventCostAggregator::effective_guests(event.guest_count, assumptions);
        let guest_range = GuestRange::for_original(original_guests, assumptions.guest_floor);
        let current_guests = guest_range.clamp(guests);

        let selections = requested.clone().or_city(event.location.as_deref());
        let cost = EventCostAggregator::estimate(
            &EventCostInput {
                name: &event.name,
                event_type: event.event_type.as_deref(),
                guests: i64::from(current_guests),
                selections: &selections,
            },
            book,
            assumptions,
        );

        Self {
            event_id: event.id,
            name: event.name.clone(),
            original_guests,
            current_guests,
            guest_range,
            selections,
            cost,
            event,
            requested,
        }
    }
}
