//! Property-based tests for estimate module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregator::{EstimateAssumptions, EventCostAggregator, EventCostInput};
use super::cost::LineItemCostCalculator;
use super::types::{EstimateSelections, GuestRange};
use crate::pricing::{CostUnit, LineItem, PricingBook, VendorTier, VenueClass};

fn unit_strategy() -> impl Strategy<Value = CostUnit> {
    prop::sample::select(vec![CostUnit::Fixed, CostUnit::PerPerson, CostUnit::PerHour])
}

/// Base cost pair with `low <= high`, two decimal places.
fn cost_range_strategy() -> impl Strategy<Value = (Decimal, Decimal)> {
    (0i64..2_000_000, 0i64..2_000_000).prop_map(|(a, b)| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (Decimal::new(lo, 2), Decimal::new(hi, 2))
    })
}

/// Multiplier between 0.50 and 3.00.
fn multiplier_strategy() -> impl Strategy<Value = Decimal> {
    (50i64..=300).prop_map(|m| Decimal::new(m, 2))
}

fn event_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Mehndi".to_string(),
        "Sangeet Night".to_string(),
        "Reception".to_string(),
        "Cocktail Mixer".to_string(),
        "Baraat".to_string(),
        "Farewell Brunch".to_string(),
    ])
}

proptest! {
    /// Fixed line items do not depend on the guest count.
    #[test]
    fn test_fixed_cost_independent_of_guests(
        (low, high) in cost_range_strategy(),
        multiplier in multiplier_strategy(),
        g1 in 0u32..2_000,
        g2 in 0u32..2_000,
    ) {
        let item = LineItem::new("Decor", CostUnit::Fixed, low, high);
        let a = LineItemCostCalculator::calculate(&item, g1, multiplier);
        let b = LineItemCostCalculator::calculate(&item, g2, multiplier);
        prop_assert_eq!(a, b);
    }

    /// Per-person line items are exactly linear in the guest count.
    #[test]
    fn test_per_person_cost_is_linear(
        (low, high) in cost_range_strategy(),
        multiplier in multiplier_strategy(),
        guests in 0u32..1_000,
    ) {
        let item = LineItem::new("Catering", CostUnit::PerPerson, low, high);
        let single = LineItemCostCalculator::calculate(&item, guests, multiplier);
        let double = LineItemCostCalculator::calculate(&item, guests * 2, multiplier);
        prop_assert_eq!(double.low, single.low * Decimal::TWO);
        prop_assert_eq!(double.high, single.high * Decimal::TWO);
    }

    /// Displayed unit price times quantity equals the reported total.
    #[test]
    fn test_unit_times_quantity_is_total(
        unit in unit_strategy(),
        (low, high) in cost_range_strategy(),
        multiplier in multiplier_strategy(),
        guests in 0u32..1_000,
    ) {
        let item = LineItem::new("Item", unit, low, high);
        let cost = LineItemCostCalculator::calculate(&item, guests, multiplier);
        prop_assert_eq!(cost.unit_low * Decimal::from(cost.quantity_low), cost.low);
        prop_assert_eq!(cost.unit_high * Decimal::from(cost.quantity_high), cost.high);
        prop_assert_eq!(cost.unit_low.fract(), Decimal::ZERO);
        prop_assert_eq!(cost.unit_high.fract(), Decimal::ZERO);
        prop_assert!(cost.low <= cost.high);
    }

    /// Event estimates are whole, non-negative ranges for any guest count.
    #[test]
    fn test_event_estimate_is_total(
        name in event_name_strategy(),
        guests in -100i64..1_500,
        venue in prop::sample::select(VenueClass::ALL.to_vec()),
        vendor in prop::sample::select(VendorTier::ALL.to_vec()),
    ) {
        let book = PricingBook::builtin();
        let selections = EstimateSelections { venue, vendor, city: None };
        let estimate = EventCostAggregator::estimate(
            &EventCostInput { name: &name, event_type: None, guests, selections: &selections },
            &book,
            &EstimateAssumptions::default(),
        );

        prop_assert!(estimate.low >= Decimal::ZERO);
        prop_assert!(estimate.low <= estimate.high);
        prop_assert!(estimate.guests >= 20);
        prop_assert_eq!(estimate.low.fract(), Decimal::ZERO);
        prop_assert_eq!(estimate.has_breakdown, estimate.breakdown.is_some());
    }

    /// Clamped guest counts always land inside the range.
    #[test]
    fn test_guest_range_clamp(original in 0u32..5_000, requested in -1_000i64..10_000) {
        let range = GuestRange::for_original(original, 20);
        prop_assert!(range.min >= 20);
        prop_assert!(range.max >= range.min + 50);
        prop_assert!(range.contains(range.clamp(requested)));
    }
}
