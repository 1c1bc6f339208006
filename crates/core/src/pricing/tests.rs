//! Property-based tests for pricing module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::multipliers::MultiplierTable;
use super::types::{GuestBracket, VendorTier, VenueClass};

fn venue_strategy() -> impl Strategy<Value = VenueClass> {
    prop::sample::select(VenueClass::ALL.to_vec())
}

fn vendor_strategy() -> impl Strategy<Value = VendorTier> {
    prop::sample::select(VendorTier::ALL.to_vec())
}

fn city_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "New York".to_string(),
        "Houston".to_string(),
        "Springfield".to_string(),
        "LONDON".to_string(),
    ]))
}

proptest! {
    /// Composition order does not change the composed multiplier.
    #[test]
    fn test_composition_is_commutative(
        venue in venue_strategy(),
        vendor in vendor_strategy(),
        city in city_strategy(),
        guests in 0u32..600,
    ) {
        let table = MultiplierTable::builtin();
        let m = table.compose(venue, vendor, city.as_deref(), guests);

        let reversed = m.guest_bracket * m.city * m.vendor * m.venue;
        let regrouped = (m.venue * m.city) * (m.guest_bracket * m.vendor);

        prop_assert_eq!(m.total, reversed);
        prop_assert_eq!(m.total, regrouped);
    }

    /// Every composed multiplier from valid tables is strictly positive.
    #[test]
    fn test_composed_multiplier_positive(
        venue in venue_strategy(),
        vendor in vendor_strategy(),
        city in city_strategy(),
        guests in 0u32..10_000,
    ) {
        let table = MultiplierTable::builtin();
        let m = table.compose(venue, vendor, city.as_deref(), guests);
        prop_assert!(m.total > Decimal::ZERO);
    }

    /// Brackets are monotonic in guest count.
    #[test]
    fn test_bracket_monotonic(a in 0u32..1_000, b in 0u32..1_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(GuestBracket::for_guests(lo) <= GuestBracket::for_guests(hi));
    }
}
