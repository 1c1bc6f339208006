//! Multiplier tables for venue, vendor, city and guest bracket.
//!
//! Each table is plain data: a key maps to a positive scaling factor. The
//! composed multiplier is the product of the four factors, so the order in
//! which they are applied does not matter.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::PricingError;
use super::types::{GuestBracket, VendorTier, VenueClass};

static BUILTIN: Lazy<MultiplierTable> = Lazy::new(|| {
    let venue = BTreeMap::from([
        (VenueClass::CommunityHall, Decimal::new(80, 2)),
        (VenueClass::Restaurant, Decimal::new(90, 2)),
        (VenueClass::BanquetHall, Decimal::ONE),
        (VenueClass::OutdoorEstate, Decimal::new(120, 2)),
        (VenueClass::LuxuryHotel, Decimal::new(150, 2)),
        (VenueClass::DestinationResort, Decimal::new(180, 2)),
    ]);

    let vendor = BTreeMap::from([
        (VendorTier::Budget, Decimal::new(75, 2)),
        (VendorTier::Standard, Decimal::ONE),
        (VendorTier::Premium, Decimal::new(135, 2)),
        (VendorTier::Luxury, Decimal::new(180, 2)),
    ]);

    let city = [
        ("new-york", 145),
        ("san-francisco", 140),
        ("london", 140),
        ("los-angeles", 130),
        ("boston", 125),
        ("washington-dc", 120),
        ("toronto", 120),
        ("seattle", 120),
        ("chicago", 115),
        ("edison", 110),
        ("vancouver", 115),
        ("miami", 110),
        ("atlanta", 100),
        ("dallas", 100),
        ("houston", 95),
        ("phoenix", 90),
    ]
    .into_iter()
    .map(|(slug, pct)| (slug.to_string(), Decimal::new(pct, 2)))
    .collect();

    let guest_bracket = BTreeMap::from([
        (GuestBracket::Intimate, Decimal::new(110, 2)),
        (GuestBracket::Medium, Decimal::ONE),
        (GuestBracket::Large, Decimal::new(95, 2)),
        (GuestBracket::Grand, Decimal::new(90, 2)),
    ]);

    MultiplierTable {
        venue,
        vendor,
        city,
        guest_bracket,
    }
});

/// Normalizes a free-text city name into a table key.
///
/// Lowercases, trims, and collapses every run of non-alphanumeric characters
/// into a single `-` ("New York, NY" becomes `new-york-ny`).
#[must_use]
pub fn city_slug(city: &str) -> String {
    let mut slug = String::with_capacity(city.len());
    let mut pending_dash = false;

    for ch in city.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Four independent multiplier mappings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierTable {
    /// Venue class multipliers.
    pub venue: BTreeMap<VenueClass, Decimal>,
    /// Vendor tier multipliers.
    pub vendor: BTreeMap<VendorTier, Decimal>,
    /// City multipliers keyed by [`city_slug`].
    pub city: BTreeMap<String, Decimal>,
    /// Guest bracket multipliers.
    pub guest_bracket: BTreeMap<GuestBracket, Decimal>,
}

/// The factors that went into one composed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedMultiplier {
    /// Venue class factor.
    pub venue: Decimal,
    /// Vendor tier factor.
    pub vendor: Decimal,
    /// City factor (1.0 for unknown cities).
    pub city: Decimal,
    /// Guest bracket the count fell into.
    pub bracket: GuestBracket,
    /// Guest bracket factor.
    pub guest_bracket: Decimal,
    /// Product of all four factors.
    pub total: Decimal,
}

impl Default for MultiplierTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl MultiplierTable {
    /// Returns the built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Venue factor, 1.0 when the table has no entry.
    #[must_use]
    pub fn venue_factor(&self, venue: VenueClass) -> Decimal {
        self.venue.get(&venue).copied().unwrap_or_else(|| {
            tracing::debug!(venue = %venue, "No venue multiplier, using 1.0");
            Decimal::ONE
        })
    }

    /// Vendor factor, 1.0 when the table has no entry.
    #[must_use]
    pub fn vendor_factor(&self, vendor: VendorTier) -> Decimal {
        self.vendor.get(&vendor).copied().unwrap_or_else(|| {
            tracing::debug!(vendor = %vendor, "No vendor multiplier, using 1.0");
            Decimal::ONE
        })
    }

    /// City factor, 1.0 for absent or unknown cities.
    #[must_use]
    pub fn city_factor(&self, city: Option<&str>) -> Decimal {
        let Some(city) = city else {
            return Decimal::ONE;
        };
        self.city
            .get(&city_slug(city))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Guest bracket factor for a guest count.
    #[must_use]
    pub fn guest_factor(&self, guests: u32) -> Decimal {
        self.guest_bracket
            .get(&GuestBracket::for_guests(guests))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Composes the four factors into one multiplier.
    #[must_use]
    pub fn compose(
        &self,
        venue: VenueClass,
        vendor: VendorTier,
        city: Option<&str>,
        guests: u32,
    ) -> ComposedMultiplier {
        let venue = self.venue_factor(venue);
        let vendor = self.vendor_factor(vendor);
        let city = self.city_factor(city);
        let guest_bracket = self.guest_factor(guests);

        ComposedMultiplier {
            venue,
            vendor,
            city,
            bracket: GuestBracket::for_guests(guests),
            guest_bracket,
            total: venue
                .saturating_mul(vendor)
                .saturating_mul(city)
                .saturating_mul(guest_bracket),
        }
    }

    /// Validates that every multiplier is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NonPositiveMultiplier` for the first offending entry.
    pub fn validate(&self) -> Result<(), PricingError> {
        let entries = self
            .venue
            .iter()
            .map(|(k, v)| (format!("venue:{k}"), *v))
            .chain(self.vendor.iter().map(|(k, v)| (format!("vendor:{k}"), *v)))
            .chain(self.city.iter().map(|(k, v)| (format!("city:{k}"), *v)))
            .chain(
                self.guest_bracket
                    .iter()
                    .map(|(k, v)| (format!("guest_bracket:{k:?}"), *v)),
            );

        for (key, value) in entries {
            if value <= Decimal::ZERO {
                return Err(PricingError::NonPositiveMultiplier { key, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("New York", "new-york")]
    #[case("  san   francisco ", "san-francisco")]
    #[case("Washington, D.C.", "washington-d-c")]
    #[case("Edison", "edison")]
    #[case("", "")]
    #[case("--", "")]
    fn test_city_slug(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(city_slug(input), expected);
    }

    #[test]
    fn test_builtin_tables_are_valid_and_total() {
        let table = MultiplierTable::builtin();
        assert!(table.validate().is_ok());
        for venue in VenueClass::ALL {
            assert!(table.venue.contains_key(&venue), "missing {venue}");
        }
        for vendor in VendorTier::ALL {
            assert!(table.vendor.contains_key(&vendor), "missing {vendor}");
        }
        for bracket in GuestBracket::ALL {
            assert!(table.guest_bracket.contains_key(&bracket));
        }
    }

    #[test]
    fn test_unknown_city_defaults_to_one() {
        let table = MultiplierTable::builtin();
        assert_eq!(table.city_factor(Some("Smallville")), Decimal::ONE);
        assert_eq!(table.city_factor(None), Decimal::ONE);
        assert_eq!(table.city_factor(Some("NEW YORK")), dec!(1.45));
    }

    #[test]
    fn test_missing_venue_entry_defaults_to_one() {
        let mut table = MultiplierTable::builtin();
        table.venue.remove(&VenueClass::LuxuryHotel);
        assert_eq!(table.venue_factor(VenueClass::LuxuryHotel), Decimal::ONE);
    }

    #[test]
    fn test_compose_is_product_of_factors() {
        let table = MultiplierTable::builtin();
        let m = table.compose(
            VenueClass::LuxuryHotel,
            VendorTier::Premium,
            Some("Chicago"),
            200,
        );
        assert_eq!(m.venue, dec!(1.50));
        assert_eq!(m.vendor, dec!(1.35));
        assert_eq!(m.city, dec!(1.15));
        assert_eq!(m.bracket, GuestBracket::Large);
        assert_eq!(m.guest_bracket, dec!(0.95));
        assert_eq!(m.total, dec!(1.50) * dec!(1.35) * dec!(1.15) * dec!(0.95));
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let mut table = MultiplierTable::builtin();
        table.city.insert("nowhere".to_string(), dec!(0));
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err,
            PricingError::NonPositiveMultiplier { ref key, .. } if key == "city:nowhere"
        ));
    }

    #[rstest]
    #[case(0, GuestBracket::Intimate)]
    #[case(74, GuestBracket::Intimate)]
    #[case(75, GuestBracket::Medium)]
    #[case(150, GuestBracket::Medium)]
    #[case(151, GuestBracket::Large)]
    #[case(300, GuestBracket::Large)]
    #[case(301, GuestBracket::Grand)]
    fn test_guest_bracket_breakpoints(#[case] guests: u32, #[case] expected: GuestBracket) {
        assert_eq!(GuestBracket::for_guests(guests), expected);
    }
}
