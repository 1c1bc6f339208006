//! Pricing reference data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Default billable hours (low end) for hourly line items without explicit hours.
pub const DEFAULT_HOURS_LOW: u32 = 3;

/// Default billable hours (high end) for hourly line items without explicit hours.
pub const DEFAULT_HOURS_HIGH: u32 = 4;

/// Venue grade, selected per event.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VenueClass {
    /// Community or cultural hall.
    CommunityHall,
    /// Restaurant private dining or buyout.
    Restaurant,
    /// Standard banquet hall.
    #[default]
    BanquetHall,
    /// Outdoor estate, farm or garden venue.
    OutdoorEstate,
    /// Luxury hotel ballroom.
    LuxuryHotel,
    /// Destination resort.
    DestinationResort,
}

impl VenueClass {
    /// All venue classes, cheapest first.
    pub const ALL: [Self; 6] = [
        Self::CommunityHall,
        Self::Restaurant,
        Self::BanquetHall,
        Self::OutdoorEstate,
        Self::LuxuryHotel,
        Self::DestinationResort,
    ];

    /// Returns the wire name of the venue class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommunityHall => "community_hall",
            Self::Restaurant => "restaurant",
            Self::BanquetHall => "banquet_hall",
            Self::OutdoorEstate => "outdoor_estate",
            Self::LuxuryHotel => "luxury_hotel",
            Self::DestinationResort => "destination_resort",
        }
    }
}

impl std::fmt::Display for VenueClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VenueClass {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| PricingError::UnknownVenueClass(s.to_string()))
    }
}

/// Vendor grade, selected per event.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VendorTier {
    /// Budget vendors.
    Budget,
    /// Standard vendors.
    #[default]
    Standard,
    /// Premium vendors.
    Premium,
    /// Luxury vendors.
    Luxury,
}

impl VendorTier {
    /// All vendor tiers, cheapest first.
    pub const ALL: [Self; 4] = [Self::Budget, Self::Standard, Self::Premium, Self::Luxury];

    /// Returns the wire name of the vendor tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }
}

impl std::fmt::Display for VendorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VendorTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| PricingError::UnknownVendorTier(s.to_string()))
    }
}

/// Discretized guest-count range used to select a scale multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestBracket {
    /// Fewer than 75 guests.
    Intimate,
    /// 75 to 150 guests.
    Medium,
    /// 151 to 300 guests.
    Large,
    /// More than 300 guests.
    Grand,
}

impl GuestBracket {
    /// All brackets, smallest first.
    pub const ALL: [Self; 4] = [Self::Intimate, Self::Medium, Self::Large, Self::Grand];

    /// Derives the bracket for a guest count.
    #[must_use]
    pub const fn for_guests(guests: u32) -> Self {
        match guests {
            0..75 => Self::Intimate,
            75..=150 => Self::Medium,
            151..=300 => Self::Large,
            _ => Self::Grand,
        }
    }
}

/// How a line item's cost scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostUnit {
    /// Flat fee, independent of guest count.
    Fixed,
    /// Charged per guest.
    PerPerson,
    /// Charged per billable hour.
    PerHour,
}

impl CostUnit {
    /// Human-readable label shown next to the per-unit price.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "flat fee",
            Self::PerPerson => "per guest",
            Self::PerHour => "per hour",
        }
    }
}

/// One budget sub-category within a ceremony template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Category name (e.g. "Catering", "Decor").
    pub category: String,
    /// How the cost scales.
    pub unit: CostUnit,
    /// Low end of the base cost per unit.
    pub low_cost: Decimal,
    /// High end of the base cost per unit.
    pub high_cost: Decimal,
    /// Billable hours at the low end (hourly items only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_low: Option<u32>,
    /// Billable hours at the high end (hourly items only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_high: Option<u32>,
    /// Optional planner notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LineItem {
    /// Creates a line item without hours or notes.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        unit: CostUnit,
        low_cost: Decimal,
        high_cost: Decimal,
    ) -> Self {
        Self {
            category: category.into(),
            unit,
            low_cost,
            high_cost,
            hours_low: None,
            hours_high: None,
            notes: None,
        }
    }

    /// Sets explicit billable hours.
    #[must_use]
    pub fn with_hours(mut self, low: u32, high: u32) -> Self {
        self.hours_low = Some(low);
        self.hours_high = Some(high);
        self
    }

    /// Attaches planner notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Billable hours as `(low, high)`, defaulting to 3 and 4.
    #[must_use]
    pub fn hours(&self) -> (u32, u32) {
        (
            self.hours_low.unwrap_or(DEFAULT_HOURS_LOW),
            self.hours_high.unwrap_or(DEFAULT_HOURS_HIGH),
        )
    }
}

/// A reusable cost profile for one type of wedding event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeremonyTemplate {
    /// Stable key (e.g. "mehndi").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Tradition the ceremony belongs to.
    pub tradition: String,
    /// Typical guest count for this ceremony.
    pub default_guest_count: u32,
    /// Ordered line items.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("luxury_hotel", VenueClass::LuxuryHotel)]
    #[case("  Banquet_Hall ", VenueClass::BanquetHall)]
    #[case("DESTINATION_RESORT", VenueClass::DestinationResort)]
    fn test_venue_class_from_str(#[case] input: &str, #[case] expected: VenueClass) {
        assert_eq!(input.parse::<VenueClass>().unwrap(), expected);
    }

    #[rstest]
    #[case("budget", VendorTier::Budget)]
    #[case(" Premium", VendorTier::Premium)]
    #[case("LUXURY\t", VendorTier::Luxury)]
    fn test_vendor_tier_from_str(#[case] input: &str, #[case] expected: VendorTier) {
        assert_eq!(input.parse::<VendorTier>().unwrap(), expected);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for venue in VenueClass::ALL {
            assert_eq!(venue.to_string().parse::<VenueClass>().unwrap(), venue);
            assert_eq!(
                serde_json::to_value(venue).unwrap(),
                serde_json::Value::String(venue.as_str().to_string())
            );
        }
        for vendor in VendorTier::ALL {
            assert_eq!(vendor.to_string().parse::<VendorTier>().unwrap(), vendor);
            assert_eq!(
                serde_json::to_value(vendor).unwrap(),
                serde_json::Value::String(vendor.as_str().to_string())
            );
        }
    }

    #[rstest]
    #[case("castle")]
    #[case("luxury hotel")]
    #[case("")]
    fn test_unknown_venue_class_is_rejected(#[case] input: &str) {
        let err = input.parse::<VenueClass>().unwrap_err();
        assert!(matches!(err, PricingError::UnknownVenueClass(ref name) if name == input));
    }

    #[rstest]
    #[case("platinum")]
    #[case("standard-plus")]
    fn test_unknown_vendor_tier_is_rejected(#[case] input: &str) {
        let err = input.parse::<VendorTier>().unwrap_err();
        assert!(matches!(err, PricingError::UnknownVendorTier(ref name) if name == input));
        assert_eq!(err.to_string(), format!("Unknown vendor tier: {input}"));
    }
}
