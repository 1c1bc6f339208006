//! Estimator input types.

use serde::{Deserialize, Serialize};

use crate::pricing::{VendorTier, VenueClass};

/// Venue, vendor and city chosen for an estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateSelections {
    /// Selected venue class.
    #[serde(default)]
    pub venue: VenueClass,
    /// Selected vendor tier.
    #[serde(default)]
    pub vendor: VendorTier,
    /// Selected city; unknown or absent cities price at 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl EstimateSelections {
    /// Returns a copy with the city filled in from `fallback` when unset.
    #[must_use]
    pub fn or_city(mut self, fallback: Option<&str>) -> Self {
        if self.city.is_none() {
            self.city = fallback.map(str::to_string);
        }
        self
    }
}

/// Bounds for the guest-count slider of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRange {
    /// Smallest selectable guest count.
    pub min: u32,
    /// Largest selectable guest count.
    pub max: u32,
}

impl GuestRange {
    /// Builds the range around an original guest count.
    ///
    /// `min = max(floor, floor(0.3 * original))` and
    /// `max = max(min + 50, original, ceil(1.5 * original))`.
    #[must_use]
    pub fn for_original(original: u32, floor: u32) -> Self {
        let original = u64::from(original);
        let min = floor.max(narrow(original * 3 / 10));
        let max = u64::from(min)
            .saturating_add(50)
            .max(original)
            .max((original * 3).div_ceil(2));
        Self {
            min,
            max: narrow(max),
        }
    }

    /// Clamps a guest count into the range.
    #[must_use]
    pub fn clamp(&self, guests: i64) -> u32 {
        let guests = guests.clamp(i64::from(self.min), i64::from(self.max));
        u32::try_from(guests).unwrap_or(self.max)
    }

    /// Returns true if `guests` lies inside the range.
    #[must_use]
    pub fn contains(&self, guests: u32) -> bool {
        (self.min..=self.max).contains(&guests)
    }
}

fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
