//! Pricing reference data: multiplier tables and the ceremony catalog.

pub mod book;
pub mod catalog;
pub mod error;
pub mod multipliers;
pub mod types;

#[cfg(test)]
mod tests;

pub use book::PricingBook;
pub use catalog::CeremonyCatalog;
pub use error::PricingError;
pub use multipliers::{ComposedMultiplier, MultiplierTable, city_slug};
pub use types::{
    CeremonyTemplate, CostUnit, DEFAULT_HOURS_HIGH, DEFAULT_HOURS_LOW, GuestBracket, LineItem,
    VendorTier, VenueClass,
};
