//! Pricing reference data errors.
//!
//! Only raised while loading or validating reference data. Lookups during a
//! calculation never fail; missing keys fall back to a neutral multiplier.

use rust_decimal::Decimal;
use thiserror::Error;

/// Pricing-related errors.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Unknown venue class name.
    #[error("Unknown venue class: {0}")]
    UnknownVenueClass(String),

    /// Unknown vendor tier name.
    #[error("Unknown vendor tier: {0}")]
    UnknownVendorTier(String),

    /// A multiplier is zero or negative.
    #[error("Multiplier for {key} must be positive, got {value}")]
    NonPositiveMultiplier {
        /// Table key the multiplier belongs to.
        key: String,
        /// Offending value.
        value: Decimal,
    },

    /// A line item has negative costs or low above high.
    #[error("Invalid line item '{category}' in ceremony '{ceremony_id}': {reason}")]
    InvalidLineItem {
        /// Ceremony the line item belongs to.
        ceremony_id: String,
        /// Line item category.
        category: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two templates share the same id.
    #[error("Duplicate ceremony id: {0}")]
    DuplicateCeremony(String),

    /// Catalog JSON could not be parsed.
    #[error("Catalog could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}
