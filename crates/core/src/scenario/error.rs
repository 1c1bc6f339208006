//! Scenario validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a scenario form cannot be saved.
///
/// Only raised by validation. Computing an impact never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    /// Scenario name is empty.
    #[error("Scenario name cannot be empty")]
    EmptyName,

    /// A multiplier is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveMultiplier {
        /// Form field name.
        field: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// The guest count change would leave fewer than zero guests.
    #[error("Guest count change leaves {resulting} guests")]
    NegativeGuestCount {
        /// Guest count after applying the change.
        resulting: i64,
    },
}
