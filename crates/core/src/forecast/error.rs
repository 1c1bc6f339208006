//! Forecast parse errors.
//!
//! These never escape the forecaster. Each one drops a single contract's
//! milestone list or a single milestone and is logged at `warn`.

use thiserror::Error;

/// Problems found while reading contract payment milestones.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Milestones were a string that is not valid JSON.
    #[error("Malformed milestone JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Milestones were neither an array nor a JSON-encoded array.
    #[error("Expected a milestone array, got {0}")]
    NotAList(&'static str),

    /// A milestone is not a JSON object.
    #[error("Milestone is not an object")]
    NotAnObject,

    /// A milestone amount is missing or not numeric.
    #[error("Milestone '{name}' has no usable amount")]
    InvalidAmount {
        /// Milestone name.
        name: String,
    },

    /// Adding a milestone amount would overflow its running total.
    #[error("Milestone '{name}' amount overflows the running total")]
    AmountOverflow {
        /// Milestone name.
        name: String,
    },
}
