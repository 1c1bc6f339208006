//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every estimate in the system rounds through [`round_to_unit`] so the
//! estimator, the dashboard summary and the API agree to the unit.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Rounds an amount to the nearest whole currency unit.
///
/// Midpoints round away from zero, which for the non-negative amounts the
/// estimator works with is the familiar "round half up".
#[must_use]
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount for the wire with exactly two decimal places.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Parses a loosely-typed JSON amount.
///
/// Accepts JSON numbers and numeric strings (including scientific notation).
/// Anything else yields `None` so callers can drop that single data point.
#[must_use]
pub fn parse_amount(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => parse_decimal_str(&n.to_string()),
        serde_json::Value::String(s) => parse_decimal_str(s.trim()),
        _ => None,
    }
}

fn parse_decimal_str(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
