//! Line item cost calculation.
//!
//! Per-unit prices are rounded to whole currency units *before* they are
//! multiplied by a quantity, so a displayed unit price times its quantity is
//! always exactly the displayed total. Every call site prices line items
//! through [`LineItemCostCalculator::calculate`].

use mandap_shared::types::round_to_unit;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::pricing::{CostUnit, LineItem};

/// Priced line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemCost {
    /// Rounded per-unit price at the low end.
    pub unit_low: Decimal,
    /// Rounded per-unit price at the high end.
    pub unit_high: Decimal,
    /// Quantity the low unit price is multiplied by.
    pub quantity_low: u32,
    /// Quantity the high unit price is multiplied by.
    pub quantity_high: u32,
    /// Total low cost (`unit_low * quantity_low`).
    pub low: Decimal,
    /// Total high cost (`unit_high * quantity_high`).
    pub high: Decimal,
    /// Label for the unit price (e.g. "per guest").
    pub unit_label: &'static str,
}

/// Calculator for single line items.
pub struct LineItemCostCalculator;

impl LineItemCostCalculator {
    /// Prices a line item for a guest count and composed multiplier.
    ///
    /// - `fixed`: the adjusted cost, quantity 1
    /// - `per_person`: adjusted cost per guest, times the guest count
    /// - `per_hour`: adjusted hourly rate, times low/high hours (default 3/4)
    ///
    /// Prices beyond the `Decimal` range saturate at its bounds.
    #[must_use]
    pub fn calculate(item: &LineItem, guests: u32, multiplier: Decimal) -> LineItemCost {
        let unit_low = round_to_unit(item.low_cost.saturating_mul(multiplier));
        let unit_high = round_to_unit(item.high_cost.saturating_mul(multiplier));

        let (quantity_low, quantity_high) = match item.unit {
            CostUnit::Fixed => (1, 1),
            CostUnit::PerPerson => (guests, guests),
            CostUnit::PerHour => item.hours(),
        };

        LineItemCost {
            unit_low,
            unit_high,
            quantity_low,
            quantity_high,
            low: unit_low.saturating_mul(Decimal::from(quantity_low)),
            high: unit_high.saturating_mul(Decimal::from(quantity_high)),
            unit_label: item.unit.label(),
        }
    }
}
