//! Cash-flow forecast data types.

use chrono::{DateTime, NaiveDate, Utc};
use mandap_shared::types::{ContractId, VendorId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wedding::Wedding;

/// A vendor contract with its payment milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Contract ID.
    pub id: ContractId,
    /// Vendor the contract is with.
    #[serde(default, alias = "vendorId")]
    pub vendor_id: Option<VendorId>,
    /// Milestones as stored: an array, a JSON-encoded array string, or null.
    #[serde(default, alias = "paymentMilestones")]
    pub payment_milestones: serde_json::Value,
}

/// A milestone after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Milestone name.
    pub name: String,
    /// Amount due.
    pub amount: Decimal,
    /// When the payment is due, if a usable date was given.
    pub due_at: Option<DateTime<Utc>>,
    /// Whether the milestone is marked paid.
    pub paid: bool,
}

/// One upcoming payment in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentEntry {
    /// Contract the payment belongs to.
    pub contract_id: ContractId,
    /// Vendor of that contract.
    pub vendor_id: Option<VendorId>,
    /// Milestone name.
    pub name: String,
    /// Amount due.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Whole days until due, rounded up; negative when overdue.
    pub days_until_due: i64,
    /// Whether the due date has passed.
    pub is_overdue: bool,
}

/// Projected spend for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyProjection {
    /// Month key (`YYYY-MM`).
    pub month: String,
    /// Cumulative spend by the end of the month, starting from what is paid.
    pub projected_spent: Decimal,
    /// Total budget minus projected spend; negative signals overspend.
    pub budget_remaining: Decimal,
    /// Sum of payments due in the month.
    pub upcoming_payments: Decimal,
}

/// Committed, paid and remaining totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CashFlowSummary {
    /// Sum of all unpaid milestone amounts.
    pub total_committed: Decimal,
    /// Sum of all paid milestone amounts.
    pub total_paid: Decimal,
    /// Amount still to pay (equal to `total_committed`).
    pub total_remaining: Decimal,
    /// Whole calendar months until the wedding, never negative.
    pub months_until_wedding: u32,
    /// Paid amount per month of planning so far.
    pub average_monthly_spend: Decimal,
    /// Remaining amount per month until the wedding.
    pub projected_monthly_spend: Decimal,
}

/// Month-bucketed cash-flow forecast.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BudgetForecast {
    /// Monthly projections in calendar order.
    pub monthly_projections: Vec<MonthlyProjection>,
    /// Summary totals.
    pub cash_flow_summary: CashFlowSummary,
    /// Upcoming payments sorted by due date, ties in input order.
    pub payment_schedule: Vec<PaymentEntry>,
}

/// Everything the forecaster reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInput {
    /// The wedding's contracts.
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// The wedding record.
    pub wedding: Wedding,
    /// Current time.
    pub now: DateTime<Utc>,
}
