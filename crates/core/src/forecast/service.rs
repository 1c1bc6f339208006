//! Cash-flow forecasting from contract payment milestones.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use mandap_shared::types::parse_amount;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::ForecastError;
use super::types::{
    BudgetForecast, CashFlowSummary, Contract, ForecastInput, Milestone, MonthlyProjection,
    PaymentEntry,
};

/// Payments more than this many days overdue are left out of the schedule.
pub const OVERDUE_CUTOFF_DAYS: i64 = -30;

const SECONDS_PER_DAY: i64 = 86_400;

/// Service for cash-flow forecasts.
pub struct ForecastService;

impl ForecastService {
    /// Builds a forecast.
    ///
    /// Never fails. Malformed milestone data on one contract drops only that
    /// contract's milestones. A bad amount, or one that would overflow its
    /// running total, drops only that milestone. A bad due date keeps the
    /// milestone in the totals but out of the schedule. Monthly projections
    /// saturate at the `Decimal` bounds.
    #[must_use]
    pub fn forecast(input: &ForecastInput) -> BudgetForecast {
        if input.contracts.is_empty() {
            return BudgetForecast::default();
        }

        let mut total_paid = Decimal::ZERO;
        let mut total_committed = Decimal::ZERO;
        let mut schedule = Vec::new();

        for contract in &input.contracts {
            for milestone in Self::contract_milestones(contract) {
                let total = if milestone.paid {
                    &mut total_paid
                } else {
                    &mut total_committed
                };
                let Some(sum) = total.checked_add(milestone.amount) else {
                    let e = ForecastError::AmountOverflow {
                        name: milestone.name.clone(),
                    };
                    tracing::warn!(contract_id = %contract.id, error = %e, "Skipping milestone");
                    continue;
                };
                *total = sum;
                if milestone.paid {
                    continue;
                }

                let Some(due_at) = milestone.due_at else {
                    tracing::debug!(
                        contract_id = %contract.id,
                        milestone = %milestone.name,
                        "Milestone has no usable due date, leaving it out of the schedule"
                    );
                    continue;
                };

                let days_until_due = Self::days_until(due_at, input.now);
                if days_until_due < OVERDUE_CUTOFF_DAYS {
                    continue;
                }

                schedule.push(PaymentEntry {
                    contract_id: contract.id,
                    vendor_id: contract.vendor_id,
                    name: milestone.name,
                    amount: milestone.amount,
                    due_date: due_at.date_naive(),
                    days_until_due,
                    is_overdue: days_until_due < 0,
                });
            }
        }

        // Stable: equal due dates keep contract and milestone order.
        schedule.sort_by_key(|entry| entry.due_date);

        let total_budget = input.wedding.total_budget;
        let monthly_projections = Self::monthly_projections(&schedule, total_paid, total_budget);

        let today = input.now.date_naive();
        let months_until_wedding = input
            .wedding
            .wedding_date
            .map_or(0, |date| Self::months_between(today, date));
        let months_elapsed = input
            .wedding
            .planning_started_on
            .map_or(0, |start| Self::months_between(start, today));

        let total_remaining = total_committed;

        BudgetForecast {
            monthly_projections,
            cash_flow_summary: CashFlowSummary {
                total_committed,
                total_paid,
                total_remaining,
                months_until_wedding,
                average_monthly_spend: Self::per_month(total_paid, months_elapsed),
                projected_monthly_spend: Self::per_month(total_remaining, months_until_wedding),
            },
            payment_schedule: schedule,
        }
    }

    /// Parses a contract's milestones, logging and skipping anything malformed.
    #[must_use]
    pub fn contract_milestones(contract: &Contract) -> Vec<Milestone> {
        let raw = match Self::milestone_values(&contract.payment_milestones) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    contract_id = %contract.id,
                    error = %e,
                    "Ignoring contract payment milestones"
                );
                return Vec::new();
            }
        };

        raw.iter()
            .filter_map(|value| match Self::parse_milestone(value) {
                Ok(milestone) => Some(milestone),
                Err(e) => {
                    tracing::warn!(contract_id = %contract.id, error = %e, "Skipping milestone");
                    None
                }
            })
            .collect()
    }

    /// Unwraps the stored milestone field into a list of raw milestones.
    ///
    /// # Errors
    ///
    /// Returns a `ForecastError` when the field is neither an array nor a
    /// string holding a JSON array. Null counts as an empty list.
    pub fn milestone_values(field: &Value) -> Result<Vec<Value>, ForecastError> {
        match field {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => Ok(items.clone()),
            Value::String(encoded) if encoded.trim().is_empty() => Ok(Vec::new()),
            Value::String(encoded) => match serde_json::from_str::<Value>(encoded)? {
                Value::Array(items) => Ok(items),
                Value::Null => Ok(Vec::new()),
                other => Err(ForecastError::NotAList(json_kind(&other))),
            },
            other => Err(ForecastError::NotAList(json_kind(other))),
        }
    }

    /// Parses one raw milestone.
    ///
    /// # Errors
    ///
    /// Returns a `ForecastError` when the value is not an object or has no
    /// numeric amount. An unusable due date is not an error.
    pub fn parse_milestone(value: &Value) -> Result<Milestone, ForecastError> {
        let Value::Object(fields) = value else {
            return Err(ForecastError::NotAnObject);
        };

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let amount = fields
            .get("amount")
            .and_then(parse_amount)
            .ok_or_else(|| ForecastError::InvalidAmount { name: name.clone() })?;

        let due_at = fields
            .get("dueDate")
            .or_else(|| fields.get("due_date"))
            .and_then(Value::as_str)
            .and_then(parse_due_date);

        let paid = fields
            .get("status")
            .and_then(Value::as_str)
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("paid"));

        Ok(Milestone {
            name,
            amount,
            due_at,
            paid,
        })
    }

    /// Whole days from `now` until `due`, rounded up.
    #[must_use]
    pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        let seconds = (due - now).num_seconds();
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
            days + 1
        } else {
            days
        }
    }

    /// Whole calendar months from `from` to `to`, zero if `to` is earlier.
    #[must_use]
    pub fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
        let mut months = (i64::from(to.year()) - i64::from(from.year())) * 12
            + i64::from(to.month())
            - i64::from(from.month());
        if to.day() < from.day() {
            months -= 1;
        }
        u32::try_from(months.max(0)).unwrap_or(u32::MAX)
    }

    fn monthly_projections(
        schedule: &[PaymentEntry],
        total_paid: Decimal,
        total_budget: Decimal,
    ) -> Vec<MonthlyProjection> {
        let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();
        for entry in schedule {
            let bucket = by_month
                .entry(entry.due_date.format("%Y-%m").to_string())
                .or_default();
            *bucket = bucket.saturating_add(entry.amount);
        }

        let mut projected_spent = total_paid;
        by_month
            .into_iter()
            .map(|(month, upcoming_payments)| {
                projected_spent = projected_spent.saturating_add(upcoming_payments);
                MonthlyProjection {
                    month,
                    projected_spent,
                    budget_remaining: total_budget.saturating_sub(projected_spent),
                    upcoming_payments,
                }
            })
            .collect()
    }

    fn per_month(amount: Decimal, months: u32) -> Decimal {
        if months == 0 {
            return Decimal::ZERO;
        }
        (amount / Decimal::from(months)).round_dp(2)
    }
}

/// Parses `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
