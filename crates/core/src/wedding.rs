//! Wedding and event records consumed from the planning API.
//!
//! These are read-only inputs; persistence lives elsewhere.

use chrono::NaiveDate;
use mandap_shared::types::{EventId, WeddingId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One event of a wedding (a ceremony or party).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID.
    pub id: EventId,
    /// Free-text event name (e.g. "Sangeet Night").
    pub name: String,
    /// Free-text event type as stored by the planner.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Planned guest count.
    #[serde(default, alias = "guestCount")]
    pub guest_count: i64,
    /// Event date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Event location.
    #[serde(default)]
    pub location: Option<String>,
}

/// A wedding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wedding {
    /// Wedding ID.
    pub id: WeddingId,
    /// Current total budget.
    #[serde(default, alias = "totalBudget")]
    pub total_budget: Decimal,
    /// Estimated guest count for the whole wedding.
    #[serde(default, alias = "guestCountEstimate")]
    pub guest_count_estimate: i64,
    /// Date of the wedding.
    #[serde(default, alias = "weddingDate")]
    pub wedding_date: Option<NaiveDate>,
    /// Date planning started (used to average spend so far).
    #[serde(default, alias = "planningStartedOn")]
    pub planning_started_on: Option<NaiveDate>,
}
