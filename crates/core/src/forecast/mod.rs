//! Cash-flow forecasting from contract payment milestones.

pub mod error;
pub mod service;
pub mod types;


pub use error::ForecastError;
pub use service::{ForecastService, OVERDUE_CUTOFF_DAYS};
pub use types::{
    BudgetForecast, CashFlowSummary, Contract, ForecastInput, Milestone, MonthlyProjection,
    PaymentEntry,
};
