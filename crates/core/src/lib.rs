//! Core estimation logic for Mandap.
//!
//! This crate contains pure calculation logic with ZERO web or database
//! dependencies. Every calculation takes all of its inputs as arguments and
//! returns a fresh result.
//!
//! # Modules
//!
//! - `pricing` - Multiplier tables and the ceremony template catalog
//! - `estimate` - Line-item cost model (interactive estimator, dashboard summary)
//! - `scenario` - Proportional what-if model over the wedding total
//! - `forecast` - Cash-flow forecasting from contract milestones
//! - `planner` - Budget and scenario commands sent to the planning API
//! - `wedding` - Wedding and event input records

pub mod estimate;
pub mod forecast;
pub mod planner;
pub mod pricing;
pub mod scenario;
pub mod wedding;
