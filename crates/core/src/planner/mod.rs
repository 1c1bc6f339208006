//! Side-effecting commands issued to the planning API.
//!
//! The estimation engine never persists anything itself. Applying a budget
//! and saving or deleting a scenario go through a [`BudgetClient`].

pub mod client;
pub mod service;

pub use client::BudgetClient;
pub use service::PlannerService;
