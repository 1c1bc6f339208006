//! Shared types, errors, and configuration for Mandap.
//!
//! This crate provides common types used across all other crates:
//! - Whole-unit currency rounding and wire formatting for money
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, AssumptionsConfig, PricingConfig, ServerConfig};
pub use error::{AppError, AppResult};
