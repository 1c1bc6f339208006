//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{format_amount, parse_amount, round_to_unit};
