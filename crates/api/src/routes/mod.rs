//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod estimates;
pub mod forecast;
pub mod health;
pub mod pricing;
pub mod scenarios;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(pricing::routes())
        .merge(estimates::routes())
        .merge(scenarios::routes())
        .merge(forecast::routes())
}
