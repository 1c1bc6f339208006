//! Mandap API Server
//!
//! Main entry point for the Mandap estimation service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mandap_api::{AppState, create_router};
use mandap_core::pricing::{CeremonyCatalog, PricingBook};
use mandap_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mandap=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let mut book = PricingBook::builtin();
    if let Some(path) = &config.pricing.catalog_path {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = CeremonyCatalog::from_json(&json)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        book = book.with_catalog(catalog)?;
        info!(path = %path.display(), templates = book.catalog.templates.len(), "Loaded ceremony catalog");
    }

    let state = AppState::new(book, &config);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
