//! Wellfound Job Scraper Server
//!
//! Exposes the single-page listing scraper as a REST API using Axum.

mod config;
mod error;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wellfound_scraper::Scraper;

use crate::config::Config;
use crate::routes::{AppState, router};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("wellfound_server=info,wellfound_scraper=info,tower_http=info")
        }))
        .init();

    info!("🚀 Starting Wellfound Job Scraper Server...");

    let config = Config::parse();
    let scraper =
        Scraper::new(config.scraper_config()).context("Failed to build HTTP client")?;
    info!(
        base_url = %scraper.config().base_url,
        delay_secs = config.delay_secs,
        "Scraper configured"
    );

    // Create shared state
    let state = Arc::new(AppState { scraper });
    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("🌐 Server running at http://{}", config.bind);
    info!(
        "   Try: curl 'http://{}/scrape?keyword=backend-engineer&page=1'",
        config.bind
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
