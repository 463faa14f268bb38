mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod tailoring;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values, not on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.anthropic_api_url.clone(),
        config.anthropic_api_key.clone(),
        config.generation.clone(),
    )?;
    if config.api_key_configured() {
        info!("LLM client initialized (model: {})", config.generation.model);
    } else {
        warn!("ANTHROPIC_API_KEY is not set; /api/tailor will fail until it is configured");
    }

    let state = AppState {
        config: config.clone(),
        generator: Arc::new(llm),
    };

    // Permissive CORS: the caller is a browser extension with an unpredictable origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
