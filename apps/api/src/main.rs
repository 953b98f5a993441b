mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (a missing credential is tolerated, a bad PORT is not)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill-Match API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini client. Startup continues without a credential;
    // the analysis endpoints then answer with a uniform 500 instead.
    let llm = match &config.google_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone());
            info!("Gemini client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            error!("GOOGLE_API_KEY not set; /api/analyze and /api/skill_info will return errors");
            None
        }
    };

    // Build app state
    let state = AppState { llm };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
