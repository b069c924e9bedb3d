use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use jobassist::config::Config;
use jobassist::llm_client::OllamaClient;
use jobassist::routes::build_router;
use jobassist::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    jobassist::init_tracing(&config.rust_log);

    info!("Starting Job Assistant API v{}", env!("CARGO_PKG_VERSION"));

    let llm = OllamaClient::from_config(&config).context("Failed to build LLM client")?;
    info!(
        "LLM client initialized (model: {}, host: {})",
        llm.model(),
        config.ollama_base_url
    );

    let state = AppState {
        llm: Arc::new(llm),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
