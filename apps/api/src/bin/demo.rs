use anyhow::{Context, Result};
use tracing::info;

use jobassist::config::Config;
use jobassist::demo;
use jobassist::llm_client::OllamaClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    jobassist::init_tracing(&config.rust_log);

    let llm = OllamaClient::from_config(&config).context("Failed to build LLM client")?;
    info!(
        "Running demo against {} (model: {})",
        config.ollama_base_url,
        llm.model()
    );

    // A failed stage ends the walkthrough; the process still exits normally
    if let Err(abort) = demo::run(&llm).await {
        println!("❌ {abort}");
    }

    Ok(())
}
