pub mod assistant;
pub mod config;
pub mod demo;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging. `RUST_LOG` wins; otherwise `jobassist=<default_level>`.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), default_level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
