//! LLM Client: the single point of entry for all generation calls in the assistant.
//!
//! ARCHITECTURAL RULE: No pipeline may talk to the model host directly.
//! Pipelines take a `&dyn TextGenerator`; `OllamaClient` is the production backend.
//!
//! One attempt per call. A failed call is surfaced as `GenerationError`, never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[cfg(test)]
pub mod mock;
pub mod output_parser;
pub mod prompts;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed reply envelope: {0}")]
    Envelope(String),

    #[error("LLM returned empty content")]
    EmptyResponse,
}

/// The generation capability every pipeline consumes.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` at the given sampling temperature and waits for the full reply text.
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaReply {
    response: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaErrorBody {
    error: String,
}

/// Non-streaming client for a locally hosted Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(
        base_url: &str,
        model: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, GenerationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        Self::new(
            &config.ollama_base_url,
            &config.ollama_model,
            config.llm_timeout,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, GenerationError> {
        let request_body = OllamaRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: OllamaOptions { temperature },
        };

        debug!(
            "Sending prompt to {} (model={}, temperature={}, prompt_chars={})",
            self.endpoint(),
            self.model,
            temperature,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_reply(status, &body)
    }
}

/// Turns a raw `/api/generate` reply into the generated text.
fn decode_reply(status: u16, body: &str) -> Result<String, GenerationError> {
    if !(200..300).contains(&status) {
        // Ollama reports failures as {"error": "..."}; fall back to the raw body
        let message = serde_json::from_str::<OllamaErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.to_string());
        return Err(GenerationError::Api { status, message });
    }

    let reply: OllamaReply =
        serde_json::from_str(body).map_err(|e| GenerationError::Envelope(e.to_string()))?;

    debug!(
        "Generation succeeded: prompt_tokens={:?}, output_tokens={:?}",
        reply.prompt_eval_count, reply.eval_count
    );

    if reply.response.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    Ok(reply.response)
}
