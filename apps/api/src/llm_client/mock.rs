//! Scripted `TextGenerator` for tests. Never touches the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{GenerationError, TextGenerator};

#[derive(Debug, Clone)]
enum Outcome {
    Reply(String),
    Fault(String),
}

/// Replays scripted outcomes in order; the last one repeats once the script runs out.
pub struct MockGenerator {
    script: Mutex<VecDeque<Outcome>>,
    calls: Mutex<Vec<(String, f32)>>,
}

impl MockGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_script(vec![Outcome::Reply(text.to_string())])
    }

    pub fn failing(message: &str) -> Self {
        Self::with_script(vec![Outcome::Fault(message.to_string())])
    }

    pub fn replies(texts: &[&str]) -> Self {
        Self::with_script(
            texts
                .iter()
                .map(|t| Outcome::Reply(t.to_string()))
                .collect(),
        )
    }

    fn with_script(script: Vec<Outcome>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _)| p.clone())
            .collect()
    }

    pub fn temperatures(&self) -> Vec<f32> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), temperature));

        let outcome = {
            let mut script = self.script.lock().unwrap();
            if script.len() > 1 {
                script.pop_front()
            } else {
                script.front().cloned()
            }
        };

        match outcome {
            Some(Outcome::Reply(text)) => Ok(text),
            Some(Outcome::Fault(message)) => Err(GenerationError::Api {
                status: 503,
                message,
            }),
            None => Err(GenerationError::EmptyResponse),
        }
    }
}
