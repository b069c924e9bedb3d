// Job application assistant pipelines: job analysis, resume suggestions, cover letters.
// All LLM calls go through llm_client::TextGenerator, never direct HTTP calls here.

pub mod cover_letter;
pub mod handlers;
pub mod job_analyzer;
pub mod models;
pub mod prompts;
pub mod resume_suggestions;
pub mod samples;
