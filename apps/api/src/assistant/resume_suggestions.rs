//! Resume suggestion generator: compares a resume against extracted job details.

use tracing::{info, warn};

use crate::assistant::models::{JobDetails, ResumeSuggestions};
use crate::assistant::prompts::RESUME_SUGGESTION_PROMPT_TEMPLATE;
use crate::errors::AssistantError;
use crate::llm_client::output_parser::{format_instructions, parse_structured};
use crate::llm_client::prompts::render;
use crate::llm_client::TextGenerator;

pub const RESUME_SUGGESTION_TEMPERATURE: f32 = 0.5;

pub fn build_suggestion_prompt(job_details: &JobDetails, current_resume: &str) -> String {
    let required_skills = job_details.required_skills.join(", ");
    let experience = job_details.experience_required.to_string();
    let tools = job_details.tools.join(", ");
    let instructions = format_instructions::<ResumeSuggestions>();

    render(
        RESUME_SUGGESTION_PROMPT_TEMPLATE,
        &[
            ("job_title", job_details.job_title.as_str()),
            ("required_skills", required_skills.as_str()),
            ("experience_required", experience.as_str()),
            ("tools", tools.as_str()),
            ("current_resume", current_resume),
            ("format_instructions", instructions.as_str()),
        ],
    )
}

/// Generates tailored resume suggestions for the given job.
pub async fn generate_suggestions(
    job_details: &JobDetails,
    current_resume: &str,
    llm: &dyn TextGenerator,
) -> Result<ResumeSuggestions, AssistantError> {
    let prompt = build_suggestion_prompt(job_details, current_resume);

    info!("Generating resume suggestions for {:?}", job_details.job_title);
    let raw = llm.generate(&prompt, RESUME_SUGGESTION_TEMPERATURE).await?;

    let suggestions = parse_structured::<ResumeSuggestions>(&raw).map_err(|e| {
        warn!("Resume suggestions rejected: {e}");
        e
    })?;

    info!(
        "Suggestions ready: {} missing skills, {} improvement points, fit={:?}",
        suggestions.missing_skills.len(),
        suggestions.improvement_points.len(),
        suggestions.fit_percentage()
    );
    Ok(suggestions)
}
