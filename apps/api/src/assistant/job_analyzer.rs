//! Job description analyzer: extracts a `JobDetails` record from raw job-description text.

use tracing::{info, warn};

use crate::assistant::models::JobDetails;
use crate::assistant::prompts::JOB_ANALYSIS_PROMPT_TEMPLATE;
use crate::errors::AssistantError;
use crate::llm_client::output_parser::{format_instructions, parse_structured};
use crate::llm_client::prompts::render;
use crate::llm_client::TextGenerator;

/// Extraction wants stable, literal answers.
pub const JOB_ANALYSIS_TEMPERATURE: f32 = 0.3;

pub fn build_job_analysis_prompt(job_description: &str) -> String {
    let instructions = format_instructions::<JobDetails>();
    render(
        JOB_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("job_description", job_description),
            ("format_instructions", instructions.as_str()),
        ],
    )
}

/// Analyzes a job description and returns the structured job details.
pub async fn analyze_job_description(
    job_description: &str,
    llm: &dyn TextGenerator,
) -> Result<JobDetails, AssistantError> {
    let prompt = build_job_analysis_prompt(job_description);

    info!(
        "Analyzing job description ({} chars)",
        job_description.len()
    );
    let raw = llm.generate(&prompt, JOB_ANALYSIS_TEMPERATURE).await?;

    let details = parse_structured::<JobDetails>(&raw).map_err(|e| {
        warn!("Job description analysis rejected: {e}");
        e
    })?;

    info!(
        "Job details extracted: title={:?}, experience={}y, skills={}",
        details.job_title,
        details.experience_required,
        details.required_skills.len()
    );
    Ok(details)
}
