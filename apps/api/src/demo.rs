//! Console walkthrough: runs the three pipelines in order against the sample inputs.
//!
//! Results are printed for a human reader. The first failure stops the walkthrough.

use thiserror::Error;
use tracing::error;

use crate::assistant::cover_letter::generate_cover_letter;
use crate::assistant::job_analyzer::analyze_job_description;
use crate::assistant::models::{JobDetails, ResumeSuggestions};
use crate::assistant::resume_suggestions::generate_suggestions;
use crate::assistant::samples::{
    sample_cover_letter_request, SAMPLE_JOB_DESCRIPTION, SAMPLE_RESUME,
};
use crate::errors::AssistantError;
use crate::llm_client::TextGenerator;

pub const JOB_ANALYZER_STAGE: &str = "Job Description Analyzer";
pub const RESUME_SUGGESTIONS_STAGE: &str = "Resume Suggestion Generator";
pub const COVER_LETTER_STAGE: &str = "Cover Letter Generator";

/// The stage that failed and why.
#[derive(Debug, Error)]
#[error("Error in {stage}: {source}")]
pub struct DemoAbort {
    pub stage: &'static str,
    #[source]
    pub source: AssistantError,
}

fn abort_at(stage: &'static str) -> impl FnOnce(AssistantError) -> DemoAbort {
    move |source| {
        error!("{stage} failed: {source}");
        DemoAbort { stage, source }
    }
}

pub async fn run(llm: &dyn TextGenerator) -> Result<(), DemoAbort> {
    println!("\n{}", "=".repeat(80));
    println!("AI JOB APPLICATION ASSISTANT");
    println!("{}", "=".repeat(80));

    section("FEATURE 1: JOB DESCRIPTION ANALYZER");
    let job_details = analyze_job_description(SAMPLE_JOB_DESCRIPTION, llm)
        .await
        .map_err(abort_at(JOB_ANALYZER_STAGE))?;
    print_job_details(&job_details);

    section("FEATURE 2: RESUME IMPROVEMENT SUGGESTIONS");
    let suggestions = generate_suggestions(&job_details, SAMPLE_RESUME, llm)
        .await
        .map_err(abort_at(RESUME_SUGGESTIONS_STAGE))?;
    print_suggestions(&suggestions);

    section("FEATURE 3: COVER LETTER GENERATOR");
    let cover_letter = generate_cover_letter(&sample_cover_letter_request(), llm)
        .await
        .map_err(AssistantError::from)
        .map_err(abort_at(COVER_LETTER_STAGE))?;
    println!("\n✅ Generated Cover Letter:");
    println!("\n{}", "-".repeat(80));
    println!("{cover_letter}");
    println!("{}", "-".repeat(80));

    println!("\n{}", "=".repeat(80));
    println!("✅ ALL FEATURES COMPLETED SUCCESSFULLY!");
    println!("{}\n", "=".repeat(80));

    Ok(())
}

fn section(title: &str) {
    println!("\n{}", "-".repeat(80));
    println!("{title}");
    println!("{}", "-".repeat(80));
}

fn print_job_details(details: &JobDetails) {
    println!("\n✅ Extracted Job Details:");
    println!("   Job Title: {}", details.job_title);
    println!(
        "   Experience Required: {} years",
        details.experience_required
    );
    println!("   Required Skills: {}", details.required_skills.join(", "));
    println!("   Tools: {}", details.tools.join(", "));
    println!("   Soft Skills: {}", details.soft_skills.join(", "));
}

fn print_suggestions(suggestions: &ResumeSuggestions) {
    println!("\n✅ Resume Improvement Suggestions:");

    println!("\n   Missing Skills to Add:");
    for skill in &suggestions.missing_skills {
        println!("      • {skill}");
    }

    println!("\n   Improvement Points:");
    for point in &suggestions.improvement_points {
        println!("      • {point}");
    }

    println!(
        "\n   Overall Fit Summary: {}",
        suggestions.overall_fit_summary
    );
}
