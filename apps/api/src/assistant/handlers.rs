//! Axum route handlers for the assistant pipelines.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::cover_letter::{generate_cover_letter, CoverLetterRequest};
use crate::assistant::job_analyzer::analyze_job_description;
use crate::assistant::models::{JobDetails, ResumeSuggestions};
use crate::assistant::resume_suggestions::generate_suggestions;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJobResponse {
    pub job_details: JobDetails,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub job_details: JobDetails,
    pub current_resume: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: ResumeSuggestions,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/analyze
///
/// Extracts structured job details from a raw job description.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<AnalyzeJobResponse>, AppError> {
    require_text("job_description", &request.job_description)?;

    let job_details =
        analyze_job_description(&request.job_description, state.llm.as_ref()).await?;

    Ok(Json(AnalyzeJobResponse { job_details }))
}

/// POST /api/v1/resumes/suggestions
///
/// Compares a resume against job details (usually the output of /jobs/analyze).
pub async fn handle_resume_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    require_text("current_resume", &request.current_resume)?;

    let suggestions = generate_suggestions(
        &request.job_details,
        &request.current_resume,
        state.llm.as_ref(),
    )
    .await?;

    Ok(Json(SuggestionsResponse { suggestions }))
}

/// POST /api/v1/cover-letters
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    require_text("candidate_name", &request.candidate_name)?;
    require_text("job_title", &request.job_title)?;
    require_text("company_name", &request.company_name)?;
    require_text("key_achievements", &request.key_achievements)?;
    require_text("job_requirements", &request.job_requirements)?;

    let cover_letter = generate_cover_letter(&request, state.llm.as_ref()).await?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}
