//! Cover letter generator. The model's text is returned verbatim, so the only
//! failure is a generation fault.

use serde::Deserialize;
use tracing::info;

use crate::assistant::prompts::COVER_LETTER_PROMPT_TEMPLATE;
use crate::llm_client::prompts::render;
use crate::llm_client::{GenerationError, TextGenerator};

/// Higher temperature for more varied prose.
pub const COVER_LETTER_TEMPERATURE: f32 = 0.7;

/// Inputs for a cover letter. Also the request body of `POST /api/v1/cover-letters`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterRequest {
    pub candidate_name: String,
    pub job_title: String,
    pub company_name: String,
    pub key_achievements: String,
    pub job_requirements: String,
}

pub fn build_cover_letter_prompt(request: &CoverLetterRequest) -> String {
    render(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("candidate_name", request.candidate_name.as_str()),
            ("job_title", request.job_title.as_str()),
            ("company_name", request.company_name.as_str()),
            ("key_achievements", request.key_achievements.as_str()),
            ("job_requirements", request.job_requirements.as_str()),
        ],
    )
}

pub async fn generate_cover_letter(
    request: &CoverLetterRequest,
    llm: &dyn TextGenerator,
) -> Result<String, GenerationError> {
    let prompt = build_cover_letter_prompt(request);

    info!(
        "Generating cover letter for {} ({} at {})",
        request.candidate_name, request.job_title, request.company_name
    );
    let letter = llm.generate(&prompt, COVER_LETTER_TEMPERATURE).await?;

    info!("Cover letter generated ({} words)", letter.split_whitespace().count());
    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::MockGenerator;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            candidate_name: "John Doe".to_string(),
            job_title: "Senior Python Developer".to_string(),
            company_name: "Tech Corp".to_string(),
            key_achievements: "- Mentored 2 junior developers".to_string(),
            job_requirements: "Python, Django, AWS".to_string(),
        }
    }

    #[test]
    fn test_prompt_carries_every_field_and_constraints() {
        let prompt = build_cover_letter_prompt(&request());
        assert!(prompt.contains("Candidate Name: John Doe\n"));
        assert!(prompt.contains("Job Title: Senior Python Developer\n"));
        assert!(prompt.contains("Company: Tech Corp\n"));
        assert!(prompt.contains("Key Achievements:\n- Mentored 2 junior developers\n"));
        assert!(prompt.contains("Job Requirements:\nPython, Django, AWS\n"));
        assert!(prompt.contains("(300-400 words)"));
        assert!(prompt.contains("Use professional tone"));
        assert!(prompt.ends_with("Cover Letter:"));
    }

    #[tokio::test]
    async fn test_generate_returns_text_verbatim() {
        let reply = "Dear Hiring Manager,\n\n{not json} and ```fences``` stay.\n\nSincerely,\nJohn";
        let llm = MockGenerator::replying(reply);
        let letter = generate_cover_letter(&request(), &llm).await.unwrap();
        assert_eq!(letter, reply);
        assert_eq!(llm.temperatures(), vec![COVER_LETTER_TEMPERATURE]);
    }

    #[tokio::test]
    async fn test_generate_accepts_any_non_empty_reply() {
        for reply in ["ok", "{\"a\": 1}", "42", "- bullet\n- list"] {
            let llm = MockGenerator::replying(reply);
            assert!(generate_cover_letter(&request(), &llm).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_generate_propagates_generation_fault() {
        let llm = MockGenerator::failing("timed out");
        let err = generate_cover_letter(&request(), &llm).await.unwrap_err();
        assert!(matches!(err, GenerationError::Api { .. }));
    }
}
