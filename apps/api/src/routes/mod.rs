pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs/analyze", post(handlers::handle_analyze_job))
        .route(
            "/api/v1/resumes/suggestions",
            post(handlers::handle_resume_suggestions),
        )
        .route("/api/v1/cover-letters", post(handlers::handle_cover_letter))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::mock::MockGenerator;

    fn router_with(llm: Arc<MockGenerator>) -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        build_router(AppState { llm, config })
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn job_details_json() -> Value {
        json!({
            "job_title": "Senior Python Developer",
            "required_skills": ["Python", "PostgreSQL"],
            "experience_required": 5,
            "tools": ["Docker"],
            "soft_skills": ["Leadership"]
        })
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let router = router_with(Arc::new(MockGenerator::replying("unused")));
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "mistral");
    }

    #[tokio::test]
    async fn test_analyze_job_returns_details() {
        let llm = Arc::new(MockGenerator::replying(&job_details_json().to_string()));
        let (status, body) = post_json(
            router_with(llm.clone()),
            "/api/v1/jobs/analyze",
            json!({"job_description": "Senior Python Developer, 5+ years"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_details"], job_details_json());
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_job_rejects_blank_description_without_calling_model() {
        let llm = Arc::new(MockGenerator::replying("unused"));
        let (status, body) = post_json(
            router_with(llm.clone()),
            "/api/v1/jobs/analyze",
            json!({"job_description": "   "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_analyze_job_maps_schema_failure_to_422() {
        let llm = Arc::new(MockGenerator::replying(r#"{"job_title": "Dev"}"#));
        let (status, body) = post_json(
            router_with(llm),
            "/api/v1/jobs/analyze",
            json!({"job_description": "anything"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "PARSE_VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_suggestions_round_trip() {
        let llm = Arc::new(MockGenerator::replying(
            r#"{"missing_skills": ["Redis"], "improvement_points": ["Add metrics"], "overall_fit_summary": "55%"}"#,
        ));
        let (status, body) = post_json(
            router_with(llm.clone()),
            "/api/v1/resumes/suggestions",
            json!({"job_details": job_details_json(), "current_resume": "JOHN DOE"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"]["missing_skills"], json!(["Redis"]));
        assert!(llm.prompts()[0].contains("Python, PostgreSQL"));
    }

    #[tokio::test]
    async fn test_cover_letter_maps_generation_fault_to_502() {
        let llm = Arc::new(MockGenerator::failing("connection refused"));
        let (status, body) = post_json(
            router_with(llm),
            "/api/v1/cover-letters",
            json!({
                "candidate_name": "John Doe",
                "job_title": "Senior Python Developer",
                "company_name": "Tech Corp",
                "key_achievements": "Mentored 2 developers",
                "job_requirements": "Python"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "GENERATION_ERROR");
    }

    #[tokio::test]
    async fn test_cover_letter_returns_text() {
        let llm = Arc::new(MockGenerator::replying("Dear Tech Corp team,"));
        let (status, body) = post_json(
            router_with(llm),
            "/api/v1/cover-letters",
            json!({
                "candidate_name": "John Doe",
                "job_title": "Senior Python Developer",
                "company_name": "Tech Corp",
                "key_achievements": "Mentored 2 developers",
                "job_requirements": "Python"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cover_letter"], "Dear Tech Corp team,");
    }
}
