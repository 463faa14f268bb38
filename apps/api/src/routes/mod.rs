pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::tailoring::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Tailoring API
        .route("/api/tailor", post(handlers::handle_tailor))
        .route("/api/status", get(handlers::handle_status))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::tailoring::service::tests::{sample_request, StubGenerator};

    fn app(generator: StubGenerator) -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        build_router(AppState {
            config,
            generator: Arc::new(generator),
        })
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn tailor_request() -> Request<Body> {
        let body = serde_json::to_string(&sample_request()).unwrap();
        Request::builder()
            .method("POST")
            .uri("/api/tailor")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(StubGenerator::replying("x"))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_root_reports_running() {
        let response = app(StubGenerator::replying("x"))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(json_body(response).await["status"], "running");
    }

    #[tokio::test]
    async fn test_tailor_returns_camel_case_result() {
        let generator = StubGenerator::replying("Some resume text\n---\nSome cover letter text");
        let response = app(generator).oneshot(tailor_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["resume"], "Some resume text");
        assert_eq!(body["coverLetter"], "Some cover letter text");
    }

    #[tokio::test]
    async fn test_tailor_without_key_is_configuration_error() {
        let response = app(StubGenerator::unconfigured())
            .oneshot(tailor_request())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"]["code"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_tailor_upstream_failure_carries_description() {
        let response = app(StubGenerator::failing())
            .oneshot(tailor_request())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Overloaded"));
    }

    #[tokio::test]
    async fn test_tailor_rejects_payload_missing_fields() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/tailor")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"resume": "only this"}"#))
            .unwrap();
        let response = app(StubGenerator::replying("x"))
            .oneshot(request)
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_status_reports_boolean_only() {
        let response = app(StubGenerator::unconfigured())
            .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["apiKeyConfigured"], false);
        assert_eq!(body["model"], "stub-model");
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
