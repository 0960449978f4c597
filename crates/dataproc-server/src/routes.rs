//! HTTP routes of the Data Processor service.
//!
//! The routes send no CORS headers. Callers are the desktop client and
//! other non-browser tools; a browser page on another origin cannot call
//! this service.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Json, State};
use axum::routing::{get, post};
use dataproc_models::{HEALTH_OK, HEALTH_PATH, PROCESS_PATH, ProcessRequest, ProcessResponse};
use tracing::info;
use utoipa::OpenApi;

use crate::config::ProcessingLimits;
use crate::error::ApiError;
use crate::processing;

/// Message returned with every successfully processed request.
pub const SUCCESS_MESSAGE: &str = "Data processed successfully!";

/// Route serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Data Processor API", description = "Process user input data and return the processed result"),
    paths(process_data, health_check),
    components(schemas(ProcessRequest, ProcessResponse)),
    tags((name = "Data Processor", description = "Data processing endpoints"))
)]
pub struct ApiDoc;

/// State shared across all Axum handlers.
pub struct AppState {
    /// Limits applied to `POST /api/process`.
    pub limits: ProcessingLimits,
}

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(PROCESS_PATH, post(process_data))
        .route(HEALTH_PATH, get(health_check))
        .route(OPENAPI_PATH, get(openapi_document))
        .with_state(state)
}

/// `POST /api/process` — validate, transform and echo the submitted data.
#[utoipa::path(
    post,
    path = "/api/process",
    tag = "Data Processor",
    request_body = ProcessRequest,
    responses(
        (status = 200, description = "Data processed successfully", body = ProcessResponse),
        (status = 400, description = "Bad request - invalid input data", body = ProcessResponse)
    )
)]
async fn process_data(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>, ApiError> {
    req.validate(state.limits.max_input_chars)
        .map_err(|reason| ApiError::InvalidInput {
            reason,
            data: req.data.clone(),
        })?;

    let processed = processing::process(&req.data, &state.limits);
    info!(input_len = req.data.len(), output_len = processed.len(), "data processed");

    Ok(Json(ProcessResponse::new(SUCCESS_MESSAGE, processed)))
}

/// `GET /api/health` — liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Data Processor",
    responses(
        (status = 200, description = "Service is healthy", body = String, content_type = "text/plain")
    )
)]
async fn health_check() -> &'static str {
    HEALTH_OK
}

/// `GET /api-docs/openapi.json` — the service's OpenAPI document.
async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn test_server() -> TestServer {
        let state = Arc::new(AppState {
            limits: ProcessingLimits::default(),
        });
        TestServer::new(router(state)).unwrap()
    }

    #[tokio::test]
    async fn process_uppercases_input() {
        let server = test_server();
        let res = server
            .post(PROCESS_PATH)
            .json(&json!({ "data": "hello world" }))
            .await;

        res.assert_status_ok();
        let body: ProcessResponse = res.json();
        assert_eq!(body.message, SUCCESS_MESSAGE);
        assert_eq!(body.data, "HELLO WORLD");
        assert!(!body.timestamp.is_empty());
    }

    #[tokio::test]
    async fn process_truncates_long_output() {
        let server = test_server();
        let res = server
            .post(PROCESS_PATH)
            .json(&json!({ "data": "x".repeat(60) }))
            .await;

        res.assert_status_ok();
        let body: ProcessResponse = res.json();
        assert_eq!(
            body.data,
            format!("{}{}", "X".repeat(50), processing::TRUNCATION_MARKER)
        );
    }

    #[tokio::test]
    async fn blank_input_is_bad_request() {
        let server = test_server();
        let res = server
            .post(PROCESS_PATH)
            .json(&json!({ "data": "   " }))
            .await;

        res.assert_status(StatusCode::BAD_REQUEST);
        let body: ProcessResponse = res.json();
        assert_eq!(body.message, "Error: Input data cannot be empty");
        assert_eq!(body.data, "   ");
    }

    #[tokio::test]
    async fn missing_data_field_is_bad_request() {
        let server = test_server();
        let res = server.post(PROCESS_PATH).json(&json!({})).await;
        res.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn null_data_is_bad_request() {
        let server = test_server();
        let res = server
            .post(PROCESS_PATH)
            .json(&json!({ "data": null }))
            .await;

        res.assert_status(StatusCode::BAD_REQUEST);
        let body: ProcessResponse = res.json();
        assert_eq!(body.message, "Error: Input data cannot be empty");
        assert_eq!(body.data, "");
    }

    #[tokio::test]
    async fn oversized_input_is_bad_request() {
        let server = test_server();
        let res = server
            .post(PROCESS_PATH)
            .json(&json!({ "data": "a".repeat(1001) }))
            .await;

        res.assert_status(StatusCode::BAD_REQUEST);
        let body: ProcessResponse = res.json();
        assert!(body.message.starts_with("Error: Data cannot exceed 1000 characters"));
    }

    #[tokio::test]
    async fn health_reports_running() {
        let server = test_server();
        let res = server.get(HEALTH_PATH).await;
        res.assert_status_ok();
        res.assert_text(HEALTH_OK);
    }

    #[tokio::test]
    async fn openapi_document_lists_both_routes() {
        let server = test_server();
        let res = server.get(OPENAPI_PATH).await;
        res.assert_status_ok();

        let doc: serde_json::Value = res.json();
        let process = &doc["paths"][PROCESS_PATH]["post"];
        assert!(process["responses"]["200"].is_object());
        assert!(process["responses"]["400"].is_object());
        assert!(doc["paths"][HEALTH_PATH]["get"].is_object());

        let schemas = &doc["components"]["schemas"];
        assert!(schemas["ProcessRequest"].is_object());
        assert!(schemas["ProcessResponse"].is_object());
    }

    #[test]
    fn openapi_paths_match_route_constants() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(PROCESS_PATH));
        assert!(doc.paths.paths.contains_key(HEALTH_PATH));
    }
}
