//! HTTP client for the Data Processor service.
//!
//! [`ProcessClient`] wraps a [`reqwest::Client`] bound to one base URL and
//! exposes the two calls of the wire contract.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use dataproc_sdk::{ProcessClient, SdkError};
//!
//! # async fn run() -> Result<(), SdkError> {
//! let client = ProcessClient::new("http://localhost:8080/")?;
//! assert_eq!(client.base_url(), "http://localhost:8080");
//!
//! match client.process("hello").await {
//!     Ok(resp) => println!("{}", resp.message),
//!     Err(SdkError::HttpStatus { status }) => eprintln!("rejected with {status}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```

use dataproc_models::{ProcessRequest, ProcessResponse, HEALTH_PATH, PROCESS_PATH};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::SdkError;

/// Client for one Data Processor endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
/// Requests carry no deadline and are never retried.
#[derive(Debug, Clone)]
pub struct ProcessClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProcessClient {
    /// Create a client for the service rooted at `base_url`
    /// (e.g. `http://localhost:8080`). A trailing `/` is ignored.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        let url = reqwest::Url::parse(base_url)
            .map_err(|e| SdkError::Config(format!("invalid base URL `{base_url}`: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SdkError::Config(format!(
                "unsupported scheme `{}` in `{base_url}`",
                url.scheme()
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit `data` to `POST /api/process`.
    ///
    /// The text is sent as given (no trimming). Any non-2xx status fails
    /// with [`SdkError::HttpStatus`] without reading the body.
    pub async fn process(&self, data: &str) -> Result<ProcessResponse, SdkError> {
        let url = format!("{}{PROCESS_PATH}", self.base_url);
        debug!(%url, len = data.len(), "submitting data");

        let res = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&ProcessRequest::new(data))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SdkError::HttpStatus { status: status.as_u16() });
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Probe `GET /api/health` and return the body text.
    pub async fn health(&self) -> Result<String, SdkError> {
        let url = format!("{}{HEALTH_PATH}", self.base_url);
        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SdkError::HttpStatus { status: status.as_u16() });
        }
        Ok(res.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use dataproc_models::HEALTH_OK;

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Echo the request back: `message` carries the content type it was sent with.
    async fn echo(headers: HeaderMap, Json(req): Json<ProcessRequest>) -> Json<ProcessResponse> {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Json(ProcessResponse {
            message: content_type,
            data: req.data,
            timestamp: "2024-01-01T12:00:00".into(),
        })
    }

    #[test]
    fn new_strips_trailing_slash() {
        let client = ProcessClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn new_rejects_garbage_and_foreign_schemes() {
        assert!(matches!(
            ProcessClient::new("not a url"),
            Err(SdkError::Config(_))
        ));
        assert!(matches!(
            ProcessClient::new("ftp://localhost"),
            Err(SdkError::Config(_))
        ));
    }

    #[tokio::test]
    async fn process_sends_json_body_untrimmed() {
        let base = serve(Router::new().route(PROCESS_PATH, post(echo))).await;
        let client = ProcessClient::new(&base).unwrap();

        let resp = client.process("  hello ").await.unwrap();
        assert_eq!(resp.data, "  hello ");
        assert!(resp.message.starts_with("application/json"));
        assert_eq!(resp.timestamp, "2024-01-01T12:00:00");
    }

    #[tokio::test]
    async fn non_success_status_is_http_status_error() {
        let app = Router::new()
            .route(
                PROCESS_PATH,
                post(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(ProcessResponse {
                            message: "Error: Input data cannot be empty".into(),
                            data: String::new(),
                            timestamp: "T".into(),
                        }),
                    )
                }),
            )
            .route(HEALTH_PATH, get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
        let base = serve(app).await;
        let client = ProcessClient::new(&base).unwrap();

        let err = client.process("x").await.unwrap_err();
        assert_eq!(err, SdkError::HttpStatus { status: 400 });
        assert!(err.to_string().contains("400"));

        let err = client.health().await.unwrap_err();
        assert_eq!(err, SdkError::HttpStatus { status: 503 });
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let app = Router::new().route(PROCESS_PATH, post(|| async { "not json" }));
        let base = serve(app).await;
        let client = ProcessClient::new(&base).unwrap();

        let err = client.process("x").await.unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn closed_port_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ProcessClient::new(&format!("http://{addr}")).unwrap();
        let err = client.process("x").await.unwrap_err();
        match err {
            SdkError::Transport(msg) => {
                assert!(msg.to_lowercase().contains("refused"), "cause missing from {msg:?}");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn health_returns_body_text() {
        let app = Router::new().route(HEALTH_PATH, get(|| async { HEALTH_OK }));
        let base = serve(app).await;
        let client = ProcessClient::new(&base).unwrap();

        assert_eq!(client.health().await.unwrap(), HEALTH_OK);
    }
}
