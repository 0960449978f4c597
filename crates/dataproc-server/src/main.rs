//! Data Processor service — upper-cases and truncates submitted text.
//!
//! Exposes `POST /api/process`, `GET /api/health` and the OpenAPI document
//! at `GET /api-docs/openapi.json`. Configuration is
//! read from the environment (see [`config::ServerConfig::from_env`]).

mod config;
mod error;
mod processing;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    info!(
        max_input_chars = config.limits.max_input_chars,
        truncate_after = config.limits.truncate_after,
        "processing limits configured"
    );

    let state = Arc::new(AppState {
        limits: config.limits,
    });
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(address = %addr, "data processor listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
