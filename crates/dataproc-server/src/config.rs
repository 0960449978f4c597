//! Server configuration.
//!
//! Built from environment variables at startup and injected into Axum
//! handlers via [`axum::extract::State`].

use dataproc_models::MAX_INPUT_CHARS;

/// Limits applied by the processing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingLimits {
    /// Longest accepted input, in characters.
    pub max_input_chars: usize,
    /// Processed output longer than this is cut and marked as truncated.
    pub truncate_after: usize,
}

impl Default for ProcessingLimits {
    fn default() -> Self {
        Self {
            max_input_chars: MAX_INPUT_CHARS,
            truncate_after: 50,
        }
    }
}

/// Global configuration shared across all handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (default `8080`).
    pub listen_port: u16,
    /// Processing limits.
    pub limits: ProcessingLimits,
}

impl ServerConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                    | Default | Description                          |
    /// |-----------------------------|---------|--------------------------------------|
    /// | `DATAPROC_PORT`             | `8080`  | HTTP listen port                     |
    /// | `DATAPROC_MAX_INPUT_CHARS`  | `1000`  | Longest accepted input               |
    /// | `DATAPROC_TRUNCATE_AFTER`   | `50`    | Output length before truncation      |
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = ProcessingLimits::default();
        Self {
            listen_port: env_or("DATAPROC_PORT", 8080),
            limits: ProcessingLimits {
                max_input_chars: env_or("DATAPROC_MAX_INPUT_CHARS", defaults.max_input_chars),
                truncate_after: env_or("DATAPROC_TRUNCATE_AFTER", defaults.truncate_after),
            },
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok(), default)
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
