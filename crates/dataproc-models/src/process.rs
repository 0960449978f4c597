//! Processing request and response payloads.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::ModelError;

/// Route of the processing endpoint, relative to the service base URL.
pub const PROCESS_PATH: &str = "/api/process";

/// Route of the liveness probe, relative to the service base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Body returned by a healthy backend on [`HEALTH_PATH`].
pub const HEALTH_OK: &str = "Backend is running!";

/// Default upper bound on the request input, in characters.
pub const MAX_INPUT_CHARS: usize = 1000;

/// Body of `POST /api/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "data": "hello world" }))]
pub struct ProcessRequest {
    /// Raw text as typed by the user. A missing or `null` field decodes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "hello world", max_length = 1000)]
    pub data: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProcessRequest {
    /// Wrap the given text.
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Check the input is non-blank and at most `max_chars` characters long.
    pub fn validate(&self, max_chars: usize) -> Result<(), ModelError> {
        if is_blank(&self.data) {
            return Err(ModelError::BlankInput);
        }
        let len = self.data.chars().count();
        if len > max_chars {
            return Err(ModelError::TooLong { len, max: max_chars });
        }
        Ok(())
    }
}

/// Body returned by `POST /api/process`, on success and on validation errors.
///
/// Clients treat every field as opaque text; `timestamp` is an ISO-like
/// local date-time but its format is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "message": "Data processed successfully!",
    "data": "HELLO WORLD",
    "timestamp": "2024-01-01T12:00:00"
}))]
pub struct ProcessResponse {
    /// Human-readable outcome.
    #[schema(example = "Data processed successfully!")]
    pub message: String,
    /// Processed (or echoed) data.
    #[schema(example = "HELLO WORLD")]
    pub data: String,
    /// When the backend produced the response.
    #[schema(example = "2024-01-01T12:00:00")]
    pub timestamp: String,
}

impl ProcessResponse {
    /// Build a response stamped with the current local time.
    pub fn new(message: impl Into<String>, data: impl Into<String>) -> Self {
        Self::at(message, data, Local::now().naive_local())
    }

    /// Build a response stamped with the given time.
    pub fn at(message: impl Into<String>, data: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            message: message.into(),
            data: data.into(),
            timestamp: at.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

/// `true` when `text` is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
