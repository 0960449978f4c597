//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. Its `Display` output is what the form shows
//! to the user, so the variants keep their text short.

/// Error type for all SDK operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// Invalid base URL.
    #[error("configuration error: {0}")]
    Config(String),

    /// The service answered with a non-success status. The body is not read.
    #[error("HTTP error! status: {status}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The request never produced a response (connection refused, DNS, reset...).
    #[error("{0}")]
    Transport(String),

    /// A success response whose body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            SdkError::HttpStatus { status: status.as_u16() }
        } else if e.is_decode() {
            SdkError::Decode(e.to_string())
        } else {
            SdkError::Transport(with_causes(&e))
        }
    }
}

/// `Display` of `e` followed by each distinct message in its `source()` chain.
fn with_causes(e: &(dyn std::error::Error + 'static)) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Decode(e.to_string())
    }
}
