//! Drives one submission from payload to [`FormAction`].

use std::future::Future;

use dataproc_models::ProcessResponse;
use dataproc_sdk::{ProcessClient, SdkError};
use tracing::{info, warn};

use crate::state::{FormAction, Submission};

/// Shown when a failure carries no text of its own.
pub const FALLBACK_ERROR: &str = "An error occurred";

/// Anything that can turn input text into a [`ProcessResponse`].
pub trait Processor {
    fn process(&self, data: &str) -> impl Future<Output = Result<ProcessResponse, SdkError>>;
}

impl Processor for ProcessClient {
    fn process(&self, data: &str) -> impl Future<Output = Result<ProcessResponse, SdkError>> {
        ProcessClient::process(self, data)
    }
}

/// Perform exactly one call for `submission` and turn the result into the
/// action that resolves it. Never fails: errors become `SubmitFailed`.
pub async fn run_submission<P: Processor>(processor: &P, submission: Submission) -> FormAction {
    let Submission { id, data } = submission;
    info!(submission = id, "submission started");

    match processor.process(&data).await {
        Ok(record) => {
            info!(submission = id, "submission succeeded");
            FormAction::SubmitSucceeded {
                submission: id,
                record,
            }
        }
        Err(e) => {
            warn!(submission = id, error = %e, "submission failed");
            FormAction::SubmitFailed {
                submission: id,
                message: error_message(&e),
            }
        }
    }
}

/// Text displayed for a failed submission.
pub fn error_message(e: &SdkError) -> String {
    let text = e.to_string();
    if text.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        text
    }
}
