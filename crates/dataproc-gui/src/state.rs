use dataproc_models::{is_blank, ProcessResponse};

// ── Actions ───────────────────────────────────────────────────────────

/// Everything that can change the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// The user edited the input field.
    InputChanged(String),
    /// The user asked to submit the current input.
    SubmitStarted,
    /// A submission resolved with a decoded response.
    SubmitSucceeded {
        submission: u64,
        record: ProcessResponse,
    },
    /// A submission resolved with an error, already rendered as text.
    SubmitFailed { submission: u64, message: String },
}

// ── Outcome of the last submission ────────────────────────────────────

/// Either a response or an error, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Response(ProcessResponse),
    Error(String),
}

/// Payload of an accepted submission, handed to the network task.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: u64,
    pub data: String,
}

// ── Form state ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub input: String,
    pub outcome: Option<Outcome>,
    pub loading: bool,
    /// Id of the latest accepted submission; 0 before the first one.
    pub submission: u64,
}

impl FormState {
    /// Pure transition function. Every state change goes through here.
    ///
    /// Resolutions for anything other than the latest submission are
    /// dropped, so a slow earlier request cannot overwrite a newer one
    /// or clear its loading flag.
    #[must_use]
    pub fn reduce(self, action: FormAction) -> Self {
        match action {
            FormAction::InputChanged(input) => Self { input, ..self },
            FormAction::SubmitStarted => {
                if is_blank(&self.input) {
                    return self;
                }
                Self {
                    outcome: None,
                    loading: true,
                    submission: self.submission + 1,
                    ..self
                }
            }
            FormAction::SubmitSucceeded { submission, record } => {
                self.resolve(submission, Outcome::Response(record))
            }
            FormAction::SubmitFailed { submission, message } => {
                self.resolve(submission, Outcome::Error(message))
            }
        }
    }

    fn resolve(self, submission: u64, outcome: Outcome) -> Self {
        if submission != self.submission || !self.loading {
            return self;
        }
        Self {
            outcome: Some(outcome),
            loading: false,
            ..self
        }
    }

    /// In-place [`reduce`](Self::reduce), for use behind a signal.
    pub fn apply(&mut self, action: FormAction) {
        *self = std::mem::take(self).reduce(action);
    }

    /// Apply [`FormAction::SubmitStarted`] and return what to send,
    /// or `None` when the input is blank.
    pub fn start_submission(&mut self) -> Option<Submission> {
        let before = self.submission;
        self.apply(FormAction::SubmitStarted);
        (self.submission != before).then(|| Submission {
            id: self.submission,
            data: self.input.clone(),
        })
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !is_blank(&self.input)
    }

    pub fn response(&self) -> Option<&ProcessResponse> {
        match &self.outcome {
            Some(Outcome::Response(r)) => Some(r),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Error(e)) => Some(e),
            _ => None,
        }
    }
}
