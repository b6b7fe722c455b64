use thiserror::Error;

use crate::validation::ErrorMap;

/// Banner text used when the server gives no usable message.
pub const SUBMISSION_FAILED: &str = "Submission failed";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid employee endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected submission with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

impl SubmissionError {
    /// Text for the failure banner: the server's message when it sent a
    /// non-empty one, otherwise [`SUBMISSION_FAILED`].
    pub fn user_message(&self) -> &str {
        match self {
            SubmissionError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.as_str(),
            _ => SUBMISSION_FAILED,
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ErrorMap),
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
