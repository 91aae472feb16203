use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to analyze";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to connect to the analysis service";
pub const SERVICE_FAILURE_FALLBACK_MESSAGE: &str = "Analysis failed";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("analysis service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("malformed analysis result: {0}")]
    MalformedRecord(String),

    #[error("invalid derivation config: {0}")]
    InvalidConfig(String),
}

impl AnalysisError {
    /// Returns the single message shown to the user for this failure.
    ///
    /// Transport details stay in logs; service messages are surfaced verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_owned(),
            Self::Service { message, .. } => message.clone(),
            Self::MalformedRecord(_) => {
                "The analysis service returned a malformed result".to_owned()
            }
            Self::InvalidConfig(message) => format!("Invalid display settings: {message}"),
        }
    }
}
