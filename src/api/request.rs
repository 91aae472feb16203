use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::SentimentLabel;
use crate::error::{
    AnalysisError, AnalysisResult, EMPTY_TEXT_MESSAGE, SERVICE_FAILURE_FALLBACK_MESSAGE,
};

pub const NO_TEXTS_MESSAGE: &str = "No texts provided";

/// Body of a single-text analysis request.
///
/// Construction trims the text and refuses blank input, so an invalid request
/// never reaches the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    pub fn new(text: &str) -> AnalysisResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalysisError::InvalidInput(EMPTY_TEXT_MESSAGE.to_owned()));
        }
        Ok(Self {
            text: text.to_owned(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Body of a batch sentiment request; blank entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchAnalysisRequest {
    texts: Vec<String>,
}

impl BatchAnalysisRequest {
    pub fn new<I, S>(texts: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts
            .into_iter()
            .map(Into::into)
            .filter(|text| !text.trim().is_empty())
            .collect();
        if texts.is_empty() {
            return Err(AnalysisError::InvalidInput(NO_TEXTS_MESSAGE.to_owned()));
        }
        Ok(Self { texts })
    }

    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSentimentRow {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysisResponse {
    pub results: Vec<BatchSentimentRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Error body returned by the service on non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceErrorPayload {
    /// Converts the payload into a service error, keeping its message verbatim.
    #[must_use]
    pub fn into_error(self, status: u16) -> AnalysisError {
        let message = self
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| SERVICE_FAILURE_FALLBACK_MESSAGE.to_owned());
        AnalysisError::Service { status, message }
    }
}
