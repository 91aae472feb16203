//! Blocking client for the external analysis service.
//!
//! One call per user action, no retry, no caching. Failures are mapped onto
//! [`AnalysisError`] so the caller can show a single message.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{
    AnalysisRequest, BatchAnalysisRequest, BatchAnalysisResponse, HealthStatus,
    ServiceErrorPayload,
};
use crate::core::AnalysisRecord;
use crate::error::{AnalysisError, AnalysisResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ANALYZE_PATH: &str = "/api/analyze";
const BATCH_ANALYZE_PATH: &str = "/api/batch-analyze";
const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> AnalysisResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> AnalysisResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits one text and returns the validated analysis record.
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisRecord> {
        debug!(chars = request.text().chars().count(), "submitting analysis request");
        let response = self.post(ANALYZE_PATH, request)?;
        let body = read_success_body(response)?;
        AnalysisRecord::from_json_str(&body)
    }

    pub fn batch_analyze(
        &self,
        request: &BatchAnalysisRequest,
    ) -> AnalysisResult<BatchAnalysisResponse> {
        debug!(texts = request.texts().len(), "submitting batch analysis request");
        let response = self.post(BATCH_ANALYZE_PATH, request)?;
        let body = read_success_body(response)?;
        serde_json::from_str(&body).map_err(|e| {
            AnalysisError::MalformedRecord(format!("failed to parse batch analysis payload: {e}"))
        })
    }

    pub fn health(&self) -> AnalysisResult<HealthStatus> {
        let response = self
            .http
            .get(self.url(HEALTH_PATH))
            .send()
            .map_err(transport_error)?;
        let body = read_success_body(response)?;
        serde_json::from_str(&body).map_err(|e| {
            AnalysisError::MalformedRecord(format!("failed to parse health payload: {e}"))
        })
    }

    fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> AnalysisResult<Response> {
        self.http
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(transport_error)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn transport_error(err: reqwest::Error) -> AnalysisError {
    warn!(error = %err, "analysis service unreachable");
    AnalysisError::Transport(err.to_string())
}

fn read_success_body(response: Response) -> AnalysisResult<String> {
    let status = response.status();
    let body = response.text().map_err(transport_error)?;
    if status.is_success() {
        return Ok(body);
    }

    let payload: ServiceErrorPayload = serde_json::from_str(&body).unwrap_or_default();
    let err = payload.into_error(status.as_u16());
    warn!(status = status.as_u16(), error = %err, "analysis service rejected request");
    Err(err)
}
