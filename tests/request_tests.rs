use analysis_lens::api::{
    AnalysisRequest, BatchAnalysisRequest, BatchAnalysisResponse, HealthStatus, NO_TEXTS_MESSAGE,
    ServiceErrorPayload,
};
use analysis_lens::core::SentimentLabel;
use analysis_lens::AnalysisError;

#[test]
fn request_text_is_trimmed() {
    let request = AnalysisRequest::new("  I love this!\n").expect("non-blank text");
    assert_eq!(request.text(), "I love this!");
    assert_eq!(
        serde_json::to_string(&request).expect("serialize"),
        r#"{"text":"I love this!"}"#
    );
}

#[test]
fn blank_text_is_rejected_before_any_request() {
    for text in ["", "   ", "\n\t"] {
        let err = AnalysisRequest::new(text).expect_err("blank text must fail");
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert_eq!(err.user_message(), "Please enter some text to analyze");
    }
}

#[test]
fn batch_request_drops_blank_entries() {
    let request = BatchAnalysisRequest::new(["good", " ", "bad"]).expect("has texts");
    assert_eq!(request.texts(), ["good".to_owned(), "bad".to_owned()]);

    let err = BatchAnalysisRequest::new(["", "  "]).expect_err("no usable texts");
    assert_eq!(err.user_message(), NO_TEXTS_MESSAGE);
}

#[test]
fn batch_response_decodes() {
    let response: BatchAnalysisResponse = serde_json::from_str(
        r#"{ "results": [
            { "text": "good", "sentiment": "positive", "polarity": 0.7, "subjectivity": 0.6 }
        ] }"#,
    )
    .expect("decode batch response");
    assert_eq!(response.results[0].sentiment, SentimentLabel::Positive);
}

#[test]
fn health_status_reports_healthy() {
    let health: HealthStatus =
        serde_json::from_str(r#"{ "status": "healthy", "timestamp": "2026-10-18T09:00:00.5" }"#)
            .expect("decode health");
    assert!(health.is_healthy());
    assert!(health.timestamp.is_some());
}

#[test]
fn service_error_message_is_surfaced_verbatim() {
    let payload: ServiceErrorPayload =
        serde_json::from_str(r#"{ "error": "No text provided" }"#).expect("decode error");
    let err = payload.into_error(400);
    assert_eq!(err.user_message(), "No text provided");
    assert!(matches!(err, AnalysisError::Service { status: 400, .. }));
}

#[test]
fn service_error_without_message_uses_fallback() {
    for payload in [
        ServiceErrorPayload::default(),
        ServiceErrorPayload {
            error: Some(String::new()),
        },
    ] {
        assert_eq!(payload.into_error(500).user_message(), "Analysis failed");
    }
}

#[test]
fn transport_errors_show_generic_message() {
    let err = AnalysisError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message(), "Failed to connect to the analysis service");
    assert!(err.to_string().contains("connection refused"));
}
