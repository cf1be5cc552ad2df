use http::StatusCode;

/// The observed status code differs from the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected status {expected}, got {actual}")]
pub struct StatusMismatch {
    pub expected: StatusCode,
    pub actual: StatusCode,
}

#[derive(Debug, thiserror::Error)]
pub enum TestResultError {
    #[error("failed to read response body")]
    Body(#[source] axum::Error),
    #[error("response body is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("failed to decode response body as JSON")]
    Json(#[from] serde_json::Error),
}
