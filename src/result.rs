use crate::error::{StatusMismatch, TestResultError};
use bytes::Bytes;
use derive_more::Deref;
use http::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::str::from_utf8;

/// Checks an HTTP status code against an expected value.
///
/// Implementors only read the status. A mismatch is reported as a
/// [`StatusMismatch`] value instead of a panic, so callers can decide whether
/// it is fatal.
pub trait StatusAssertion: Debug {
    fn status_code(&self) -> StatusCode;

    fn expect_status(&self, expected: StatusCode) -> Result<(), StatusMismatch> {
        let actual = self.status_code();
        if actual == expected {
            Ok(())
        } else {
            Err(StatusMismatch { expected, actual })
        }
    }
}

impl StatusAssertion for StatusCode {
    fn status_code(&self) -> StatusCode {
        *self
    }
}

impl<B: Debug> StatusAssertion for http::Response<B> {
    fn status_code(&self) -> StatusCode {
        self.status()
    }
}

/// A fully buffered response captured from a test request.
#[derive(Debug, Deref)]
#[must_use]
pub struct TestResult {
    #[deref]
    response: http::Response<Bytes>,
}

impl TestResult {
    pub fn new(response: http::Response<Bytes>) -> Self {
        Self { response }
    }

    /// Buffers the body of an `axum` response and wraps the result.
    pub async fn from_axum(response: axum::response::Response) -> Result<Self, TestResultError> {
        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(TestResultError::Body)?;

        Ok(Self::new(http::Response::from_parts(parts, bytes)))
    }

    pub fn text(&self) -> Result<&str, TestResultError> {
        Ok(from_utf8(self.response.body())?)
    }

    /// Decodes the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TestResultError> {
        Ok(serde_json::from_slice(self.response.body())?)
    }

    pub fn into_inner(self) -> http::Response<Bytes> {
        self.response
    }
}

impl From<http::Response<Bytes>> for TestResult {
    fn from(response: http::Response<Bytes>) -> Self {
        Self::new(response)
    }
}

impl StatusAssertion for TestResult {
    fn status_code(&self) -> StatusCode {
        self.response.status()
    }
}
