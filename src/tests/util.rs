//! This module provides a minimal test session for exercising the matchers
//! against a real `axum` router.
//!
//! Tests build a `TestApp` from a `Router` and issue requests through the
//! `get`/`post`/`put`/`patch`/`delete` helpers. Every request is dispatched
//! in-process via `tower::ServiceExt::oneshot`, and the buffered response is
//! returned as a `TestResult`.

use crate::TestResult;
use crate::logging;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        logging::init_for_test();
        Self { router }
    }

    /// Run a request against the router and buffer its response
    pub async fn run(&self, request: Request<Body>) -> TestResult {
        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResult::from_axum(response).await.unwrap()
    }

    fn request(method: Method, path: &str, body: Body) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap()
    }

    /// Issue a GET request
    pub async fn get(&self, path: &str) -> TestResult {
        self.run(Self::request(Method::GET, path, Body::empty())).await
    }

    /// Issue a POST request with a JSON body
    pub async fn post(&self, path: &str, body: impl Into<Body>) -> TestResult {
        self.run(Self::request(Method::POST, path, body.into())).await
    }

    /// Issue a PUT request with a JSON body
    pub async fn put(&self, path: &str, body: impl Into<Body>) -> TestResult {
        self.run(Self::request(Method::PUT, path, body.into())).await
    }

    /// Issue a PATCH request with a JSON body
    pub async fn patch(&self, path: &str, body: impl Into<Body>) -> TestResult {
        self.run(Self::request(Method::PATCH, path, body.into())).await
    }

    /// Issue a DELETE request
    pub async fn delete(&self, path: &str) -> TestResult {
        self.run(Self::request(Method::DELETE, path, Body::empty())).await
    }
}
