//! HTTP client for the Allora backend.
//!
//! Wraps a cookie-bearing [`reqwest::Client`]: the backend authenticates
//! through a session cookie, and every mutating verb must carry a CSRF token
//! fetched from `/csrf` immediately beforehand. Response bodies are decoded
//! to JSON and classified with the envelope probes before any typed
//! deserialization happens.

pub mod errors;

use reqwest::{Method, RequestBuilder, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use allora::envelope::{EnvelopeError, HttpResponse, Outcome, is_error_response};

pub use errors::{ApiError, GENERIC_ERROR_MESSAGE};

/// Header carrying the CSRF token on mutating requests.
const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Configuration for connecting to the Allora backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Versioned API root, e.g. `"http://localhost:8080/api/v1"`.
    pub base_url: String,
}

/// HTTP client shared by every backend service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self { config, http })
    }

    /// `GET` a success envelope from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<HttpResponse<T>, ApiError> {
        self.execute(self.http.get(self.url(path))).await
    }

    /// `POST` a JSON body and decode a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse<T>, ApiError> {
        let request = self.mutating(Method::POST, path).await?;

        self.execute(request.json(body)).await
    }

    /// `POST` with no body and decode a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<HttpResponse<T>, ApiError> {
        let request = self.mutating(Method::POST, path).await?;

        self.execute(request).await
    }

    /// `POST` a JSON body to an endpoint that answers with a bare resource
    /// instead of a success envelope. Error envelopes are still recognized
    /// and surfaced as [`ApiError::Backend`].
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an undeserializable body.
    pub async fn post_raw<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.mutating(Method::POST, path).await?;
        let payload: Value = request.json(body).send().await?.json().await?;

        decode_raw(payload)
    }

    /// Like [`post_raw`](Self::post_raw), without a body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an undeserializable body.
    pub async fn post_raw_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.mutating(Method::POST, path).await?;
        let payload: Value = request.send().await?.json().await?;

        decode_raw(payload)
    }

    /// `POST` a multipart form and decode a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<HttpResponse<T>, ApiError> {
        let request = self.mutating(Method::POST, path).await?;

        self.execute(request.multipart(form)).await
    }

    /// `PATCH` a JSON body and decode a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse<T>, ApiError> {
        let request = self.mutating(Method::PATCH, path).await?;

        self.execute(request.json(body)).await
    }

    /// `PATCH` with no body and decode a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<HttpResponse<T>, ApiError> {
        let request = self.mutating(Method::PATCH, path).await?;

        self.execute(request).await
    }

    /// `PATCH` a multipart form and decode a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<HttpResponse<T>, ApiError> {
        let request = self.mutating(Method::PATCH, path).await?;

        self.execute(request.multipart(form)).await
    }

    /// `DELETE` and decode a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a backend error envelope, or
    /// an unrecognizable body.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<HttpResponse<T>, ApiError> {
        let request = self.mutating(Method::DELETE, path).await?;

        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    // The token is fetched per mutation, never cached: the backend rotates
    // it with the session and a stale token fails the request.
    async fn csrf_token(&self) -> Result<String, ApiError> {
        let token: CsrfToken = self.http.get(self.url("/csrf")).send().await?.json().await?;

        if token.token.is_empty() {
            return Err(ApiError::MissingCsrfToken);
        }

        Ok(token.token)
    }

    async fn mutating(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.csrf_token().await?;

        Ok(self
            .http
            .request(method, self.url(path))
            .header(CSRF_HEADER, token))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<HttpResponse<T>, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let payload: Value = response.json().await?;

        debug!(%status, "backend response received");

        match Outcome::from_value(payload) {
            Ok(Outcome::Success(envelope)) => Ok(envelope),
            Ok(Outcome::Failure(error)) => Err(ApiError::Backend(error)),
            Err(error) => Err(ApiError::Decode(error)),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct CsrfToken {
    #[serde(default)]
    token: String,
}

// Unenveloped endpoints (the public chat) answer with the bare resource on
// success but still use the shared error envelope on failure.
fn decode_raw<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    if is_error_response(&payload) {
        let error = serde_json::from_value(payload)
            .map_err(|error| ApiError::Decode(EnvelopeError::Deserialize(error)))?;

        return Err(ApiError::Backend(error));
    }

    serde_json::from_value(payload).map_err(|error| ApiError::Decode(EnvelopeError::Deserialize(error)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct ChatLine {
        content: String,
    }

    #[test]
    fn decode_raw_returns_the_bare_resource() -> TestResult {
        let line: ChatLine = decode_raw(json!({ "content": "hello" }))?;

        assert_eq!(line.content, "hello");

        Ok(())
    }

    #[test]
    fn decode_raw_recognizes_the_error_envelope() {
        let result: Result<ChatLine, _> = decode_raw(json!({
            "errorCode": 401,
            "errorMessage": "Not authenticated"
        }));

        match result {
            Err(ApiError::Backend(error)) => {
                assert_eq!(error.error_code, Some(401));
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn decode_raw_rejects_mismatched_shapes() {
        let result: Result<ChatLine, _> = decode_raw(json!({ "unexpected": true }));

        assert!(
            matches!(result, Err(ApiError::Decode(_))),
            "expected decode error, got {result:?}"
        );
    }
}
