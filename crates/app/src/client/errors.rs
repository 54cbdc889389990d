//! API client errors.

use std::collections::BTreeMap;

use allora::envelope::{EnvelopeError, ErrorResponse};
use thiserror::Error;

/// Fallback message shown whenever a failure has no structured backend
/// message to surface.
pub const GENERIC_ERROR_MESSAGE: &str = "We're sorry, but an unexpected error has occurred. \
     Please try again later or contact support if the issue persists";

/// Errors raised by backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a decodable response (connection, TLS,
    /// timeout, or a non-JSON body).
    #[error("http transport error")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a structured error envelope.
    #[error("{}", backend_message(.0))]
    Backend(ErrorResponse),

    /// The response body matched neither envelope shape.
    #[error("{GENERIC_ERROR_MESSAGE}")]
    Decode(#[source] EnvelopeError),

    /// The CSRF endpoint answered without a usable token.
    #[error("csrf endpoint returned no token")]
    MissingCsrfToken,
}

impl ApiError {
    /// Field-keyed validation messages, when the backend sent any.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Backend(error) => error.validation_errors.as_ref(),
            _ => None,
        }
    }

    /// The backend error envelope, when this failure carries one.
    #[must_use]
    pub fn backend_error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Backend(error) => Some(error),
            _ => None,
        }
    }
}

fn backend_message(error: &ErrorResponse) -> &str {
    error.error_message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE)
}
