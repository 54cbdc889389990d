//! Typed envelope decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::envelope::{
    classify::{Classification, classify},
    shapes::{ErrorResponse, HttpResponse},
};

/// Errors raised when a payload cannot be decoded into either envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The payload matches neither the success nor the error envelope.
    #[error("payload matches neither the success nor the error envelope")]
    UnrecognizedShape,

    /// The payload matched a shape probe but failed typed deserialization.
    #[error("envelope deserialization failed")]
    Deserialize(#[source] serde_json::Error),
}

/// A decoded backend response: either envelope, typed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The call succeeded; the envelope may carry a body.
    Success(HttpResponse<T>),

    /// The backend reported a structured failure.
    Failure(ErrorResponse),
}

impl<T: DeserializeOwned> Outcome<T> {
    /// Decode an arbitrary payload using the shape probes (success takes
    /// precedence over error, see [`classify`]).
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::UnrecognizedShape`] when neither probe
    /// matches, or [`EnvelopeError::Deserialize`] when the matched shape
    /// fails typed deserialization.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        match classify(&value) {
            Classification::Success => serde_json::from_value(value)
                .map(Outcome::Success)
                .map_err(EnvelopeError::Deserialize),
            Classification::Error => serde_json::from_value(value)
                .map(Outcome::Failure)
                .map_err(EnvelopeError::Deserialize),
            Classification::Unknown => Err(EnvelopeError::UnrecognizedShape),
        }
    }
}
