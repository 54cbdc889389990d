//! Cart storage errors.

use std::io;

use thiserror::Error;

/// Errors raised by the persistent cart slot.
///
/// Only mutating operations surface these; reads degrade to an empty cart
/// instead of erroring.
#[derive(Debug, Error)]
pub enum CartStorageError {
    /// The storage slot could not be read.
    #[error("failed to read cart storage")]
    Read(#[source] io::Error),

    /// The storage slot could not be written.
    #[error("failed to write cart storage")]
    Write(#[source] io::Error),

    /// The cart contents could not be serialized for persistence.
    #[error("failed to serialize cart contents")]
    Serialize(#[source] serde_json::Error),
}
