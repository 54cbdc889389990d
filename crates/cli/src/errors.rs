//! CLI errors.

use allora::cart::CartStorageError;
use allora_app::client::ApiError;
use thiserror::Error;

/// Top-level failure of a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// A backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The local cart slot could not be written.
    #[error(transparent)]
    Cart(#[from] CartStorageError),

    /// The logging subscriber could not be installed.
    #[error("failed to initialise logging")]
    Logging(#[source] tracing_subscriber::util::TryInitError),

    /// The command's inputs cannot be carried out.
    #[error("{0}")]
    Invalid(String),
}

impl CliError {
    /// Shorthand for an input problem described to the user.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
