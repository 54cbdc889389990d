//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::{
    config::{LogFormat, LoggingConfig},
    errors::CliError,
};

/// Install the global subscriber from logging settings.
///
/// # Errors
///
/// Returns an error when a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), CliError> {
    match config.log_format {
        LogFormat::Compact => init_with_layer(config, tracing_subscriber::fmt::layer().compact()),
        LogFormat::Json => init_with_layer(config, tracing_subscriber::fmt::layer().json()),
    }
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},hyper=warn,reqwest=warn", config.log_level))
    })
}

fn init_with_layer<L>(config: &LoggingConfig, fmt_layer: L) -> Result<(), CliError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(config))
        .try_init()
        .map_err(CliError::Logging)
}
