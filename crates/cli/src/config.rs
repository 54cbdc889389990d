//! Storefront client configuration.

use std::path::PathBuf;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Backend connection settings.
#[derive(Debug, Args)]
pub struct BackendConfig {
    /// Versioned API root of the Allora backend
    #[arg(
        long,
        env = "ALLORA_API_URL",
        default_value = "http://localhost:8080/api/v1"
    )]
    pub api_url: String,
}

/// Local cart persistence settings.
#[derive(Debug, Args)]
pub struct CartConfig {
    /// File holding the persisted cart slot
    #[arg(long, env = "ALLORA_CART_FILE", default_value = "allora-cart.json")]
    pub cart_file: PathBuf,
}
