//! Logging setup built on the `tracing` ecosystem.
//!
//! The engine itself only emits `tracing` events. Drivers pick one of the
//! initializers below to decide where those events end up.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Filters by `RUST_LOG`, falling back to "info". Errors (e.g. a global
/// subscriber already being set) are ignored, which makes this safe to call
/// from tests.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Parses a configured level name.
fn parse_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid => Err(LoggingError::InitializationFailure(format!("Invalid log level in config: {}", invalid))),
    }
}

/// Initializes the global subscriber from a [`LoggingConfig`].
///
/// Writes to `stderr` in text or JSON format.
///
/// # Errors
///
/// Returns [`LoggingError::InitializationFailure`] if the level is unknown or
/// a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let level = parse_level(&config.level)?;
    let filter = EnvFilter::new(level.to_string());

    let layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(std::io::stderr).with_ansi(false).with_filter(filter).boxed(),
        _ => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_filter(filter)
            .boxed(),
    };

    Registry::default()
        .with(layer)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailure(format!("Failed to set global subscriber: {}", e)))
}
