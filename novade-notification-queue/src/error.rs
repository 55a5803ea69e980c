//! Error handling for the notification queue.
//!
//! Normal queue traffic never fails: skipped messages, unknown ids and an
//! empty history are reported through return values. The types here cover
//! the remaining cases, namely bookkeeping violations inside the engine and
//! failures of the ambient configuration and logging setup.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::NotificationId;

/// Errors raised by [`crate::queue::NotificationQueues`].
///
/// Every variant signals a bug in earlier bookkeeping, never a user mistake.
/// The engine leaves its containers untouched when it returns one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueError {
    /// The same id was found in both the displayed and the waiting queue.
    #[error("Notification ID {0} is present in both the displayed and the waiting queue")]
    DuplicateActiveId(NotificationId),
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds values outside their allowed range.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Logging initialization failed: {0}")]
    InitializationFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages_display() {
        assert_eq!(
            format!("{}", QueueError::DuplicateActiveId(7)),
            "Notification ID 7 is present in both the displayed and the waiting queue"
        );
        assert_eq!(
            format!("{}", ConfigError::ValidationError("bad level".to_string())),
            "Configuration validation failed: bad level"
        );
        assert_eq!(
            format!("{}", ConfigError::DirectoryUnavailable { dir_type: "config".to_string() }),
            "Could not determine base directory for config"
        );
        assert_eq!(
            format!("{}", LoggingError::InitializationFailure("already set".to_string())),
            "Logging initialization failed: already set"
        );
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("/nonexistent/notifications.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(format!("{}", err).contains("notifications.toml"));
    }
}
