//! Configuration management for the notification queue.
//!
//! - [`types`]: [`NotificationConfig`], [`QueueSettings`] and [`LoggingConfig`].
//! - [`defaults`]: default values used by `serde` when fields are missing.
//! - [`loader`]: [`ConfigLoader`], which reads `notifications.toml` and validates it.
//!
//! A missing configuration file is not an error; defaults are used instead.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, NotificationConfig, QueueSettings};
