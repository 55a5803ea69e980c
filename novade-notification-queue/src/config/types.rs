//! Configuration data structures for the notification queue.
//!
//! All structs reject unknown fields and fill missing ones from
//! [`super::defaults`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;

/// Settings read by the queue engine.
///
/// The engine only reads these, so they can be swapped at runtime through
/// [`crate::queue::NotificationQueues::update_settings`].
///
/// # Examples
///
/// ```
/// use novade_notification_queue::config::QueueSettings;
///
/// let settings: QueueSettings = toml::from_str("history_length = 5\nsticky_history = false").unwrap();
/// assert_eq!(settings.history_length, 5);
/// assert!(!settings.sticky_history);
/// assert!(settings.stack_duplicates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueueSettings {
    /// Run the script hook even for notifications that are skipped for an empty message.
    #[serde(default = "defaults::default_bool_false")]
    pub always_run_script: bool,
    /// Merge equivalent notifications into one entry with a duplicate counter.
    #[serde(default = "defaults::default_bool_true")]
    pub stack_duplicates: bool,
    /// Pass every accepted notification to the print hook.
    #[serde(default = "defaults::default_bool_false")]
    pub print_notifications: bool,
    /// Maximum history entries. `0` keeps everything.
    #[serde(default = "defaults::default_history_length")]
    pub history_length: usize,
    /// Replayed notifications never time out.
    #[serde(default = "defaults::default_bool_true")]
    pub sticky_history: bool,
    /// Seconds after which the age of a notification is displayed. `-1` disables it.
    #[serde(default = "defaults::default_show_age_threshold")]
    pub show_age_threshold: i64,
    /// Maximum notifications on screen. `0` means unlimited.
    #[serde(default = "defaults::default_displayed_limit")]
    pub displayed_limit: usize,
    /// Order queues by urgency first. When off, arrival order is used.
    #[serde(default = "defaults::default_bool_true")]
    pub sort: bool,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            always_run_script: defaults::default_bool_false(),
            stack_duplicates: defaults::default_bool_true(),
            print_notifications: defaults::default_bool_false(),
            history_length: defaults::default_history_length(),
            sticky_history: defaults::default_bool_true(),
            show_age_threshold: defaults::default_show_age_threshold(),
            displayed_limit: defaults::default_displayed_limit(),
            sort: defaults::default_bool_true(),
        }
    }
}

impl QueueSettings {
    /// The age threshold as a duration, or `None` when disabled.
    pub fn age_threshold(&self) -> Option<Duration> {
        u64::try_from(self.show_age_threshold).ok().map(Duration::from_secs)
    }
}

/// Configuration settings for the logging subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            format: defaults::default_log_format(),
        }
    }
}

/// Root of `notifications.toml`.
///
/// ```
/// use novade_notification_queue::config::NotificationConfig;
///
/// let config: NotificationConfig = toml::from_str(r#"
/// [queue]
/// displayed_limit = 3
///
/// [logging]
/// level = "debug"
/// "#).unwrap();
/// assert_eq!(config.queue.displayed_limit, 3);
/// assert_eq!(config.logging.level, "debug");
/// assert_eq!(config.logging.format, "text");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationConfig {
    #[serde(default)]
    pub queue: QueueSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}
