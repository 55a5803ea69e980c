//! Default configuration values for the notification queue.
//!
//! These functions are referenced by `serde`'s `default` attribute so that a
//! partial configuration file still yields a complete configuration.

/// Default log level (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Default log format (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

pub(super) fn default_bool_false() -> bool {
    false
}

pub(super) fn default_bool_true() -> bool {
    true
}

/// Number of closed notifications kept for replay.
pub(super) fn default_history_length() -> usize {
    20
}

/// Seconds after which the age of a notification is shown. `-1` disables it.
pub(super) fn default_show_age_threshold() -> i64 {
    60
}

/// Maximum number of notifications on screen. `0` means unlimited.
pub(super) fn default_displayed_limit() -> usize {
    0
}
