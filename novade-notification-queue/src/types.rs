//! Core notification types for the queue engine.
//!
//! A [`Notification`] is built by the protocol layer and handed to
//! [`crate::queue::NotificationQueues::insert`]. From then on it is owned by
//! exactly one of the waiting, displayed or history queues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identifier of a notification as seen by clients. `0` means "unassigned".
pub type NotificationId = u32;

/// A point in time on the engine's monotonic clock, measured from the clock's origin.
pub type Timestamp = Duration;

/// Progress value of a notification that carries no progress bar.
pub const NO_PROGRESS: i32 = -1;

/// The urgency of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationUrgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl fmt::Display for NotificationUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationUrgency::Low => write!(f, "Low"),
            NotificationUrgency::Normal => write!(f, "Normal"),
            NotificationUrgency::Critical => write!(f, "Critical"),
        }
    }
}

/// How a notification behaves while fullscreen content is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FullscreenMode {
    /// Shown regardless of fullscreen state.
    #[default]
    Show,
    /// Not promoted while fullscreen is active, but left on screen if already shown.
    Delay,
    /// Not promoted while fullscreen is active, and pulled back off screen if shown.
    Pushback,
}

impl FullscreenMode {
    /// Whether promotion is held back while fullscreen content is active.
    pub fn suppressed_by_fullscreen(self) -> bool {
        match self {
            FullscreenMode::Show => false,
            FullscreenMode::Delay | FullscreenMode::Pushback => true,
        }
    }
}

/// Why a notification left the active queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseReason {
    /// The display timeout ran out.
    Expired,
    /// The user dismissed it.
    Dismissed,
    /// A client asked for it to be closed.
    ClosedByCall,
    /// No specific reason.
    Undefined,
    /// A newer duplicate took its place in the queue.
    Superseded,
}

impl CloseReason {
    /// Reason code as sent in the `NotificationClosed` signal.
    ///
    /// `Superseded` maps to the expired code, which is what clients have
    /// always received for stacked duplicates.
    pub fn code(self) -> u32 {
        match self {
            CloseReason::Expired | CloseReason::Superseded => 1,
            CloseReason::Dismissed => 2,
            CloseReason::ClosedByCall => 3,
            CloseReason::Undefined => 4,
        }
    }
}

/// A single notification tracked by the queue engine.
///
/// Fields are public because the protocol layer fills them in directly and the
/// renderer reads them back. Bookkeeping fields (`id`, `dup_count`, `start`,
/// `redisplayed`) are managed by the engine once the notification is inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Client-visible id. `0` asks the engine for a new one.
    pub id: NotificationId,
    pub app_name: String,
    pub summary: String,
    pub body: String,
    pub icon: Option<String>,
    /// The message after formatting. Only its emptiness matters here.
    pub message: String,
    pub urgency: NotificationUrgency,
    /// Progress percentage, or [`NO_PROGRESS`].
    pub progress: i32,
    /// How many duplicates were stacked onto this notification.
    pub dup_count: u32,
    /// When display began. `None` while waiting or after a history replay.
    pub start: Option<Timestamp>,
    /// Display duration. Zero means sticky.
    pub timeout: Duration,
    /// Creation time on the engine clock. `None` until the engine stamps it on insert.
    pub timestamp: Option<Timestamp>,
    /// Keeps expiring while the user is idle.
    pub transient: bool,
    pub fullscreen: FullscreenMode,
    /// Dropped instead of archived when closed.
    pub history_ignore: bool,
    /// Set once the notification has been replayed from history.
    pub redisplayed: bool,
    /// Script to run on first display and on replacement.
    pub script: Option<String>,
}

impl Notification {
    /// Creates a notification with an unassigned id whose rendered message is the summary.
    pub fn new(app_name: impl Into<String>, summary: impl Into<String>, body: impl Into<String>) -> Self {
        let summary = summary.into();
        Notification {
            id: 0,
            app_name: app_name.into(),
            message: summary.clone(),
            summary,
            body: body.into(),
            icon: None,
            urgency: NotificationUrgency::Normal,
            progress: NO_PROGRESS,
            dup_count: 0,
            start: None,
            timeout: Duration::ZERO,
            timestamp: None,
            transient: false,
            fullscreen: FullscreenMode::Show,
            history_ignore: false,
            redisplayed: false,
            script: None,
        }
    }

    pub fn with_id(mut self, id: NotificationId) -> Self {
        self.id = id;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_urgency(mut self, urgency: NotificationUrgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: FullscreenMode) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_history_ignore(mut self, history_ignore: bool) -> Self {
        self.history_ignore = history_ignore;
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// A sticky notification never expires on its own.
    pub fn is_sticky(&self) -> bool {
        self.timeout.is_zero()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification[{}] '{}' from {} ({})", self.id, self.summary, self.app_name, self.urgency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_urgency_default_and_serde() {
        assert_eq!(NotificationUrgency::default(), NotificationUrgency::Normal);
        let serialized = serde_json::to_string(&NotificationUrgency::Critical).unwrap();
        assert_eq!(serialized, "\"critical\"");
        let deserialized: NotificationUrgency = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, NotificationUrgency::Critical);
    }

    #[test]
    fn urgency_orders_low_to_critical() {
        assert!(NotificationUrgency::Low < NotificationUrgency::Normal);
        assert!(NotificationUrgency::Normal < NotificationUrgency::Critical);
    }

    #[test]
    fn fullscreen_mode_serde_and_suppression() {
        assert_eq!(FullscreenMode::default(), FullscreenMode::Show);
        assert_eq!(serde_json::to_string(&FullscreenMode::Pushback).unwrap(), "\"pushback\"");
        assert!(!FullscreenMode::Show.suppressed_by_fullscreen());
        assert!(FullscreenMode::Delay.suppressed_by_fullscreen());
        assert!(FullscreenMode::Pushback.suppressed_by_fullscreen());
    }

    #[test]
    fn close_reason_codes() {
        assert_eq!(CloseReason::Expired.code(), 1);
        assert_eq!(CloseReason::Dismissed.code(), 2);
        assert_eq!(CloseReason::ClosedByCall.code(), 3);
        assert_eq!(CloseReason::Undefined.code(), 4);
        assert_eq!(CloseReason::Superseded.code(), 1);
        assert_eq!(serde_json::to_string(&CloseReason::ClosedByCall).unwrap(), "\"closed-by-call\"");
    }

    #[test]
    fn notification_new_defaults() {
        let n = Notification::new("mail", "New message", "Hello there");
        assert_eq!(n.id, 0);
        assert_eq!(n.message, "New message");
        assert_eq!(n.progress, NO_PROGRESS);
        assert_eq!(n.dup_count, 0);
        assert_eq!(n.start, None);
        assert_eq!(n.timestamp, None);
        assert!(n.is_sticky());
        assert!(!n.redisplayed);
    }

    #[test]
    fn notification_builders_and_display() {
        let n = Notification::new("mail", "Subject", "")
            .with_id(9)
            .with_urgency(NotificationUrgency::Critical)
            .with_timeout(Duration::from_secs(5))
            .with_script("/usr/bin/true");
        assert!(!n.is_sticky());
        assert_eq!(n.script.as_deref(), Some("/usr/bin/true"));
        let display = format!("{}", n);
        assert!(display.contains("[9]"));
        assert!(display.contains("Critical"));
    }
}
