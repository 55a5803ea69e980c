//! Side effects the engine hands off to the outside world.
//!
//! The queue never signals clients, spawns scripts or prints on its own. It
//! calls into a [`NotificationSink`] supplied at construction instead.

use tracing::{debug, info};

use crate::types::{CloseReason, Notification};

/// Receiver of the engine's side effects.
pub trait NotificationSink: Send + Sync {
    /// A notification left the active queues for good.
    fn notification_closed(&self, notification: &Notification, reason: CloseReason);

    /// Run the script attached to a notification (or the global one).
    fn run_script(&self, notification: &Notification);

    /// Informational dump of an accepted notification.
    fn print(&self, notification: &Notification) {
        info!(
            id = notification.id,
            app_name = %notification.app_name,
            summary = %notification.summary,
            body = %notification.body,
            urgency = %notification.urgency,
            "Notification received"
        );
    }
}

/// A sink that only reports what it is asked to do as `tracing` events.
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        TracingSink
    }
}

impl NotificationSink for TracingSink {
    fn notification_closed(&self, notification: &Notification, reason: CloseReason) {
        debug!(id = notification.id, reason = ?reason, code = reason.code(), "NotificationClosed");
    }

    fn run_script(&self, notification: &Notification) {
        debug!(id = notification.id, script = ?notification.script, "Script requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_sink_accepts_every_hook() {
        let sink = TracingSink::new();
        let n = Notification::new("app", "summary", "body").with_id(3);
        sink.notification_closed(&n, CloseReason::Dismissed);
        sink.run_script(&n);
        sink.print(&n);
    }
}
