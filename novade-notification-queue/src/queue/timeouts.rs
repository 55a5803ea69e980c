//! Expiry of displayed notifications and wake-up scheduling.

use std::time::Duration;
use tracing::trace;

use super::NotificationQueues;
use crate::types::CloseReason;

/// Granularity of the age shown next to old notifications.
const AGE_DISPLAY_UNIT: Duration = Duration::from_secs(1);

/// Time until the next whole `AGE_DISPLAY_UNIT` of `age`.
fn until_next_unit(age: Duration) -> Duration {
    let unit = AGE_DISPLAY_UNIT.as_micros();
    let into_unit = age.as_micros() % unit;
    Duration::from_micros((unit - into_unit) as u64)
}

impl NotificationQueues {
    /// Closes displayed notifications whose timeout has run out.
    ///
    /// While the user is idle (and no fullscreen content is active), the timer
    /// of every non-transient notification is restarted instead, so nothing
    /// expires unseen. Sticky notifications never expire.
    pub fn check_timeouts(&mut self, idle: bool, fullscreen: bool) {
        if self.displayed.is_empty() {
            return;
        }

        let is_idle = idle && !fullscreen;
        let now = self.clock.now();
        let mut index = 0;
        while index < self.displayed.len() {
            let notification = &mut self.displayed[index];

            if is_idle && !notification.transient {
                notification.start = Some(now);
                index += 1;
                continue;
            }

            let expired = match notification.start {
                Some(start) if !notification.is_sticky() => now.saturating_sub(start) > notification.timeout,
                _ => false,
            };
            if !expired {
                index += 1;
                continue;
            }

            if let Some(notification) = self.displayed.remove(index) {
                trace!(id = notification.id, "Notification timed out");
                self.retire(notification, CloseReason::Expired);
            }
        }
    }

    /// How long until something on screen changes on its own.
    ///
    /// Considers expiry of every displayed notification and, when
    /// `show_age_threshold` is enabled, the moments the displayed age appears
    /// or ticks over. Returns `Some(Duration::ZERO)` if a notification is
    /// already overdue and `None` if nothing is pending.
    pub fn next_datachange(&self) -> Option<Duration> {
        let now = self.clock.now();
        let threshold = self.settings.age_threshold();
        let mut sleep: Option<Duration> = None;
        let mut consider = |candidate: Duration| {
            sleep = Some(sleep.map_or(candidate, |current| current.min(candidate)));
        };

        for notification in &self.displayed {
            let mut remaining = None;
            if let (false, Some(start)) = (notification.is_sticky(), notification.start) {
                let elapsed = now.saturating_sub(start);
                if elapsed >= notification.timeout {
                    return Some(Duration::ZERO);
                }
                let ttl = notification.timeout - elapsed;
                remaining = Some(ttl);
                consider(ttl);
            }

            if let (Some(threshold), Some(created)) = (threshold, notification.timestamp) {
                let age = now.saturating_sub(created);
                if age > threshold {
                    consider(until_next_unit(age));
                } else if notification.is_sticky() || remaining.map_or(false, |ttl| ttl > threshold) {
                    consider(threshold - age);
                }
            }
        }

        sleep
    }
}
