//! Accepting new notifications: command interception, id assignment,
//! stacking of duplicates and replacement by id.

use std::collections::VecDeque;
use tracing::{debug, error, trace};

use super::store::{insert_sorted, position_of};
use super::{ordering_for, NotificationQueues};
use crate::error::QueueError;
use crate::policies::DuplicatePolicy;
use crate::types::{CloseReason, Notification, NotificationId, Timestamp};

/// Summary that pauses display instead of showing a notification.
pub const PAUSE_COMMAND: &str = "NOVADE_COMMAND_PAUSE";
/// Summary that resumes display.
pub const RESUME_COMMAND: &str = "NOVADE_COMMAND_RESUME";
/// Summary that flips the pause state.
pub const TOGGLE_COMMAND: &str = "NOVADE_COMMAND_TOGGLE";

/// Which queue a stacked duplicate was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Displayed,
    Waiting,
}

/// Stacks `incoming` onto the first duplicate in `queue`.
///
/// Returns the superseded entry, or hands `incoming` back if nothing matched.
fn stack_into(
    queue: &mut VecDeque<Notification>,
    mut incoming: Notification,
    policy: &dyn DuplicatePolicy,
    restart_at: Option<Timestamp>,
) -> Result<Notification, Notification> {
    let Some(index) = queue.iter().position(|orig| policy.is_duplicate(orig, &incoming)) else {
        return Err(incoming);
    };

    let orig = &mut queue[index];
    // A changed progress value is an update, not a repeat.
    if orig.progress == incoming.progress {
        orig.dup_count += 1;
    } else {
        orig.progress = incoming.progress;
    }
    incoming.dup_count = orig.dup_count;
    if let Some(now) = restart_at {
        incoming.start = Some(now);
    }

    Ok(std::mem::replace(orig, incoming))
}

impl NotificationQueues {
    /// Accepts a notification into the queues.
    ///
    /// Returns the id now in use, or `0` if the notification was skipped
    /// (empty message) or consumed as a pause command.
    ///
    /// # Errors
    ///
    /// [`QueueError::DuplicateActiveId`] if an explicit id is found in both the
    /// displayed and the waiting queue. The notification is dropped and no
    /// queue is modified.
    pub fn insert(&mut self, mut notification: Notification) -> Result<NotificationId, QueueError> {
        if notification.message.is_empty() {
            if self.settings.always_run_script {
                self.sink.run_script(&notification);
            }
            debug!("Skipping notification: '{}' '{}'", notification.body, notification.summary);
            return Ok(0);
        }

        if self.apply_command(&notification.summary) {
            return Ok(0);
        }

        if notification.timestamp.is_none() {
            notification.timestamp = Some(self.clock.now());
        }

        if notification.id == 0 {
            notification.id = self.next_id();
            let id = notification.id;
            let leftover = if self.settings.stack_duplicates {
                self.stack_duplicate(notification)
            } else {
                Some(notification)
            };
            if let Some(notification) = leftover {
                insert_sorted(&mut self.waiting, notification, ordering_for(&self.ordering, &self.settings));
            }
            self.print_if_enabled(id);
            Ok(id)
        } else {
            let id = notification.id;
            if let Some(notification) = self.replace_id(notification)? {
                insert_sorted(&mut self.waiting, notification, ordering_for(&self.ordering, &self.settings));
            }
            self.print_if_enabled(id);
            Ok(id)
        }
    }

    /// Pre-increments the id counter, skipping `0` on wrap-around and any id
    /// a client already claimed explicitly.
    fn next_id(&mut self) -> NotificationId {
        loop {
            self.last_id = self.last_id.wrapping_add(1);
            if self.last_id != 0 && self.get(self.last_id).is_none() {
                return self.last_id;
            }
            trace!(id = self.last_id, "Skipping id already in use");
        }
    }

    /// Handles the reserved command summaries. Returns `true` if one matched.
    fn apply_command(&mut self, summary: &str) -> bool {
        match summary {
            PAUSE_COMMAND => self.pause_on(),
            RESUME_COMMAND => self.pause_off(),
            TOGGLE_COMMAND => self.pause_toggle(),
            _ => return false,
        }
        debug!(command = summary, paused = self.paused, "Pause command received");
        true
    }

    fn print_if_enabled(&self, id: NotificationId) {
        if !self.settings.print_notifications {
            return;
        }
        if let Some(stored) = self.get(id) {
            self.sink.print(stored);
        }
    }

    /// Merges `notification` into an equivalent active entry.
    ///
    /// Displayed is searched before waiting. On a match the new notification
    /// takes over the old slot, inheriting the duplicate counter, and the old
    /// one is reported as superseded. Returns the notification back if no
    /// duplicate exists.
    pub(crate) fn stack_duplicate(&mut self, notification: Notification) -> Option<Notification> {
        let now = self.clock.now();
        let (orig, slot) = match stack_into(&mut self.displayed, notification, self.duplicates.as_ref(), Some(now)) {
            Ok(orig) => (orig, Slot::Displayed),
            Err(notification) => match stack_into(&mut self.waiting, notification, self.duplicates.as_ref(), None) {
                Ok(orig) => (orig, Slot::Waiting),
                Err(notification) => return Some(notification),
            },
        };

        debug!(superseded = orig.id, dup_count = orig.dup_count, ?slot, "Stacked duplicate notification");
        self.sink.notification_closed(&orig, CloseReason::Superseded);
        None
    }

    /// Replaces the active entry carrying the same id as `notification`.
    ///
    /// A replaced displayed entry restarts its timer and runs the script hook;
    /// a replaced waiting entry just takes over the content. Either way the
    /// replacement is re-slotted in policy order, since its urgency may differ.
    /// The old entry is dropped without a closed report. Returns the
    /// notification back if the id is not active.
    pub(crate) fn replace_id(&mut self, mut notification: Notification) -> Result<Option<Notification>, QueueError> {
        let id = notification.id;
        match (position_of(&self.displayed, id), position_of(&self.waiting, id)) {
            (Some(_), Some(_)) => {
                error!(id, "Notification id is active in both displayed and waiting queues");
                Err(QueueError::DuplicateActiveId(id))
            }
            (Some(index), None) => {
                notification.start = Some(self.clock.now());
                notification.dup_count = self.displayed[index].dup_count;
                self.sink.run_script(&notification);
                if let Some(old) = self.displayed.remove(index) {
                    trace!(id = old.id, "Replaced displayed notification");
                }
                insert_sorted(&mut self.displayed, notification, ordering_for(&self.ordering, &self.settings));
                Ok(None)
            }
            (None, Some(index)) => {
                notification.dup_count = self.waiting[index].dup_count;
                if let Some(old) = self.waiting.remove(index) {
                    trace!(id = old.id, "Replaced waiting notification");
                }
                insert_sorted(&mut self.waiting, notification, ordering_for(&self.ordering, &self.settings));
                Ok(None)
            }
            (None, None) => Ok(Some(notification)),
        }
    }
}
