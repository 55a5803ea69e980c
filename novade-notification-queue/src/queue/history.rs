//! Closing notifications and the bounded history archive.

use tracing::{error, info, trace};

use super::store::position_of;
use super::NotificationQueues;
use crate::error::QueueError;
use crate::types::{CloseReason, Notification, NotificationId};

impl NotificationQueues {
    /// Closes the active notification carrying `id`.
    ///
    /// Returns `Ok(false)` if no active notification has that id.
    ///
    /// # Errors
    ///
    /// [`QueueError::DuplicateActiveId`] if the id is found in both the
    /// displayed and the waiting queue. Nothing is closed in that case.
    pub fn close_id(&mut self, id: NotificationId, reason: CloseReason) -> Result<bool, QueueError> {
        let target = match (position_of(&self.displayed, id), position_of(&self.waiting, id)) {
            (Some(_), Some(_)) => {
                error!(id, "Notification id is active in both displayed and waiting queues");
                return Err(QueueError::DuplicateActiveId(id));
            }
            (Some(index), None) => self.displayed.remove(index),
            (None, Some(index)) => self.waiting.remove(index),
            (None, None) => None,
        };

        match target {
            Some(notification) => {
                self.retire(notification, reason);
                Ok(true)
            }
            None => {
                trace!(id, "Close requested for unknown notification");
                Ok(false)
            }
        }
    }

    /// Closes everything, displayed first, then waiting, as dismissed by the user.
    pub fn close_all(&mut self) {
        while let Some(notification) = self.displayed.pop_front() {
            self.retire(notification, CloseReason::Dismissed);
        }
        while let Some(notification) = self.waiting.pop_front() {
            self.retire(notification, CloseReason::Dismissed);
        }
    }

    /// Reports a notification removed from the active queues and archives it.
    ///
    /// Replayed notifications were already reported when first closed.
    pub(crate) fn retire(&mut self, notification: Notification, reason: CloseReason) {
        if !notification.redisplayed {
            self.sink.notification_closed(&notification, reason);
        }
        info!(id = notification.id, reason = ?reason, "Notification closed");
        self.history_push(notification);
    }

    /// Appends a closed notification to the history, evicting the oldest
    /// entries beyond `history_length`. Notifications flagged
    /// `history_ignore` are dropped instead.
    pub fn history_push(&mut self, notification: Notification) {
        if notification.history_ignore {
            trace!(id = notification.id, "Dropping notification that skips history");
            return;
        }

        let limit = self.settings.history_length;
        if limit > 0 {
            while self.history.len() >= limit {
                if let Some(evicted) = self.history.pop_front() {
                    trace!(id = evicted.id, "Evicted oldest history entry");
                }
            }
        }
        self.history.push_back(notification);
    }

    /// Moves the most recently closed notification back to the front of the
    /// waiting queue, ahead of any priority order.
    ///
    /// Returns the replayed id, or `None` if the history is empty.
    pub fn history_pop(&mut self) -> Option<NotificationId> {
        let mut notification = self.history.pop_back()?;
        notification.redisplayed = true;
        notification.start = None;
        if self.settings.sticky_history {
            notification.timeout = std::time::Duration::ZERO;
        }
        let id = notification.id;
        self.waiting.push_front(notification);
        info!(id, "Notification replayed from history");
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueueSettings;
    use crate::queue::test_support::*;
    use crate::types::NotificationUrgency;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn close_id_reports_and_archives() {
        let mut fx = fixture(QueueSettings::default());
        let id = fx.queues.insert(notification("a")).unwrap();
        fx.queues.update(false);

        assert_eq!(fx.queues.close_id(id, CloseReason::ClosedByCall), Ok(true));
        assert_eq!(fx.queues.displayed_len(), 0);
        assert_eq!(ids(fx.queues.history()), vec![id]);
        assert_eq!(fx.sink.closed(), vec![(id, CloseReason::ClosedByCall)]);
    }

    #[test]
    fn close_id_from_waiting() {
        let mut fx = fixture(QueueSettings::default());
        let id = fx.queues.insert(notification("a")).unwrap();
        assert_eq!(fx.queues.close_id(id, CloseReason::Dismissed), Ok(true));
        assert_eq!(fx.queues.waiting_len(), 0);
        assert_eq!(fx.queues.history_len(), 1);
    }

    #[test]
    fn close_unknown_id_is_noop() {
        let mut fx = fixture(QueueSettings::default());
        fx.queues.insert(notification("a")).unwrap();
        assert_eq!(fx.queues.close_id(1234, CloseReason::Dismissed), Ok(false));
        assert_eq!(fx.queues.waiting_len(), 1);
        assert!(fx.sink.closed().is_empty());
    }

    #[test]
    fn close_id_active_twice_is_an_error() {
        let mut fx = fixture(QueueSettings::default());
        fx.queues.displayed.push_back(notification("a").with_id(3));
        fx.queues.waiting.push_back(notification("b").with_id(3));

        assert_eq!(fx.queues.close_id(3, CloseReason::Dismissed), Err(QueueError::DuplicateActiveId(3)));
        assert_eq!(fx.queues.displayed_len(), 1);
        assert_eq!(fx.queues.waiting_len(), 1);
        assert_eq!(fx.queues.history_len(), 0);
    }

    #[test]
    fn replayed_notification_closes_silently() {
        let mut fx = fixture(QueueSettings::default());
        let id = fx.queues.insert(notification("a")).unwrap();
        fx.queues.close_id(id, CloseReason::Dismissed).unwrap();
        fx.queues.history_pop();

        fx.queues.close_id(id, CloseReason::Dismissed).unwrap();
        assert_eq!(fx.sink.closed().len(), 1, "only the first close is reported");
        assert_eq!(fx.queues.history_len(), 1);
    }

    #[test]
    fn history_bound_evicts_oldest() {
        let mut fx = fixture(QueueSettings { history_length: 2, ..QueueSettings::default() });
        for id in 1..=3 {
            fx.queues.history_push(notification("h").with_id(id));
        }
        assert_eq!(ids(fx.queues.history()), vec![2, 3]);
    }

    #[test]
    fn unbounded_history_keeps_everything() {
        let mut fx = fixture(QueueSettings { history_length: 0, ..QueueSettings::default() });
        for id in 1..=100 {
            fx.queues.history_push(notification("h").with_id(id));
        }
        assert_eq!(fx.queues.history_len(), 100);
    }

    #[test]
    fn lowered_bound_trims_on_next_push() {
        let mut fx = fixture(QueueSettings { history_length: 0, ..QueueSettings::default() });
        for id in 1..=5 {
            fx.queues.history_push(notification("h").with_id(id));
        }
        fx.queues.update_settings(QueueSettings { history_length: 2, ..QueueSettings::default() });
        fx.queues.history_push(notification("h").with_id(6));
        assert_eq!(ids(fx.queues.history()), vec![5, 6]);
    }

    #[test]
    fn history_ignore_is_dropped() {
        let mut fx = fixture(QueueSettings::default());
        let id = fx.queues.insert(notification("a").with_history_ignore(true)).unwrap();
        fx.queues.close_id(id, CloseReason::Dismissed).unwrap();
        assert_eq!(fx.queues.history_len(), 0);
        assert_eq!(fx.sink.closed(), vec![(id, CloseReason::Dismissed)]);
    }

    #[test]
    fn history_pop_on_empty_is_noop() {
        let mut fx = fixture(QueueSettings::default());
        assert_eq!(fx.queues.history_pop(), None);
        assert_eq!(fx.queues.waiting_len(), 0);
    }

    #[test]
    fn history_pop_sticky_goes_to_waiting_front() {
        let mut fx = fixture(QueueSettings { sticky_history: true, ..QueueSettings::default() });
        let old = fx
            .queues
            .insert(notification("old").with_urgency(NotificationUrgency::Low).with_timeout(Duration::from_secs(5)))
            .unwrap();
        fx.queues.update(false);
        fx.queues.close_id(old, CloseReason::Expired).unwrap();
        let crit = fx.queues.insert(notification("crit").with_urgency(NotificationUrgency::Critical)).unwrap();

        assert_eq!(fx.queues.history_pop(), Some(old));

        assert_eq!(ids(fx.queues.waiting()), vec![old, crit]);
        let replayed = fx.queues.waiting().next().unwrap();
        assert_eq!(replayed.start, None);
        assert_eq!(replayed.timeout, Duration::ZERO);
        assert!(replayed.redisplayed);
    }

    #[test]
    fn history_pop_keeps_timeout_without_sticky_history() {
        let mut fx = fixture(QueueSettings { sticky_history: false, ..QueueSettings::default() });
        fx.queues.history_push(notification("h").with_id(8).with_timeout(Duration::from_secs(5)));
        fx.queues.history_pop();
        assert_eq!(fx.queues.waiting().next().unwrap().timeout, Duration::from_secs(5));
    }

    #[test]
    fn history_pop_takes_most_recent() {
        let mut fx = fixture(QueueSettings::default());
        fx.queues.history_push(notification("h").with_id(1));
        fx.queues.history_push(notification("h").with_id(2));
        assert_eq!(fx.queues.history_pop(), Some(2));
        assert_eq!(ids(fx.queues.history()), vec![1]);
    }

    #[test]
    fn close_all_drains_displayed_then_waiting() {
        let mut fx = fixture(QueueSettings { displayed_limit: 1, ..QueueSettings::default() });
        let a = fx.queues.insert(notification("a")).unwrap();
        let b = fx.queues.insert(notification("b")).unwrap();
        let c = fx.queues.insert(notification("c")).unwrap();
        fx.queues.update(false);

        fx.queues.close_all();

        assert_eq!(fx.queues.displayed_len(), 0);
        assert_eq!(fx.queues.waiting_len(), 0);
        assert_eq!(ids(fx.queues.history()), vec![a, b, c]);
        assert!(fx.sink.closed().iter().all(|(_, reason)| *reason == CloseReason::Dismissed));
    }
}
