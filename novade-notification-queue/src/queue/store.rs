//! Container helpers shared by the queue operations.
//!
//! The waiting and displayed queues are `VecDeque`s kept in policy order.
//! Each entry is owned by exactly one deque, so moving it between queues is a
//! plain move and nothing can be freed twice.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::policies::OrderingPolicy;
use crate::types::{Notification, NotificationId};

/// Inserts `notification` after every entry that does not sort after it.
///
/// Entries comparing equal keep their insertion order.
pub(crate) fn insert_sorted(
    queue: &mut VecDeque<Notification>,
    notification: Notification,
    ordering: &dyn OrderingPolicy,
) {
    let index = queue
        .iter()
        .position(|existing| ordering.compare(existing, &notification) == Ordering::Greater)
        .unwrap_or(queue.len());
    queue.insert(index, notification);
}

/// Index of the entry carrying `id`, if any.
pub(crate) fn position_of(queue: &VecDeque<Notification>, id: NotificationId) -> Option<usize> {
    queue.iter().position(|n| n.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{ArrivalOrdering, UrgencyOrdering};
    use crate::types::NotificationUrgency;

    fn notif(id: u32, urgency: NotificationUrgency) -> Notification {
        Notification::new("app", format!("n{id}"), "").with_id(id).with_urgency(urgency)
    }

    fn ids(queue: &VecDeque<Notification>) -> Vec<u32> {
        queue.iter().map(|n| n.id).collect()
    }

    #[test]
    fn insert_sorted_places_by_priority() {
        let ordering = UrgencyOrdering::new();
        let mut queue = VecDeque::new();
        insert_sorted(&mut queue, notif(1, NotificationUrgency::Low), &ordering);
        insert_sorted(&mut queue, notif(2, NotificationUrgency::Critical), &ordering);
        insert_sorted(&mut queue, notif(3, NotificationUrgency::Normal), &ordering);
        insert_sorted(&mut queue, notif(4, NotificationUrgency::Critical), &ordering);
        assert_eq!(ids(&queue), vec![2, 4, 3, 1]);
    }

    /// Ordering that treats every entry as equal, to observe tie handling.
    struct AllEqual;

    impl OrderingPolicy for AllEqual {
        fn compare(&self, _: &Notification, _: &Notification) -> Ordering {
            Ordering::Equal
        }
    }

    #[test]
    fn insert_sorted_is_stable_for_ties() {
        let mut queue = VecDeque::new();
        for id in [5, 3, 9, 1] {
            insert_sorted(&mut queue, notif(id, NotificationUrgency::Normal), &AllEqual);
        }
        assert_eq!(ids(&queue), vec![5, 3, 9, 1]);
    }

    #[test]
    fn position_of_finds_ids() {
        let ordering = ArrivalOrdering::new();
        let mut queue = VecDeque::new();
        insert_sorted(&mut queue, notif(7, NotificationUrgency::Normal), &ordering);
        insert_sorted(&mut queue, notif(3, NotificationUrgency::Normal), &ordering);
        assert_eq!(position_of(&queue, 7), Some(1));
        assert_eq!(position_of(&queue, 3), Some(0));
        assert_eq!(position_of(&queue, 4), None);
    }
}
