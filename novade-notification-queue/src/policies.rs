//! Pluggable ordering and duplicate detection policies.

use std::cmp::Ordering;

use crate::types::Notification;

/// Defines the priority order of the waiting and displayed queues.
///
/// Implementations must be a total preorder. Entries that compare equal keep
/// their relative insertion order, the queue guarantees that part.
pub trait OrderingPolicy: Send + Sync {
    /// Compares two notifications; `Less` sorts towards the front.
    fn compare(&self, a: &Notification, b: &Notification) -> Ordering;
}

/// Critical first, then by ascending id (arrival order).
#[derive(Debug, Default, Clone)]
pub struct UrgencyOrdering;

impl UrgencyOrdering {
    pub fn new() -> Self {
        UrgencyOrdering
    }
}

impl OrderingPolicy for UrgencyOrdering {
    fn compare(&self, a: &Notification, b: &Notification) -> Ordering {
        b.urgency.cmp(&a.urgency).then_with(|| a.id.cmp(&b.id))
    }
}

/// Plain arrival order by ascending id.
#[derive(Debug, Default, Clone)]
pub struct ArrivalOrdering;

impl ArrivalOrdering {
    pub fn new() -> Self {
        ArrivalOrdering
    }
}

impl OrderingPolicy for ArrivalOrdering {
    fn compare(&self, a: &Notification, b: &Notification) -> Ordering {
        a.id.cmp(&b.id)
    }
}

/// Decides whether a new notification should be stacked onto an existing one.
pub trait DuplicatePolicy: Send + Sync {
    fn is_duplicate(&self, existing: &Notification, incoming: &Notification) -> bool;
}

/// Two notifications are duplicates when the sending application, the text,
/// the icon and the urgency all match.
#[derive(Debug, Default, Clone)]
pub struct ContentDuplicatePolicy;

impl ContentDuplicatePolicy {
    pub fn new() -> Self {
        ContentDuplicatePolicy
    }
}

impl DuplicatePolicy for ContentDuplicatePolicy {
    fn is_duplicate(&self, existing: &Notification, incoming: &Notification) -> bool {
        let duplicate = existing.app_name == incoming.app_name
            && existing.summary == incoming.summary
            && existing.body == incoming.body
            && existing.icon == incoming.icon
            && existing.urgency == incoming.urgency;
        tracing::trace!(
            existing = existing.id,
            incoming = incoming.id,
            duplicate,
            "Compared notifications for stacking"
        );
        duplicate
    }
}
