//! The notification queue engine.
//!
//! [`NotificationQueues`] owns three containers:
//!
//! - **waiting**: accepted notifications not yet on screen, in policy order.
//! - **displayed**: notifications currently on screen, in policy order.
//! - **history**: closed notifications, oldest at the front.
//!
//! The engine has no threads and does no I/O. A driver calls it from its event
//! sources (incoming messages, a periodic tick, idle/fullscreen changes, user
//! commands) one call at a time. Side effects go through the injected
//! [`NotificationSink`]; time comes from the injected [`Clock`].
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use novade_notification_queue::clock::ManualClock;
//! use novade_notification_queue::config::QueueSettings;
//! use novade_notification_queue::queue::NotificationQueues;
//! use novade_notification_queue::sink::TracingSink;
//! use novade_notification_queue::types::Notification;
//!
//! let clock = Arc::new(ManualClock::new(Duration::from_secs(1)));
//! let mut queues = NotificationQueues::new(QueueSettings::default(), Arc::new(TracingSink::new()), clock.clone());
//!
//! let id = queues
//!     .insert(Notification::new("mail", "New mail", "").with_timeout(Duration::from_secs(5)))
//!     .unwrap();
//! queues.tick(false, false);
//! assert_eq!(queues.displayed_len(), 1);
//!
//! clock.advance(Duration::from_secs(6));
//! queues.tick(false, false);
//! assert_eq!(queues.displayed_len(), 0);
//! assert_eq!(queues.history().next().map(|n| n.id), Some(id));
//! ```

mod history;
mod insertion;
mod scheduler;
mod store;
mod timeouts;

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::clock::Clock;
use crate::config::QueueSettings;
use crate::policies::{ArrivalOrdering, ContentDuplicatePolicy, DuplicatePolicy, OrderingPolicy, UrgencyOrdering};
use crate::sink::NotificationSink;
use crate::types::{Notification, NotificationId};

pub use insertion::{PAUSE_COMMAND, RESUME_COMMAND, TOGGLE_COMMAND};

/// Value of the id counter before the first assignment.
///
/// Ids are pre-incremented, so the first assigned id is `INITIAL_ID_COUNTER + 1`.
pub const INITIAL_ID_COUNTER: NotificationId = 0;

static URGENCY_ORDERING: UrgencyOrdering = UrgencyOrdering;
static ARRIVAL_ORDERING: ArrivalOrdering = ArrivalOrdering;

/// Snapshot of queue sizes and pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct QueueStats {
    pub waiting: usize,
    pub displayed: usize,
    pub history: usize,
    pub paused: bool,
}

/// Waiting, displayed and history queues plus the state that governs them.
pub struct NotificationQueues {
    waiting: VecDeque<Notification>,
    displayed: VecDeque<Notification>,
    history: VecDeque<Notification>,
    last_id: NotificationId,
    paused: bool,
    settings: QueueSettings,
    ordering: Option<Arc<dyn OrderingPolicy>>,
    duplicates: Arc<dyn DuplicatePolicy>,
    sink: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
}

/// Resolves the active ordering: an explicit policy wins, otherwise `sort` picks one.
fn ordering_for<'a>(custom: &'a Option<Arc<dyn OrderingPolicy>>, settings: &QueueSettings) -> &'a dyn OrderingPolicy {
    match custom {
        Some(policy) => policy.as_ref(),
        None if settings.sort => &URGENCY_ORDERING,
        None => &ARRIVAL_ORDERING,
    }
}

impl NotificationQueues {
    /// Creates empty queues using the default policies.
    pub fn new(settings: QueueSettings, sink: Arc<dyn NotificationSink>, clock: Arc<dyn Clock>) -> Self {
        debug!(
            displayed_limit = settings.displayed_limit,
            history_length = settings.history_length,
            "Notification queues initialized"
        );
        Self {
            waiting: VecDeque::new(),
            displayed: VecDeque::new(),
            history: VecDeque::new(),
            last_id: INITIAL_ID_COUNTER,
            paused: false,
            settings,
            ordering: None,
            duplicates: Arc::new(ContentDuplicatePolicy::new()),
            sink,
            clock,
        }
    }

    /// Replaces the ordering policy. The `sort` setting is ignored from then on.
    pub fn with_ordering_policy(mut self, policy: Arc<dyn OrderingPolicy>) -> Self {
        self.ordering = Some(policy);
        self.resort();
        self
    }

    pub fn with_duplicate_policy(mut self, policy: Arc<dyn DuplicatePolicy>) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn settings(&self) -> &QueueSettings {
        &self.settings
    }

    /// Swaps in new settings. A change of `sort` re-sorts the active queues.
    pub fn update_settings(&mut self, settings: QueueSettings) {
        let resort = settings.sort != self.settings.sort && self.ordering.is_none();
        self.settings = settings;
        if resort {
            self.resort();
        }
        debug!("Notification queue settings updated");
    }

    /// Sets the maximum number of displayed notifications. `0` means unlimited.
    pub fn set_displayed_limit(&mut self, limit: usize) {
        self.settings.displayed_limit = limit;
    }

    fn resort(&mut self) {
        let ordering = ordering_for(&self.ordering, &self.settings);
        self.waiting.make_contiguous().sort_by(|a, b| ordering.compare(a, b));
        self.displayed.make_contiguous().sort_by(|a, b| ordering.compare(a, b));
    }

    /// Read-only view of the displayed notifications, in display order.
    pub fn displayed(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.displayed.iter()
    }

    pub fn waiting(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.waiting.iter()
    }

    /// Closed notifications, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.history.iter()
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Looks up an active notification, searching displayed then waiting.
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.displayed.iter().chain(self.waiting.iter()).find(|n| n.id == id)
    }

    /// The most recently assigned id.
    pub fn last_assigned_id(&self) -> NotificationId {
        self.last_id
    }

    pub fn stats(&self) -> QueueStats {
        QueueStats {
            waiting: self.waiting.len(),
            displayed: self.displayed.len(),
            history: self.history.len(),
            paused: self.paused,
        }
    }

    pub fn pause_on(&mut self) {
        self.paused = true;
    }

    pub fn pause_off(&mut self) {
        self.paused = false;
    }

    pub fn pause_toggle(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// One iteration of the driver loop: expire, then promote.
    ///
    /// Returns how long the driver may sleep before the next visible change,
    /// or `None` if nothing is pending.
    pub fn tick(&mut self, idle: bool, fullscreen: bool) -> Option<Duration> {
        self.check_timeouts(idle, fullscreen);
        self.update(fullscreen);
        self.next_datachange()
    }
}

impl fmt::Debug for NotificationQueues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationQueues")
            .field("waiting", &self.waiting.len())
            .field("displayed", &self.displayed.len())
            .field("history", &self.history.len())
            .field("last_id", &self.last_id)
            .field("paused", &self.paused)
            .field("settings", &self.settings)
            .finish()
    }
}
