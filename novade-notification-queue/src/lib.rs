//! # NovaDE Notification Queue (`novade-notification-queue`)
//!
//! The lifecycle core of the NovaDE notification daemon. It decides which
//! notifications are on screen, which are waiting, when they expire and what
//! happens to them afterwards.
//!
//! ## Overview
//!
//! - **Queues**: [`NotificationQueues`] keeps waiting, displayed and history
//!   queues, assigns ids, stacks duplicates, replaces notifications by id and
//!   replays closed ones from history.
//! - **Scheduling**: expiry with idle freeze, promotion under a display limit,
//!   fullscreen suppression, pause, and the time until the next visible change.
//! - **Policies**: ordering and duplicate detection are traits
//!   ([`OrderingPolicy`], [`DuplicatePolicy`]) with sensible defaults.
//! - **Side effects**: closed signals, script hooks and printing go through a
//!   [`NotificationSink`]; time comes from a [`Clock`].
//! - **Configuration & Logging**: TOML settings via [`ConfigLoader`] and
//!   `tracing` based logging.
//!
//! The engine is single-threaded and does no I/O. The embedding daemon owns
//! the event loop and calls into it.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use novade_notification_queue::{ConfigLoader, MonotonicClock, NotificationQueues, TracingSink};
//! use novade_notification_queue::logging::init_logging;
//!
//! let config = ConfigLoader::load()?;
//! init_logging(&config.logging)?;
//!
//! let mut queues = NotificationQueues::new(config.queue, Arc::new(TracingSink::new()), Arc::new(MonotonicClock::new()));
//! // On every wake-up:
//! let sleep = queues.tick(user_idle, fullscreen_active);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod policies;
pub mod queue;
pub mod sink;
pub mod types;

// Re-export key types for convenience
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{ConfigLoader, LoggingConfig, NotificationConfig, QueueSettings};
pub use error::{ConfigError, LoggingError, QueueError};
pub use logging::{init_logging, init_minimal_logging};
pub use policies::{ArrivalOrdering, ContentDuplicatePolicy, DuplicatePolicy, OrderingPolicy, UrgencyOrdering};
pub use queue::{NotificationQueues, QueueStats};
pub use sink::{NotificationSink, TracingSink};
pub use types::{CloseReason, FullscreenMode, Notification, NotificationId, NotificationUrgency, Timestamp};
