//! Promotion from waiting to displayed.

use tracing::debug;

use super::store::insert_sorted;
use super::{ordering_for, NotificationQueues};
use crate::types::FullscreenMode;

impl NotificationQueues {
    /// Moves notifications between waiting and displayed.
    ///
    /// - While paused, everything on screen goes back to waiting and nothing is promoted.
    /// - While `fullscreen` is active, displayed [`FullscreenMode::Pushback`]
    ///   entries go back to waiting, and `Delay`/`Pushback` entries are not promoted.
    /// - Otherwise waiting entries are promoted front to back until the
    ///   displayed limit is reached.
    pub fn update(&mut self, fullscreen: bool) {
        let ordering = ordering_for(&self.ordering, &self.settings);

        if self.paused {
            while let Some(notification) = self.displayed.pop_front() {
                insert_sorted(&mut self.waiting, notification, ordering);
            }
            return;
        }

        if fullscreen {
            let mut index = 0;
            while index < self.displayed.len() {
                if self.displayed[index].fullscreen != FullscreenMode::Pushback {
                    index += 1;
                    continue;
                }
                if let Some(notification) = self.displayed.remove(index) {
                    debug!(id = notification.id, "Pushing notification back while fullscreen");
                    insert_sorted(&mut self.waiting, notification, ordering);
                }
            }
        }

        let limit = self.settings.displayed_limit;
        let now = self.clock.now();
        let mut index = 0;
        while index < self.waiting.len() {
            if limit > 0 && self.displayed.len() >= limit {
                break;
            }
            if fullscreen && self.waiting[index].fullscreen.suppressed_by_fullscreen() {
                index += 1;
                continue;
            }
            let Some(mut notification) = self.waiting.remove(index) else {
                break;
            };

            notification.start = Some(now);
            if !notification.redisplayed && notification.script.is_some() {
                self.sink.run_script(&notification);
            }
            debug!(id = notification.id, "Displaying notification");
            insert_sorted(&mut self.displayed, notification, ordering);
        }
    }
}
