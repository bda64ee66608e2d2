//! Notification bell and center state.
//!
//! The center's visibility lives here, next to the feed, and is only ever
//! changed by the bell and the center themselves.

use unilink::NotificationFeed;

#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    feed: NotificationFeed,
    center_open: bool,
}

impl NotificationState {
    pub fn new(feed: NotificationFeed) -> Self {
        Self {
            feed,
            center_open: false,
        }
    }

    pub fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut NotificationFeed {
        &mut self.feed
    }

    pub fn center_open(&self) -> bool {
        self.center_open
    }

    pub fn toggle_center(&mut self) {
        self.center_open = !self.center_open;
    }

    pub fn close_center(&mut self) {
        self.center_open = false;
    }

    /// Drops everything tied to the signed-in member.
    pub fn clear(&mut self) {
        self.feed = NotificationFeed::new();
        self.center_open = false;
    }
}
