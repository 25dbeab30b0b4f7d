use chrono::{DateTime, Local};

use super::next_id;
use crate::model::notification::{AppNotification, NotificationKind};

/// Per-user notification log, newest first
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<AppNotification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<AppNotification>) -> Self {
        NotificationFeed { items }
    }

    pub fn items(&self) -> &[AppNotification] {
        &self.items
    }

    /// Prepend a new unread notification. Returns its ID.
    pub fn add(&mut self, text: String, kind: NotificationKind, at: DateTime<Local>) -> String {
        let id = next_id("n", self.items.iter().map(|n| n.id.as_str()));
        log::debug!("notification {} ({}): {}", id, kind, text);
        self.items.insert(
            0,
            AppNotification {
                id: id.clone(),
                text,
                kind,
                read: false,
                created_at: at,
            },
        );
        id
    }

    /// Mark a notification read. Returns false if no such notification.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    /// Remove a notification. Returns false if no such notification.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Badge count
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }
}
