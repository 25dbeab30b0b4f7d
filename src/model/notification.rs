use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Mention,
    Update,
    System,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Mention => write!(f, "mention"),
            NotificationKind::Update => write!(f, "update"),
            NotificationKind::System => write!(f, "system"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppNotification {
    pub id: String,
    pub text: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Local>,
}

impl AppNotification {
    /// Relative age for display: `Just now`, `12m ago`, `3h ago`, `2d ago`.
    pub fn age_label(&self, now: DateTime<Local>) -> String {
        let minutes = (now - self.created_at).num_minutes();
        if minutes < 1 {
            "Just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 24 * 60 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / (24 * 60))
        }
    }
}
