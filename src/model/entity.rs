use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the organizational units all work is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    /// Accent color name
    pub color: String,
    /// Icon glyph shown next to the name
    pub icon: String,
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Finished,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Planning => write!(f, "Planning"),
            ProjectStatus::Active => write!(f, "Active"),
            ProjectStatus::OnHold => write!(f, "On Hold"),
            ProjectStatus::Finished => write!(f, "Finished"),
        }
    }
}

/// A named initiative owned by exactly one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Owning entity. Tasks resolve their entity through this reference.
    pub entity_id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Completion percentage (0-100), maintained by hand
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
