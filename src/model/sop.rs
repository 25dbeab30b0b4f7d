use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::focus::RmiFocus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SopStatus {
    Draft,
    Active,
    #[serde(rename = "Review Required")]
    ReviewRequired,
}

impl std::fmt::Display for SopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SopStatus::Draft => write!(f, "Draft"),
            SopStatus::Active => write!(f, "Active"),
            SopStatus::ReviewRequired => write!(f, "Review Required"),
        }
    }
}

/// A standard operating procedure document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sop {
    pub id: String,
    pub entity_id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub focus: RmiFocus,
    /// Stamped on every create and update
    pub last_updated: NaiveDate,
    pub status: SopStatus,
}
