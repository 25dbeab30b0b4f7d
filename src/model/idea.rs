use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdeaStatus {
    Backlog,
    Validating,
    Promoted,
}

impl std::fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdeaStatus::Backlog => write!(f, "Backlog"),
            IdeaStatus::Validating => write!(f, "Validating"),
            IdeaStatus::Promoted => write!(f, "Promoted"),
        }
    }
}

/// A candidate initiative rated on impact, confidence and ease (1-10 each)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub entity_id: String,
    pub title: String,
    pub description: String,
    pub impact: u8,
    pub confidence: u8,
    pub ease: u8,
    pub status: IdeaStatus,
}

impl Idea {
    /// ICE score: impact × confidence × ease. Computed from the current
    /// ratings on every call, never cached.
    pub fn ice_score(&self) -> u32 {
        u32::from(self.impact) * u32::from(self.confidence) * u32::from(self.ease)
    }
}
