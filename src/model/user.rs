use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Member,
    Viewer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Member => write!(f, "Member"),
            Role::Viewer => write!(f, "Viewer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl AppUser {
    /// Viewers may read every projection but never mutate state
    pub fn can_edit(&self) -> bool {
        self.role != Role::Viewer
    }
}
