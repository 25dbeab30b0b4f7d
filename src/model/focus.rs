use serde::{Deserialize, Serialize};

/// RMI focus: the work class a task, SOP or promoted idea belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RmiFocus {
    /// Reactive firefighting and patches
    React,
    /// Steady-state operations
    Maintain,
    /// Innovative experiments
    Improvise,
}

impl RmiFocus {
    /// All three categories, in display order
    pub const ALL: [RmiFocus; 3] = [RmiFocus::React, RmiFocus::Maintain, RmiFocus::Improvise];

    pub fn as_str(self) -> &'static str {
        match self {
            RmiFocus::React => "React",
            RmiFocus::Maintain => "Maintain",
            RmiFocus::Improvise => "Improvise",
        }
    }
}

impl std::fmt::Display for RmiFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable display metadata for one focus category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RmiMeta {
    pub color: String,
    pub icon: String,
    pub label: String,
    pub description: String,
}

impl RmiMeta {
    fn new(color: &str, icon: &str, label: &str, description: &str) -> Self {
        RmiMeta {
            color: color.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Metadata for the three focus categories. One field per category keeps the
/// key set fixed: a category can be edited but never added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusConfig {
    pub react: RmiMeta,
    pub maintain: RmiMeta,
    pub improvise: RmiMeta,
}

impl Default for FocusConfig {
    fn default() -> Self {
        FocusConfig {
            react: RmiMeta::new("rose", "⚡", "Reactive", "Critical Firefighting & Patches"),
            maintain: RmiMeta::new("indigo", "🛡️", "Maintain", "Core Scalability & Compliance"),
            improvise: RmiMeta::new("amber", "🚀", "Improvise", "Innovative Feature Prototypes"),
        }
    }
}

impl FocusConfig {
    pub fn get(&self, focus: RmiFocus) -> &RmiMeta {
        match focus {
            RmiFocus::React => &self.react,
            RmiFocus::Maintain => &self.maintain,
            RmiFocus::Improvise => &self.improvise,
        }
    }

    pub fn get_mut(&mut self, focus: RmiFocus) -> &mut RmiMeta {
        match focus {
            RmiFocus::React => &mut self.react,
            RmiFocus::Maintain => &mut self.maintain,
            RmiFocus::Improvise => &mut self.improvise,
        }
    }

    /// Iterate categories with their metadata, in display order
    pub fn iter(&self) -> impl Iterator<Item = (RmiFocus, &RmiMeta)> {
        RmiFocus::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
