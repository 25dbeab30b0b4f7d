use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::focus::{FocusConfig, RmiFocus, RmiMeta};

/// Configuration from opsdeck.toml. Every section is optional; anything left
/// out keeps the seeded value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Replaces the seeded roster when present
    #[serde(default)]
    pub team: Option<Vec<String>>,
    #[serde(default)]
    pub workspace: WorkspaceInfo,
    /// Replaces the seeded entities when present
    #[serde(default)]
    pub entities: Option<Vec<Entity>>,
    #[serde(default)]
    pub focus: FocusOverrides,
    /// Entity ID → project ID used when promoting ideas
    #[serde(default)]
    pub promotion: IndexMap<String, String>,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub name: Option<String>,
    /// User ID acting for the session (default: the first seeded user)
    #[serde(default)]
    pub current_user: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FocusOverrides {
    #[serde(default)]
    pub react: Option<MetaOverride>,
    #[serde(default)]
    pub maintain: Option<MetaOverride>,
    #[serde(default)]
    pub improvise: Option<MetaOverride>,
}

impl FocusOverrides {
    /// Apply every present field on top of `focus`
    pub fn apply(&self, focus: &mut FocusConfig) {
        let pairs = [
            (RmiFocus::React, &self.react),
            (RmiFocus::Maintain, &self.maintain),
            (RmiFocus::Improvise, &self.improvise),
        ];
        for (category, over) in pairs {
            if let Some(over) = over {
                over.apply(focus.get_mut(category));
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaOverride {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MetaOverride {
    pub(crate) fn apply(&self, meta: &mut RmiMeta) {
        if let Some(color) = &self.color {
            meta.color = color.clone();
        }
        if let Some(icon) = &self.icon {
            meta.icon = icon.clone();
        }
        if let Some(label) = &self.label {
            meta.label = label.clone();
        }
        if let Some(description) = &self.description {
            meta.description = description.clone();
        }
    }
}

/// External text-generation program. The prompt is written to its stdin and
/// the generated text is read from its stdout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}
