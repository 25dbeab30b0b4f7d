use chrono::NaiveDate;
use indexmap::IndexMap;

use super::next_id;
use crate::model::config::MetaOverride;
use crate::model::entity::{Entity, Project, ProjectStatus};
use crate::model::focus::{FocusConfig, RmiFocus};
use crate::model::task::{Task, UNASSIGNED};
use crate::model::user::AppUser;

/// Error type for configuration registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
    #[error("project not found: {0}")]
    ProjectNotFound(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("team member name is empty")]
    EmptyName,
    #[error("team member already present: {0}")]
    DuplicateMember(String),
}

pub const DEFAULT_PROJECT_NAME: &str = "New Project";

/// Edits to an entity's display fields; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct EntityEdit {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// A partially specified project. The owning entity is required.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub entity_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// User-editable workspace metadata: entities, projects, roster, focus
/// categories and users.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub entities: Vec<Entity>,
    pub projects: Vec<Project>,
    /// Team member names offered as assignees
    pub team: Vec<String>,
    pub focus: FocusConfig,
    pub users: Vec<AppUser>,
    /// Entity ID → project ID that promoted ideas are filed under
    pub promotion: IndexMap<String, String>,
}

impl Registry {
    // --- Lookups ---

    pub fn entity(&self, entity_id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == entity_id)
    }

    /// The first entity, used when a record names none
    pub fn default_entity_id(&self) -> Option<&str> {
        self.entities.first().map(|e| e.id.as_str())
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// The first project, used when a task names none
    pub fn default_project_id(&self) -> Option<&str> {
        self.projects.first().map(|p| p.id.as_str())
    }

    pub fn projects_for<'a>(&'a self, entity_id: &'a str) -> impl Iterator<Item = &'a Project> {
        self.projects.iter().filter(move |p| p.entity_id == entity_id)
    }

    /// Resolve a project's owning entity
    pub fn entity_for_project(&self, project_id: &str) -> Option<&Entity> {
        self.project(project_id)
            .and_then(|p| self.entity(&p.entity_id))
    }

    /// Resolve a task's entity through its project
    pub fn entity_for_task(&self, task: &Task) -> Option<&Entity> {
        self.entity_for_project(&task.project_id)
    }

    /// Project that ideas of `entity_id` are promoted into: the configured
    /// target if it exists, otherwise the entity's first project.
    pub fn promotion_target(&self, entity_id: &str) -> Option<&str> {
        if let Some(target) = self.promotion.get(entity_id)
            && let Some(project) = self.project(target)
        {
            return Some(project.id.as_str());
        }
        self.projects
            .iter()
            .find(|p| p.entity_id == entity_id)
            .map(|p| p.id.as_str())
    }

    pub fn user(&self, user_id: &str) -> Option<&AppUser> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Default assignee for new subtasks
    pub fn first_member(&self) -> &str {
        self.team.first().map(String::as_str).unwrap_or(UNASSIGNED)
    }

    // --- Team roster ---

    /// Add a member. Names must be non-empty and not already present.
    pub fn add_member(&mut self, name: &str) -> Result<(), RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.team.iter().any(|m| m == name) {
            return Err(RegistryError::DuplicateMember(name.to_string()));
        }
        self.team.push(name.to_string());
        Ok(())
    }

    /// Remove a member by exact name. Tasks assigned to the name keep it.
    pub fn remove_member(&mut self, name: &str) -> bool {
        let before = self.team.len();
        self.team.retain(|m| m != name);
        self.team.len() != before
    }

    // --- Entities and focus metadata ---

    pub fn edit_entity(&mut self, entity_id: &str, edit: EntityEdit) -> Result<(), RegistryError> {
        let entity = self
            .entities
            .iter_mut()
            .find(|e| e.id == entity_id)
            .ok_or_else(|| RegistryError::EntityNotFound(entity_id.to_string()))?;
        if let Some(name) = edit.name {
            entity.name = name;
        }
        if let Some(color) = edit.color {
            entity.color = color;
        }
        if let Some(icon) = edit.icon {
            entity.icon = icon;
        }
        Ok(())
    }

    pub fn edit_focus(&mut self, focus: RmiFocus, edit: &MetaOverride) {
        edit.apply(self.focus.get_mut(focus));
    }

    // --- Projects ---

    pub fn add_project(&mut self, draft: ProjectDraft, today: NaiveDate) -> Result<&Project, RegistryError> {
        if self.entity(&draft.entity_id).is_none() {
            return Err(RegistryError::EntityNotFound(draft.entity_id));
        }
        let start_date = draft.start_date.unwrap_or(today);
        let project = Project {
            id: next_id("p", self.projects.iter().map(|p| p.id.as_str())),
            entity_id: draft.entity_id,
            name: draft.name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            description: draft.description.unwrap_or_default(),
            status: draft.status.unwrap_or(ProjectStatus::Planning),
            progress: draft.progress.unwrap_or(0).min(100),
            start_date,
            end_date: draft.end_date.unwrap_or(start_date),
        };
        self.projects.push(project);
        Ok(&self.projects[self.projects.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn registry() -> Registry {
        seed::registry()
    }

    #[test]
    fn entity_resolves_through_project() {
        let reg = registry();
        assert_eq!(reg.entity_for_project("p1").map(|e| e.id.as_str()), Some("c1"));
        assert_eq!(reg.entity_for_project("p2").map(|e| e.id.as_str()), Some("c2"));
        assert_eq!(reg.entity_for_project("p3").map(|e| e.id.as_str()), Some("c1"));
        assert!(reg.entity_for_project("p404").is_none());
    }

    #[test]
    fn add_member_rejects_duplicates_and_blanks() {
        let mut reg = registry();
        assert!(reg.add_member("Priya Nair").is_ok());
        assert!(matches!(
            reg.add_member("Priya Nair"),
            Err(RegistryError::DuplicateMember(_))
        ));
        assert!(matches!(reg.add_member("  "), Err(RegistryError::EmptyName)));
        assert_eq!(reg.team.last().map(String::as_str), Some("Priya Nair"));
    }

    #[test]
    fn remove_member_is_exact_match() {
        let mut reg = registry();
        assert!(!reg.remove_member("sarah chen"));
        assert!(reg.remove_member("Sarah Chen"));
        assert!(!reg.team.iter().any(|m| m == "Sarah Chen"));
    }

    #[test]
    fn promotion_target_prefers_configured_mapping() {
        let mut reg = registry();
        assert_eq!(reg.promotion_target("c1"), Some("p1"));
        reg.promotion.insert("c1".into(), "p3".into());
        assert_eq!(reg.promotion_target("c1"), Some("p3"));
        // A mapping to a missing project falls through to the entity's first project
        reg.promotion.insert("c1".into(), "p404".into());
        assert_eq!(reg.promotion_target("c1"), Some("p1"));
        assert_eq!(reg.promotion_target("c404"), None);

        // the result borrows the registry only, not the lookup key
        reg.promotion.clear();
        let target = reg.promotion_target(&String::from("c2"));
        assert_eq!(target, Some("p2"));
    }

    #[test]
    fn edit_entity_and_focus_metadata() {
        let mut reg = registry();
        reg.edit_entity(
            "c2",
            EntityEdit {
                name: Some("DE Industries".into()),
                icon: Some("⚙️".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let entity = reg.entity("c2").unwrap();
        assert_eq!(entity.name, "DE Industries");
        assert_eq!(entity.icon, "⚙️");
        assert_eq!(entity.color, "cyan");

        reg.edit_focus(
            RmiFocus::Improvise,
            &MetaOverride {
                label: Some("Explore".into()),
                ..Default::default()
            },
        );
        assert_eq!(reg.focus.get(RmiFocus::Improvise).label, "Explore");
        assert!(matches!(
            reg.edit_entity("c9", EntityEdit::default()),
            Err(RegistryError::EntityNotFound(_))
        ));
    }

    #[test]
    fn add_project_requires_known_entity() {
        let mut reg = registry();
        let today = NaiveDate::from_ymd_opt(2024, 5, 18).unwrap();
        let draft = ProjectDraft {
            entity_id: "c2".into(),
            name: None,
            description: None,
            status: None,
            progress: Some(140),
            start_date: None,
            end_date: None,
        };
        let project = reg.add_project(draft.clone(), today).unwrap();
        assert_eq!(project.id, "p4");
        assert_eq!(project.name, DEFAULT_PROJECT_NAME);
        assert_eq!(project.progress, 100);
        assert_eq!(project.end_date, today);

        let orphan = ProjectDraft {
            entity_id: "c9".into(),
            ..draft
        };
        assert!(matches!(
            reg.add_project(orphan, today),
            Err(RegistryError::EntityNotFound(_))
        ));
    }
}
