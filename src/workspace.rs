//! The owned application state: every store, the registry, the acting user
//! and the clock. All mutations go through here so the role guard applies
//! in one place.

use crate::assist::{self, AssistError, TaskSuggestion, TextGenerator};
use crate::model::config::{MetaOverride, WorkspaceConfig};
use crate::model::entity::{Entity, Project};
use crate::model::focus::RmiFocus;
use crate::model::idea::{Idea, IdeaStatus};
use crate::model::notification::{AppNotification, NotificationKind};
use crate::model::sop::Sop;
use crate::model::task::{Priority, Status, SubTask, Task};
use crate::model::user::AppUser;
use crate::ops::dashboard::{self, Dashboard};
use crate::ops::idea_ops::{IdeaBank, IdeaDraft, IdeaError};
use crate::ops::notify_ops::NotificationFeed;
use crate::ops::registry::{EntityEdit, ProjectDraft, Registry, RegistryError};
use crate::ops::sop_ops::{SopDraft, SopError, SopLibrary};
use crate::ops::task_ops::{TaskDefaults, TaskDraft, TaskError, TaskStore};
use crate::seed;
use crate::util::Clock;
use crate::views::calendar::{CalendarCell, CalendarMonth, calendar};
use crate::views::kanban::{DropOutcome, KanbanColumn, drop_message, kanban, plan_drop};
use crate::views::table::{TableRow, table};
use crate::views::{TaskFilter, filter_tasks};

pub const DEFAULT_WORKSPACE_NAME: &str = "Operations Deck";

/// Error type for workspace operations
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Idea(#[from] IdeaError),
    #[error(transparent)]
    Sop(#[from] SopError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Assist(#[from] AssistError),
    #[error("{0} has view-only access")]
    ReadOnly(String),
    #[error("notification not found: {0}")]
    NotificationNotFound(String),
    #[error("no project to promote ideas of entity {0} into")]
    NoPromotionTarget(String),
    #[error("project {project} belongs to entity {entity}, which is not among the configured entities")]
    OrphanProject { project: String, entity: String },
}

/// Top-level screen the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Tasks,
    Ideas,
    Sops,
    Settings,
}

impl std::fmt::Display for ActiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Tasks => "tasks",
            ActiveView::Ideas => "ideas",
            ActiveView::Sops => "sops",
            ActiveView::Settings => "settings",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub name: String,
    registry: Registry,
    tasks: TaskStore,
    ideas: IdeaBank,
    sops: SopLibrary,
    notifications: NotificationFeed,
    clock: Clock,
    current_user: String,
    pub active_view: ActiveView,
    pub filter: TaskFilter,
}

impl Workspace {
    /// A workspace holding only the seeded records
    pub fn seeded(clock: Clock) -> Self {
        let registry = seed::registry();
        let current_user = registry
            .users
            .first()
            .map(|u| u.id.clone())
            .unwrap_or_default();
        Workspace {
            name: DEFAULT_WORKSPACE_NAME.to_string(),
            registry,
            tasks: TaskStore::new(seed::tasks()),
            ideas: IdeaBank::new(seed::ideas()),
            sops: SopLibrary::new(seed::sops()),
            notifications: NotificationFeed::new(seed::notifications(clock.now())),
            clock,
            current_user,
            active_view: ActiveView::default(),
            filter: TaskFilter::default(),
        }
    }

    /// Seeded workspace with the configuration file's overrides applied
    pub fn from_config(config: &WorkspaceConfig, clock: Clock) -> Result<Self, WorkspaceError> {
        let mut ws = Workspace::seeded(clock);
        if let Some(name) = &config.workspace.name {
            ws.name = name.clone();
        }
        if let Some(entities) = &config.entities {
            ws.registry.entities = entities.clone();
            if let Some(orphan) = ws
                .registry
                .projects
                .iter()
                .find(|p| ws.registry.entity(&p.entity_id).is_none())
            {
                return Err(WorkspaceError::OrphanProject {
                    project: orphan.id.clone(),
                    entity: orphan.entity_id.clone(),
                });
            }
        }
        if let Some(team) = &config.team {
            ws.registry.team = team.clone();
        }
        config.focus.apply(&mut ws.registry.focus);
        for (entity, project) in &config.promotion {
            ws.registry.promotion.insert(entity.clone(), project.clone());
        }
        if let Some(user) = &config.workspace.current_user {
            ws.set_current_user(user)?;
        }
        Ok(ws)
    }

    // --- Session state ---

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn current_user(&self) -> Option<&AppUser> {
        self.registry.user(&self.current_user)
    }

    /// Switch the acting user. Allowed for any role.
    pub fn set_current_user(&mut self, user_id: &str) -> Result<(), WorkspaceError> {
        if self.registry.user(user_id).is_none() {
            return Err(RegistryError::UserNotFound(user_id.to_string()).into());
        }
        self.current_user = user_id.to_string();
        Ok(())
    }

    /// The acting user, if allowed to change data
    fn editor(&self) -> Result<AppUser, WorkspaceError> {
        let user = self
            .current_user()
            .ok_or_else(|| RegistryError::UserNotFound(self.current_user.clone()))?;
        if !user.can_edit() {
            log::warn!("rejected mutation by view-only user {}", user.id);
            return Err(WorkspaceError::ReadOnly(user.name.clone()));
        }
        Ok(user.clone())
    }

    // --- Reads ---

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn ideas(&self) -> &[Idea] {
        self.ideas.ideas()
    }

    pub fn ranked_ideas(&self) -> Vec<&Idea> {
        self.ideas.ranked()
    }

    pub fn idea(&self, idea_id: &str) -> Option<&Idea> {
        self.ideas.get(idea_id)
    }

    pub fn sops(&self) -> &[Sop] {
        self.sops.sops()
    }

    pub fn sop(&self, sop_id: &str) -> Option<&Sop> {
        self.sops.get(sop_id)
    }

    /// The SOP a task links to. A dangling link resolves to `None`.
    pub fn task_sop(&self, task: &Task) -> Option<&Sop> {
        task.sop_id.as_deref().and_then(|id| self.sops.get(id))
    }

    pub fn notifications(&self) -> &[AppNotification] {
        self.notifications.items()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.unread_count()
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        dashboard::build(
            self.tasks.tasks(),
            self.ideas.ideas(),
            &self.registry,
            self.clock.today(),
        )
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        filter_tasks(self.tasks.tasks(), &self.registry, &self.filter)
    }

    pub fn kanban(&self) -> Vec<KanbanColumn<'_>> {
        kanban(self.tasks.tasks(), &self.registry, &self.filter)
    }

    pub fn table(&self) -> Vec<TableRow<'_>> {
        table(self.tasks.tasks(), &self.registry, &self.filter)
    }

    pub fn calendar(&self, month: CalendarMonth) -> Vec<CalendarCell<'_>> {
        calendar(&self.filtered_tasks(), month)
    }

    // --- Tasks ---

    fn task_defaults(&self) -> TaskDefaults {
        TaskDefaults {
            project_id: self.registry.default_project_id().map(str::to_string),
            today: self.clock.today(),
        }
    }

    /// Create a task from a draft. A named project must exist.
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<String, WorkspaceError> {
        self.editor()?;
        if let Some(project_id) = &draft.project_id
            && self.registry.project(project_id).is_none()
        {
            return Err(RegistryError::ProjectNotFound(project_id.clone()).into());
        }
        let defaults = self.task_defaults();
        let task = self.tasks.create(draft, &defaults)?;
        Ok(task.id.clone())
    }

    /// Replace a task wholesale
    pub fn update_task(&mut self, task: Task) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.tasks.update(task)?;
        Ok(())
    }

    /// Move a kanban card to `target`. Dropping onto the card's own column
    /// changes nothing and emits nothing; otherwise the status changes once
    /// and one update notification is emitted.
    pub fn drop_card(&mut self, task_id: &str, target: Status) -> Result<DropOutcome, WorkspaceError> {
        self.editor()?;
        let task = self
            .tasks
            .get(task_id)
            .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;
        let outcome = plan_drop(task, target);
        if let DropOutcome::Moved { to, .. } = outcome {
            let text = drop_message(&task.title, to);
            self.tasks.set_status(task_id, to)?;
            self.notifications
                .add(text, NotificationKind::Update, self.clock.now());
        }
        Ok(outcome)
    }

    /// Add a blank subtask assigned to the first roster member
    pub fn add_subtask(&mut self, task_id: &str) -> Result<String, WorkspaceError> {
        self.editor()?;
        let assignee = self.registry.first_member().to_string();
        Ok(self.tasks.add_subtask(task_id, &assignee)?)
    }

    pub fn update_subtask(&mut self, task_id: &str, subtask: SubTask) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.tasks.update_subtask(task_id, subtask)?;
        Ok(())
    }

    pub fn toggle_subtask(&mut self, task_id: &str, sub_id: &str) -> Result<Status, WorkspaceError> {
        self.editor()?;
        Ok(self.tasks.toggle_subtask(task_id, sub_id)?)
    }

    pub fn remove_subtask(&mut self, task_id: &str, sub_id: &str) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.tasks.remove_subtask(task_id, sub_id)?;
        Ok(())
    }

    /// Comment as the acting user. Blank text yields `None`.
    pub fn add_comment(&mut self, task_id: &str, text: &str) -> Result<Option<String>, WorkspaceError> {
        let author = self.editor()?;
        let now = self.clock.now();
        Ok(self.tasks.add_comment(task_id, &author, text, now)?)
    }

    pub fn attach(&mut self, task_id: &str, file_name: &str) -> Result<String, WorkspaceError> {
        self.editor()?;
        Ok(self.tasks.attach(task_id, file_name)?)
    }

    /// File suggested tasks under a project. Returns the new task IDs.
    pub fn add_suggestions(
        &mut self,
        project_id: &str,
        suggestions: &[TaskSuggestion],
    ) -> Result<Vec<String>, WorkspaceError> {
        suggestions
            .iter()
            .map(|s| self.create_task(s.to_draft(project_id)))
            .collect()
    }

    // --- Ideas ---

    pub fn create_idea(&mut self, draft: IdeaDraft) -> Result<String, WorkspaceError> {
        self.editor()?;
        let default_entity = self.registry.default_entity_id();
        let idea = self.ideas.create(draft, default_entity)?;
        Ok(idea.id.clone())
    }

    /// Replace an idea; ratings are clamped into 1..=10
    pub fn update_idea(&mut self, idea: Idea) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.ideas.update(idea)?;
        Ok(())
    }

    pub fn set_idea_status(&mut self, idea_id: &str, status: IdeaStatus) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.ideas.set_status(idea_id, status)?;
        Ok(())
    }

    /// Turn an idea into a task filed under its entity's promotion target.
    /// The idea becomes Promoted and the task view becomes active. An idea
    /// can be promoted once.
    pub fn promote_idea(&mut self, idea_id: &str, focus: RmiFocus) -> Result<String, WorkspaceError> {
        self.editor()?;
        let idea = self.ideas.ensure_promotable(idea_id)?;
        let project_id = self
            .registry
            .promotion_target(&idea.entity_id)
            .ok_or_else(|| WorkspaceError::NoPromotionTarget(idea.entity_id.clone()))?
            .to_string();
        let draft = TaskDraft {
            project_id: Some(project_id),
            title: Some(idea.title.clone()),
            description: Some(idea.description.clone()),
            focus: Some(focus),
            priority: Some(Priority::Medium),
            ..Default::default()
        };
        let defaults = self.task_defaults();
        let task_id = self.tasks.create(draft, &defaults)?.id.clone();
        self.ideas.set_status(idea_id, IdeaStatus::Promoted)?;
        self.active_view = ActiveView::Tasks;
        log::info!("promoted idea {} to task {}", idea_id, task_id);
        Ok(task_id)
    }

    // --- SOPs ---

    pub fn create_sop(&mut self, draft: SopDraft) -> Result<String, WorkspaceError> {
        self.editor()?;
        let today = self.clock.today();
        let default_entity = self.registry.default_entity_id();
        let sop = self.sops.create(draft, default_entity, today)?;
        Ok(sop.id.clone())
    }

    /// Replace a SOP and restamp it today
    pub fn update_sop(&mut self, sop: Sop) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.sops.update(sop, self.clock.today())?;
        Ok(())
    }

    /// Generate content for a SOP from its title and description and store it
    pub fn draft_sop_content(&mut self, generator: &dyn TextGenerator, sop_id: &str) -> Result<(), WorkspaceError> {
        self.editor()?;
        let mut sop = self
            .sops
            .get(sop_id)
            .cloned()
            .ok_or_else(|| SopError::NotFound(sop_id.to_string()))?;
        sop.content = assist::draft_sop(generator, &sop.title, &sop.description)?;
        self.sops.update(sop, self.clock.today())?;
        Ok(())
    }

    // --- Notifications ---

    pub fn notify(&mut self, text: String, kind: NotificationKind) -> String {
        self.notifications.add(text, kind, self.clock.now())
    }

    pub fn mark_read(&mut self, id: &str) -> Result<(), WorkspaceError> {
        self.editor()?;
        if !self.notifications.mark_read(id) {
            return Err(WorkspaceError::NotificationNotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn dismiss(&mut self, id: &str) -> Result<(), WorkspaceError> {
        self.editor()?;
        if !self.notifications.dismiss(id) {
            return Err(WorkspaceError::NotificationNotFound(id.to_string()));
        }
        Ok(())
    }

    // --- Registry ---

    pub fn add_member(&mut self, name: &str) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.registry.add_member(name)?;
        Ok(())
    }

    /// Remove a roster name. Tasks assigned to it keep the name.
    pub fn remove_member(&mut self, name: &str) -> Result<bool, WorkspaceError> {
        self.editor()?;
        Ok(self.registry.remove_member(name))
    }

    pub fn edit_entity(&mut self, entity_id: &str, edit: EntityEdit) -> Result<&Entity, WorkspaceError> {
        self.editor()?;
        self.registry.edit_entity(entity_id, edit)?;
        self.registry
            .entity(entity_id)
            .ok_or_else(|| RegistryError::EntityNotFound(entity_id.to_string()).into())
    }

    pub fn edit_focus(&mut self, focus: RmiFocus, edit: &MetaOverride) -> Result<(), WorkspaceError> {
        self.editor()?;
        self.registry.edit_focus(focus, edit);
        Ok(())
    }

    pub fn add_project(&mut self, draft: ProjectDraft) -> Result<&Project, WorkspaceError> {
        self.editor()?;
        let today = self.clock.today();
        Ok(self.registry.add_project(draft, today)?)
    }
}
