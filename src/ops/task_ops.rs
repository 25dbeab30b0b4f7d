use chrono::{DateTime, Local, NaiveDate};

use super::next_id;
use crate::model::focus::RmiFocus;
use crate::model::task::{
    Attachment, Comment, Priority, RecurringInterval, Status, SubTask, Task, UNASSIGNED,
};
use crate::model::user::AppUser;

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("subtask {subtask} not found on task {task}")]
    SubtaskNotFound { task: String, subtask: String },
    #[error("no project to file the task under")]
    NoProject,
}

/// Title given to tasks created without one
pub const DEFAULT_TASK_TITLE: &str = "New Objective";

/// Placeholder size recorded for attachments
const ATTACHMENT_SIZE: &str = "1.5MB";

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// A partially specified task. `None` means "not supplied".
///
/// Merge precedence: every supplied field is kept as given; defaults fill
/// only the absent ones.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub project_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub focus: Option<RmiFocus>,
    pub assignee: Option<String>,
    pub sop_id: Option<String>,
    pub subtasks: Option<Vec<SubTask>>,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<Attachment>>,
    pub is_recurring: Option<bool>,
    pub recurring_interval: Option<RecurringInterval>,
}

/// Values that depend on workspace state rather than constants
#[derive(Debug, Clone)]
pub struct TaskDefaults {
    pub project_id: Option<String>,
    pub today: NaiveDate,
}

impl TaskDraft {
    /// Merge the draft with defaults into a complete task.
    pub fn into_task(self, id: String, defaults: &TaskDefaults) -> Result<Task, TaskError> {
        let project_id = match self.project_id {
            Some(p) => p,
            None => defaults.project_id.clone().ok_or(TaskError::NoProject)?,
        };
        Ok(Task {
            id,
            project_id,
            title: self.title.unwrap_or_else(|| DEFAULT_TASK_TITLE.to_string()),
            description: self.description.unwrap_or_default(),
            due_date: self.due_date.unwrap_or(defaults.today),
            priority: self.priority.unwrap_or(Priority::Medium),
            status: self.status.unwrap_or(Status::ToDo),
            focus: self.focus.unwrap_or(RmiFocus::Maintain),
            assignee: self.assignee.unwrap_or_else(|| UNASSIGNED.to_string()),
            sop_id: self.sop_id,
            subtasks: self.subtasks.unwrap_or_default(),
            comments: self.comments.unwrap_or_default(),
            attachments: self.attachments.unwrap_or_default(),
            is_recurring: self.is_recurring.unwrap_or(false),
            recurring_interval: self.recurring_interval.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Completion percentage of a task.
///
/// With subtasks: `round(100 × completed / total)`, halves rounding up.
/// Without: Completed → 100, In Progress → 50, To Do → 0.
pub fn compute_progress(task: &Task) -> u8 {
    let total = task.subtasks.len();
    if total == 0 {
        return match task.status {
            Status::Completed => 100,
            Status::InProgress => 50,
            Status::ToDo => 0,
        };
    }
    let completed = task
        .subtasks
        .iter()
        .filter(|s| s.status == Status::Completed)
        .count();
    ((200 * completed + total) / (2 * total)) as u8
}

/// Logical type tag for an attachment: the upper-cased extension, or `FILE`.
pub fn attachment_kind(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_uppercase(),
        _ => "FILE".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// The canonical task list. Views borrow from it and never keep copies.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    fn get_mut(&mut self, task_id: &str) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| TaskError::NotFound(task_id.to_string()))
    }

    /// Tasks filed under a project
    pub fn by_project<'a>(&'a self, project_id: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| t.project_id == project_id)
    }

    /// Build a task from a draft, append it, and return it.
    pub fn create(&mut self, draft: TaskDraft, defaults: &TaskDefaults) -> Result<&Task, TaskError> {
        let id = next_id("t", self.tasks.iter().map(|t| t.id.as_str()));
        let task = draft.into_task(id, defaults)?;
        log::debug!("created task {} in project {}", task.id, task.project_id);
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Replace the task with the same ID wholesale. Last writer wins.
    pub fn update(&mut self, task: Task) -> Result<(), TaskError> {
        let slot = self.get_mut(&task.id)?;
        log::debug!("replaced task {}", task.id);
        *slot = task;
        Ok(())
    }

    /// Set a task's workflow status. Returns the previous status when it
    /// changed, `None` when the task already had it.
    pub fn set_status(&mut self, task_id: &str, status: Status) -> Result<Option<Status>, TaskError> {
        let task = self.get_mut(task_id)?;
        if task.status == status {
            return Ok(None);
        }
        let previous = task.status;
        task.status = status;
        Ok(Some(previous))
    }

    // --- Subtasks ---

    /// Append a blank subtask due with its parent. Returns the subtask ID
    /// (`<task>.<n>`).
    pub fn add_subtask(&mut self, task_id: &str, assignee: &str) -> Result<String, TaskError> {
        let task = self.get_mut(task_id)?;
        let prefix = format!("{}.", task.id);
        let sub_id = next_id(&prefix, task.subtasks.iter().map(|s| s.id.as_str()));
        task.subtasks.push(SubTask {
            id: sub_id.clone(),
            title: String::new(),
            description: String::new(),
            due_date: task.due_date,
            priority: Priority::Medium,
            status: Status::ToDo,
            assignee: assignee.to_string(),
        });
        Ok(sub_id)
    }

    /// Replace a subtask by ID
    pub fn update_subtask(&mut self, task_id: &str, subtask: SubTask) -> Result<(), TaskError> {
        let task = self.get_mut(task_id)?;
        let slot = task
            .subtask_mut(&subtask.id)
            .ok_or_else(|| TaskError::SubtaskNotFound {
                task: task_id.to_string(),
                subtask: subtask.id.clone(),
            })?;
        *slot = subtask;
        Ok(())
    }

    /// Flip a subtask between Completed and To Do. Returns the new status.
    pub fn toggle_subtask(&mut self, task_id: &str, sub_id: &str) -> Result<Status, TaskError> {
        let task = self.get_mut(task_id)?;
        let sub = task
            .subtask_mut(sub_id)
            .ok_or_else(|| TaskError::SubtaskNotFound {
                task: task_id.to_string(),
                subtask: sub_id.to_string(),
            })?;
        sub.status = match sub.status {
            Status::Completed => Status::ToDo,
            _ => Status::Completed,
        };
        Ok(sub.status)
    }

    pub fn remove_subtask(&mut self, task_id: &str, sub_id: &str) -> Result<(), TaskError> {
        let task = self.get_mut(task_id)?;
        let before = task.subtasks.len();
        task.subtasks.retain(|s| s.id != sub_id);
        if task.subtasks.len() == before {
            return Err(TaskError::SubtaskNotFound {
                task: task_id.to_string(),
                subtask: sub_id.to_string(),
            });
        }
        Ok(())
    }

    // --- Comments and attachments ---

    /// Append a comment. Blank text is ignored and yields `None`.
    pub fn add_comment(
        &mut self,
        task_id: &str,
        author: &AppUser,
        text: &str,
        at: DateTime<Local>,
    ) -> Result<Option<String>, TaskError> {
        let task = self.get_mut(task_id)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let prefix = format!("{}-c", task.id);
        let id = next_id(&prefix, task.comments.iter().map(|c| c.id.as_str()));
        task.comments.push(Comment {
            id: id.clone(),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            text: text.to_string(),
            timestamp: at,
        });
        Ok(Some(id))
    }

    /// Record attachment metadata for a file name. Returns the attachment ID.
    pub fn attach(&mut self, task_id: &str, file_name: &str) -> Result<String, TaskError> {
        let task = self.get_mut(task_id)?;
        let prefix = format!("{}-a", task.id);
        let id = next_id(&prefix, task.attachments.iter().map(|a| a.id.as_str()));
        task.attachments.push(Attachment {
            id: id.clone(),
            name: file_name.to_string(),
            url: "#".to_string(),
            kind: attachment_kind(file_name),
            size: ATTACHMENT_SIZE.to_string(),
        });
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
