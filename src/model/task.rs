use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::focus::RmiFocus;

/// Assignee sentinel for work nobody has picked up
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// Workflow status shared by tasks and subtasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl Status {
    /// Kanban column order
    pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Completed];
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::ToDo => write!(f, "To Do"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecurringInterval {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl std::fmt::Display for RecurringInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurringInterval::None => write!(f, "None"),
            RecurringInterval::Daily => write!(f, "Daily"),
            RecurringInterval::Weekly => write!(f, "Weekly"),
            RecurringInterval::Monthly => write!(f, "Monthly"),
            RecurringInterval::Quarterly => write!(f, "Quarterly"),
        }
    }
}

/// A work item owned by one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Status,
    pub assignee: String,
}

/// An append-only note on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// File metadata only; no bytes are held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    /// Placeholder reference
    pub url: String,
    /// Upper-cased file extension, or `FILE`
    pub kind: String,
    /// Display size
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Status,
    pub focus: RmiFocus,
    /// Team member name. Not an owned reference: renaming or removing a
    /// member leaves this value as it was.
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sop_id: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_interval: RecurringInterval,
}

impl Task {
    /// Find a subtask by ID
    pub fn subtask(&self, sub_id: &str) -> Option<&SubTask> {
        self.subtasks.iter().find(|s| s.id == sub_id)
    }

    pub fn subtask_mut(&mut self, sub_id: &str) -> Option<&mut SubTask> {
        self.subtasks.iter_mut().find(|s| s.id == sub_id)
    }
}
