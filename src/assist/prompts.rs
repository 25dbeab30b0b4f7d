use serde::{Deserialize, Serialize};

use super::{AssistError, GenerationOptions, ResponseFormat, TextGenerator};
use crate::model::entity::{Entity, Project};
use crate::model::task::{Priority, Task};
use crate::ops::task_ops::TaskDraft;

/// Shown when the provider answers with nothing
pub const SUMMARY_EMPTY: &str = "No insights available at this time.";
/// Shown when the provider fails
pub const SUMMARY_ERROR: &str = "Error fetching AI analysis. Please check your assistant configuration.";

/// Number of tasks requested from the suggestion prompt
const SUGGESTION_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Executive summary
// ---------------------------------------------------------------------------

pub fn summary_prompt(entity: &Entity, projects: &[&Project], tasks: &[&Task]) -> Result<String, serde_json::Error> {
    Ok(format!(
        "Based on the following company data, provide a brief executive summary and 3 key \
         recommendations for growth and risk mitigation:\n\
         Company: {}\n\
         Projects: {}\n\
         Tasks: {}\n",
        entity.name,
        serde_json::to_string(projects)?,
        serde_json::to_string(tasks)?,
    ))
}

/// Free-text summary of an entity's projects and tasks. Never fails: provider
/// errors are logged and replaced with a fixed message.
pub fn executive_summary(
    generator: &dyn TextGenerator,
    entity: &Entity,
    projects: &[&Project],
    tasks: &[&Task],
) -> String {
    let prompt = match summary_prompt(entity, projects, tasks) {
        Ok(p) => p,
        Err(e) => {
            log::error!("could not serialize context for {}: {}", entity.id, e);
            return SUMMARY_ERROR.to_string();
        }
    };
    let options = GenerationOptions {
        temperature: Some(0.7),
        top_p: Some(0.8),
        format: ResponseFormat::Text,
    };
    match generator.generate(&prompt, &options) {
        Ok(text) if text.trim().is_empty() => SUMMARY_EMPTY.to_string(),
        Ok(text) => text,
        Err(e) => {
            log::error!("executive summary for {} failed: {}", entity.id, e);
            SUMMARY_ERROR.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// SOP drafting
// ---------------------------------------------------------------------------

pub fn sop_prompt(title: &str, description: &str) -> String {
    format!(
        "Write a professional, structured Standard Operating Procedure (SOP) for \"{}\". \
         Description: \"{}\". Break it down into Purpose, Scope, and Step-by-Step Instructions. \
         Use clear, bulleted points.",
        title, description
    )
}

/// Draft SOP content from a title and description.
pub fn draft_sop(generator: &dyn TextGenerator, title: &str, description: &str) -> Result<String, AssistError> {
    if title.trim().is_empty() {
        return Err(AssistError::MissingTitle);
    }
    let options = GenerationOptions {
        temperature: Some(0.5),
        ..Default::default()
    };
    generator
        .generate(&sop_prompt(title, description), &options)
        .map_err(|e| {
            log::error!("SOP draft for {:?} failed: {}", title, e);
            AssistError::DraftFailed
        })
}

// ---------------------------------------------------------------------------
// Task suggestions
// ---------------------------------------------------------------------------

/// One suggested task as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSuggestion {
    pub title: String,
    pub description: String,
    pub priority: String,
}

impl TaskSuggestion {
    /// Priority named by the suggestion; anything unrecognised is Medium
    pub fn priority(&self) -> Priority {
        match self.priority.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// A task draft filed under `project_id`
    pub fn to_draft(&self, project_id: &str) -> TaskDraft {
        TaskDraft {
            project_id: Some(project_id.to_string()),
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            priority: Some(self.priority()),
            ..Default::default()
        }
    }
}

pub fn suggestions_prompt(project: &Project) -> String {
    format!(
        "Act as a senior project manager. Suggest {} critical tasks for a project named \"{}\" \
         described as \"{}\". Return only a JSON array of objects with string fields \
         \"title\", \"description\" and \"priority\".",
        SUGGESTION_COUNT, project.name, project.description
    )
}

/// Parse the provider's JSON array. Blank output is an empty list.
pub fn parse_suggestions(text: &str) -> Result<Vec<TaskSuggestion>, serde_json::Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text)
}

/// Suggested tasks for a project. Provider or parse failures are logged and
/// yield an empty list; nothing is retried.
pub fn suggest_tasks(generator: &dyn TextGenerator, project: &Project) -> Vec<TaskSuggestion> {
    let options = GenerationOptions {
        format: ResponseFormat::TaskList,
        ..Default::default()
    };
    let text = match generator.generate(&suggestions_prompt(project), &options) {
        Ok(t) => t,
        Err(e) => {
            log::error!("task suggestions for {} failed: {}", project.id, e);
            return Vec::new();
        }
    };
    parse_suggestions(&text).unwrap_or_else(|e| {
        log::error!("failed to parse task suggestions for {}: {}", project.id, e);
        Vec::new()
    })
}
