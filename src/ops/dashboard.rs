use chrono::NaiveDate;

use super::idea_ops::rank;
use super::registry::Registry;
use crate::model::entity::Entity;
use crate::model::focus::RmiFocus;
use crate::model::idea::Idea;
use crate::model::task::{Status, Task};

/// Number of ideas surfaced on the overview
pub const TOP_IDEAS: usize = 4;

/// Share of all tasks in one focus category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusShare {
    pub focus: RmiFocus,
    pub count: usize,
    /// `round(100 × count / total)`, 0 when there are no tasks
    pub percentage: u8,
}

#[derive(Debug, Clone)]
pub struct EntityStats<'a> {
    pub entity: &'a Entity,
    pub tasks: usize,
    pub completed: usize,
}

/// The overview screen: focus balance, what needs attention, per-entity
/// totals and the best ideas.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub focus_mix: Vec<FocusShare>,
    /// Open tasks due before today, oldest first
    pub overdue: Vec<&'a Task>,
    /// Open tasks due today
    pub due_today: Vec<&'a Task>,
    pub entities: Vec<EntityStats<'a>>,
    pub top_ideas: Vec<&'a Idea>,
}

pub fn build<'a>(
    tasks: &'a [Task],
    ideas: &'a [Idea],
    registry: &'a Registry,
    today: NaiveDate,
) -> Dashboard<'a> {
    let total = tasks.len().max(1);
    let focus_mix = RmiFocus::ALL
        .into_iter()
        .map(|focus| {
            let count = tasks.iter().filter(|t| t.focus == focus).count();
            FocusShare {
                focus,
                count,
                percentage: ((200 * count + total) / (2 * total)) as u8,
            }
        })
        .collect();

    let open = || tasks.iter().filter(|t| t.status != Status::Completed);
    let mut overdue: Vec<&Task> = open().filter(|t| t.due_date < today).collect();
    overdue.sort_by_key(|t| t.due_date);
    let due_today = open().filter(|t| t.due_date == today).collect();

    let entities = registry
        .entities
        .iter()
        .map(|entity| {
            let owned: Vec<&Task> = tasks
                .iter()
                .filter(|t| {
                    registry
                        .entity_for_task(t)
                        .is_some_and(|e| e.id == entity.id)
                })
                .collect();
            EntityStats {
                entity,
                tasks: owned.len(),
                completed: owned.iter().filter(|t| t.status == Status::Completed).count(),
            }
        })
        .collect();

    let mut top_ideas = rank(ideas);
    top_ideas.truncate(TOP_IDEAS);

    Dashboard {
        focus_mix,
        overdue,
        due_today,
        entities,
        top_ideas,
    }
}
