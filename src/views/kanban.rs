use crate::model::task::{Status, Task};
use crate::ops::registry::Registry;

use super::filter::{TaskFilter, filter_tasks};

/// One status bucket of the board
#[derive(Debug, Clone)]
pub struct KanbanColumn<'a> {
    pub status: Status,
    pub cards: Vec<&'a Task>,
}

/// Partition the filtered tasks into the three status columns
pub fn kanban<'a>(tasks: &'a [Task], registry: &Registry, filter: &TaskFilter) -> Vec<KanbanColumn<'a>> {
    let filtered = filter_tasks(tasks, registry, filter);
    Status::ALL
        .into_iter()
        .map(|status| KanbanColumn {
            status,
            cards: filtered.iter().copied().filter(|t| t.status == status).collect(),
        })
        .collect()
}

/// What dropping a card onto a column does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card already sits in the target column
    Unchanged,
    Moved { from: Status, to: Status },
}

pub fn plan_drop(task: &Task, target: Status) -> DropOutcome {
    if task.status == target {
        DropOutcome::Unchanged
    } else {
        DropOutcome::Moved {
            from: task.status,
            to: target,
        }
    }
}

/// Notification text emitted when a card changes column
pub fn drop_message(title: &str, status: Status) -> String {
    format!("Task \"{}\" updated to {}", title, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::focus::RmiFocus;
    use crate::seed;

    #[test]
    fn columns_partition_by_status() {
        let mut tasks = seed::tasks();
        for t in &mut tasks {
            t.focus = RmiFocus::React;
        }
        tasks[2].status = Status::Completed;
        let registry = seed::registry();
        let filter = TaskFilter {
            focus: RmiFocus::React,
            ..Default::default()
        };
        let board = kanban(&tasks, &registry, &filter);
        let shape: Vec<_> = board
            .iter()
            .map(|c| (c.status, c.cards.iter().map(|t| t.id.as_str()).collect::<Vec<_>>()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Status::ToDo, vec!["t2"]),
                (Status::InProgress, vec!["t1"]),
                (Status::Completed, vec!["t3"]),
            ]
        );
    }

    #[test]
    fn drop_onto_same_column_is_unchanged() {
        let tasks = seed::tasks();
        assert_eq!(plan_drop(&tasks[0], Status::InProgress), DropOutcome::Unchanged);
        assert_eq!(
            plan_drop(&tasks[0], Status::Completed),
            DropOutcome::Moved {
                from: Status::InProgress,
                to: Status::Completed
            }
        );
    }

    #[test]
    fn drop_message_names_task_and_status() {
        assert_eq!(
            drop_message("Weekly Audit", Status::InProgress),
            "Task \"Weekly Audit\" updated to In Progress"
        );
    }
}
