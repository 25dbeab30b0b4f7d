use crate::model::entity::{Entity, Project};
use crate::model::task::Task;
use crate::ops::registry::Registry;
use crate::ops::task_ops::compute_progress;

use super::filter::{TaskFilter, filter_tasks};

#[derive(Debug, Clone)]
pub struct TableRow<'a> {
    pub task: &'a Task,
    pub project: Option<&'a Project>,
    pub entity: Option<&'a Entity>,
    pub progress: u8,
}

/// Flat rows for the filtered tasks, in store order (no sorting)
pub fn table<'a>(tasks: &'a [Task], registry: &'a Registry, filter: &TaskFilter) -> Vec<TableRow<'a>> {
    filter_tasks(tasks, registry, filter)
        .into_iter()
        .map(|task| TableRow {
            task,
            project: registry.project(&task.project_id),
            entity: registry.entity_for_task(task),
            progress: compute_progress(task),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::focus::RmiFocus;
    use crate::model::task::Status;
    use crate::seed;

    #[test]
    fn rows_keep_insertion_order_and_resolve_entity() {
        let mut tasks = seed::tasks();
        for t in &mut tasks {
            t.focus = RmiFocus::Improvise;
        }
        tasks[0].status = Status::Completed;
        let registry = seed::registry();
        let filter = TaskFilter {
            focus: RmiFocus::Improvise,
            ..Default::default()
        };
        let rows = table(&tasks, &registry, &filter);
        let shape: Vec<_> = rows
            .iter()
            .map(|r| (r.task.id.as_str(), r.entity.map(|e| e.id.as_str()), r.progress))
            .collect();
        assert_eq!(
            shape,
            vec![("t1", Some("c2"), 100), ("t2", Some("c1"), 0), ("t3", Some("c1"), 0)]
        );
    }
}
