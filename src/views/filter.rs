use crate::model::focus::RmiFocus;
use crate::model::task::Task;
use crate::ops::registry::Registry;

/// Entity selector with an "all" wildcard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntityFilter {
    #[default]
    All,
    Only(String),
}

impl EntityFilter {
    /// A task whose project (or the project's entity) is unknown only
    /// matches `All`.
    pub fn matches(&self, registry: &Registry, task: &Task) -> bool {
        match self {
            EntityFilter::All => true,
            EntityFilter::Only(entity_id) => registry
                .entity_for_task(task)
                .is_some_and(|e| &e.id == entity_id),
        }
    }
}

/// The two independent selectors every task view applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    pub focus: RmiFocus,
    pub entity: EntityFilter,
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter {
            focus: RmiFocus::Maintain,
            entity: EntityFilter::All,
        }
    }
}

/// Tasks matching the filter, in store order
pub fn filter_tasks<'a>(tasks: &'a [Task], registry: &Registry, filter: &TaskFilter) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.focus == filter.focus && filter.entity.matches(registry, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn focus_and_entity_both_apply() {
        let mut tasks = seed::tasks();
        tasks[0].focus = RmiFocus::Maintain; // t1 lives under p2 → c2
        let registry = seed::registry();

        let all = TaskFilter::default();
        assert_eq!(ids(&filter_tasks(&tasks, &registry, &all)), vec!["t1", "t2"]);

        let c1 = TaskFilter {
            entity: EntityFilter::Only("c1".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &registry, &c1)), vec!["t2"]);

        let react = TaskFilter {
            focus: RmiFocus::React,
            entity: EntityFilter::All,
        };
        assert!(filter_tasks(&tasks, &registry, &react).is_empty());
    }

    #[test]
    fn unknown_project_only_matches_all() {
        let mut tasks = seed::tasks();
        tasks[1].project_id = "p404".into();
        let registry = seed::registry();
        let task = &tasks[1];
        assert!(EntityFilter::All.matches(&registry, task));
        assert!(!EntityFilter::Only("c1".into()).matches(&registry, task));
        assert!(!EntityFilter::Only("c2".into()).matches(&registry, task));
    }
}
