//! Projections of the canonical task list. Each is a pure function of the
//! task list, the registry and the active filter; none holds state.

pub mod calendar;
pub mod filter;
pub mod kanban;
pub mod table;

pub use filter::{EntityFilter, TaskFilter, filter_tasks};
