use chrono::{Datelike, Months, NaiveDate};

use crate::model::focus::RmiFocus;
use crate::model::task::{Status, Task};

/// Cells in the month grid: six weeks of seven days
pub const GRID_CELLS: usize = 42;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// The month currently shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// `month` is 1-based. Returns `None` for an invalid month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| CalendarMonth { first })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        CalendarMonth {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn days(&self) -> u32 {
        self.next().first.pred_opt().map_or(31, |last| last.day())
    }

    /// Blank cells before day 1 (weeks start on Sunday)
    pub fn start_offset(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn previous(&self) -> Self {
        CalendarMonth {
            first: self.first - Months::new(1),
        }
    }

    pub fn next(&self) -> Self {
        CalendarMonth {
            first: self.first + Months::new(1),
        }
    }

    /// e.g. `May 2024`
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.first.month0() as usize], self.year())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Task,
    Subtask,
}

/// A task or subtask placed on its due date
#[derive(Debug, Clone)]
pub struct CalendarItem<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub kind: ItemKind,
    pub status: Status,
    /// Subtasks show their parent's focus
    pub focus: RmiFocus,
    /// The task itself, or the subtask's parent
    pub task: &'a Task,
}

impl CalendarItem<'_> {
    /// Task opened when the item is clicked: subtasks open their parent
    pub fn open_target(&self) -> &str {
        &self.task.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalendarCell<'a> {
    /// Day of month, `None` for padding cells outside the month
    pub day: Option<u32>,
    pub items: Vec<CalendarItem<'a>>,
}

/// Lay `tasks` and their subtasks out on the 42-cell grid of `month`.
/// Within a day, tasks come first (in list order), then subtasks.
pub fn calendar<'a>(tasks: &[&'a Task], month: CalendarMonth) -> Vec<CalendarCell<'a>> {
    let offset = month.start_offset();
    let days = month.days();
    let mut cells: Vec<CalendarCell<'a>> = (0..GRID_CELLS as u32)
        .map(|i| {
            let day = (i + 1).checked_sub(offset).filter(|d| (1..=days).contains(d));
            CalendarCell {
                day,
                items: Vec::new(),
            }
        })
        .collect();

    let cell_index = |date: NaiveDate| -> Option<usize> {
        if date.year() != month.year() || date.month() != month.month() {
            return None;
        }
        Some((offset + date.day() - 1) as usize)
    };

    for &task in tasks {
        if let Some(idx) = cell_index(task.due_date) {
            cells[idx].items.push(CalendarItem {
                id: &task.id,
                title: &task.title,
                kind: ItemKind::Task,
                status: task.status,
                focus: task.focus,
                task,
            });
        }
    }
    for &task in tasks {
        for sub in &task.subtasks {
            if let Some(idx) = cell_index(sub.due_date) {
                cells[idx].items.push(CalendarItem {
                    id: &sub.id,
                    title: &sub.title,
                    kind: ItemKind::Subtask,
                    status: sub.status,
                    focus: task.focus,
                    task,
                });
            }
        }
    }

    cells
}
