use chrono::{DateTime, Local, NaiveDate};

/// Source of "now" for timestamps, due-date comparisons and age labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    /// Frozen at one instant
    Fixed(DateTime<Local>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Local> {
        match self {
            Clock::System => Local::now(),
            Clock::Fixed(at) => *at,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
