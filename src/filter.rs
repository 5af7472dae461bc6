//! Task filters: predicates that derive read-only views of the store.
//!
//! A closed set of variants today; new ones extend the enum without touching
//! the store or the service.

use crate::task::Task;

/// Stateless predicate over a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Holds iff the task priority equals the target exactly.
    Priority(i32),
    /// Holds iff the task description contains the needle, case-insensitively.
    /// The needle is stored lower-cased; an empty needle matches every task.
    Text(String),
}

impl TaskFilter {
    pub fn priority(priority: i32) -> Self {
        TaskFilter::Priority(priority)
    }

    /// Build a text filter, lower-casing the needle once at construction.
    pub fn text(text: impl AsRef<str>) -> Self {
        TaskFilter::Text(text.as_ref().to_lowercase())
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::Priority(priority) => task.priority == *priority,
            TaskFilter::Text(needle) => task.description.to_lowercase().contains(needle),
        }
    }
}
