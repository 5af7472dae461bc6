//! Task records and the ordered in-memory store.
//!
//! `TaskList` keeps tasks as a single owned forward chain: `add` prepends a
//! new head, `add_at_end` appends a new tail. Lookup identity is the task
//! description; duplicates may coexist, and removal and lookup act on the
//! first match from the head.

use std::collections::{vec_deque, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::TaskFilter;

/// A stored description + priority pair. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub priority: i32,
}

impl Task {
    pub fn new(description: impl Into<String>, priority: i32) -> Self {
        Self {
            description: description.into(),
            priority,
        }
    }

    /// Display label for the priority. Values outside the conventional
    /// {1, 2, 3} range are accepted and labeled generically.
    pub fn priority_label(&self) -> String {
        match self.priority {
            1 => "high".to_string(),
            2 => "medium".to_string(),
            3 => "low".to_string(),
            other => format!("priority {other}"),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.priority, self.description)
    }
}

/// The owning container of all tasks, in insertion-modifiable order.
///
/// Not thread-safe; the design assumes a single owning caller. Shared use
/// across threads requires external serialization.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: VecDeque<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task as the new head. O(1).
    pub fn add(&mut self, description: impl Into<String>, priority: i32) {
        self.tasks.push_front(Task::new(description, priority));
    }

    /// Append a task after the current tail; becomes the head when empty.
    pub fn add_at_end(&mut self, description: impl Into<String>, priority: i32) {
        self.tasks.push_back(Task::new(description, priority));
    }

    /// Unlink the first task whose description exactly equals `description`,
    /// searching from the head. Returns false when no task matches.
    pub fn remove(&mut self, description: &str) -> bool {
        match self
            .tasks
            .iter()
            .position(|task| task.description == description)
        {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// First task whose description matches case-insensitively, from the head.
    pub fn find(&self, description: &str) -> Option<&Task> {
        self.find_indexed(description).map(|(_, task)| task)
    }

    /// Like [`find`](Self::find), but also yields the 0-based position of the
    /// matched task so callers can report where the exact record sits.
    pub fn find_indexed(&self, description: &str) -> Option<(usize, &Task)> {
        let needle = description.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .find(|(_, task)| task.description.to_lowercase() == needle)
    }

    /// Forward cursor over the current chain.
    ///
    /// The cursor borrows the list, so any structural mutation while it is
    /// alive is rejected at compile time. Callers that need a view outliving
    /// mutation take a snapshot via [`all`](Self::all).
    pub fn iter(&self) -> TaskIter<'_> {
        TaskIter {
            inner: self.tasks.iter(),
        }
    }

    /// Materialized snapshot of every task, head to tail.
    pub fn all(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }

    /// Tasks for which the filter holds, preserving original order.
    pub fn apply_filter(&self, filter: &TaskFilter) -> Vec<Task> {
        self.iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    /// Number of tasks, counted by traversal.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = TaskIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only, finite cursor over a [`TaskList`].
#[derive(Debug, Clone)]
pub struct TaskIter<'a> {
    inner: vec_deque::Iter<'a, Task>,
}

impl<'a> Iterator for TaskIter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
