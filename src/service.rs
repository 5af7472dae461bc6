//! Task service: validates input, orchestrates the store, and reports every
//! outcome through the presentation contract.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::filter::TaskFilter;
use crate::presenter::Presenter;
use crate::task::{Task, TaskList};

/// Derived counts over the store.
///
/// `by_priority` is pre-seeded with keys {1, 2, 3} and grows to include any
/// other priority value actually seen; unseen out-of-range priorities are
/// never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub by_priority: BTreeMap<i32, usize>,
}

/// Orchestrates the task store and a presenter for its lifetime. Stateless
/// between calls beyond the store contents.
pub struct TaskService<P: Presenter> {
    tasks: TaskList,
    presenter: P,
}

impl<P: Presenter> TaskService<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            tasks: TaskList::new(),
            presenter,
        }
    }

    /// Read access to the underlying store.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Validate, trim, and insert a task; prepend by default, append when
    /// `at_end`. Reports the confirmed record and refreshes the full view.
    /// Returns `Ok(false)` when validation fails or the post-insert lookup
    /// cannot confirm the record; neither case reports task-added.
    pub fn add_task(&mut self, description: &str, priority: i32, at_end: bool) -> Result<bool> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            self.presenter.error("description cannot be empty")?;
            return Ok(false);
        }

        if at_end {
            self.tasks.add_at_end(trimmed, priority);
        } else {
            self.tasks.add(trimmed, priority);
        }

        // Confirm the insert landed before reporting it.
        match self.tasks.find(trimmed).cloned() {
            Some(task) => {
                self.presenter.task_added(&task)?;
                self.refresh_view()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the task matching `description`.
    ///
    /// Lookup is case-insensitive while removal is exact on the literal
    /// argument, so a task found under different casing still reports
    /// not-found. Long-standing behavior, kept deliberately and pinned by a
    /// test.
    pub fn remove_task(&mut self, description: &str) -> Result<bool> {
        if let Some(task) = self.tasks.find(description).cloned() {
            if self.tasks.remove(description) {
                self.presenter.task_removed(&task)?;
                self.refresh_view()?;
                return Ok(true);
            }
        }
        self.presenter.task_not_found(description)?;
        Ok(false)
    }

    /// Report the first case-insensitive match and its 1-based position,
    /// or not-found.
    pub fn find_task(&mut self, description: &str) -> Result<()> {
        match self.tasks.find_indexed(description) {
            Some((index, task)) => self.presenter.task_found(task, index + 1),
            None => self.presenter.task_not_found(description),
        }
    }

    /// Push the priority-filtered view, then fire a task-added notification
    /// for a transient placeholder describing the filter action. The
    /// placeholder is never stored; the notification is the whole effect.
    pub fn filter_by_priority(&mut self, priority: i32) -> Result<()> {
        let filtered = self.tasks.apply_filter(&TaskFilter::priority(priority));
        self.presenter.show_tasks(&filtered)?;

        let placeholder = Task::new(format!("Filtered by priority {priority}"), priority);
        self.presenter.task_added(&placeholder)
    }

    /// Push the text-filtered view. No synthetic notification.
    pub fn filter_by_text(&mut self, text: &str) -> Result<()> {
        let filtered = self.tasks.apply_filter(&TaskFilter::text(text));
        self.presenter.show_tasks(&filtered)
    }

    /// Push the full unfiltered view.
    pub fn show_all(&mut self) -> Result<()> {
        let tasks = self.tasks.all();
        self.presenter.show_tasks(&tasks)
    }

    /// Total count plus per-priority counts; see [`TaskStats`].
    pub fn statistics(&self) -> TaskStats {
        let total = self.tasks.count();
        let mut by_priority: BTreeMap<i32, usize> = [(1, 0), (2, 0), (3, 0)].into_iter().collect();
        for task in self.tasks.iter() {
            *by_priority.entry(task.priority).or_insert(0) += 1;
        }
        TaskStats { total, by_priority }
    }

    fn refresh_view(&mut self) -> Result<()> {
        let tasks = self.tasks.all();
        self.presenter.show_tasks(&tasks)
    }
}
