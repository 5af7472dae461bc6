//! Outbound presentation contract.
//!
//! The service reports every outcome through this trait and never renders
//! anything itself. Implementations live outside the core: the CLI session,
//! event sinks, or a test recorder.

use crate::error::Result;
use crate::task::Task;

/// Receives outcome notifications and refreshed task views from the service.
///
/// Expected conditions (validation failure, not-found) arrive as dedicated
/// notifications; the `Result` return only carries presentation I/O failures.
pub trait Presenter {
    fn task_added(&mut self, task: &Task) -> Result<()>;

    fn task_removed(&mut self, task: &Task) -> Result<()>;

    /// `position` is 1-based, counted from the head of the store.
    fn task_found(&mut self, task: &Task, position: usize) -> Result<()>;

    fn task_not_found(&mut self, description: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;

    /// Replace the rendered view with `tasks`, head first.
    fn show_tasks(&mut self, tasks: &[Task]) -> Result<()>;
}
