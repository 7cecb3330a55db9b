//! Error types for task collection operations.

use crate::task::TaskId;

/// Errors produced by [`crate::task_list::TaskList`] operations.
///
/// None of these are fatal: the UI maps `EmptyText` to a visual cue on the
/// input form and logs `NotFound` as an internal warning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Task text cannot be empty")]
    EmptyText,

    #[error("Task not found: {0}")]
    NotFound(TaskId),
}
