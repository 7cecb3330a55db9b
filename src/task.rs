//! Task model shown in the list.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::utils::datetime::format_due;

/// Stable identity of a task; events reference tasks by id, never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub due_at: NaiveDateTime,
    pub completed: bool,
}

impl Task {
    /// Create an active task. Callers are expected to pass trimmed, non-empty text.
    pub fn new(text: impl Into<String>, due_at: NaiveDateTime) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            due_at,
            completed: false,
        }
    }

    /// Secondary line shown under the label, e.g. `Due: 15/10/26 14:30`
    pub fn due_label(&self, due_format: &str) -> String {
        format!("Due: {}", format_due(self.due_at, due_format))
    }
}
