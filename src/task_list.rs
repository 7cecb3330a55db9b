//! Ordered task collection owned by the main window.
//!
//! Every mutation of the list goes through [`TaskList`]. The order of the
//! backing vector is the order the tasks are rendered in, top to bottom.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::TaskError;
use crate::task::{Task, TaskId};

/// What happens to a task's position when its completion flag changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TogglePolicy {
    /// Completed tasks move to the tail, reopened tasks move to the head.
    #[default]
    SinkCompleted,
    /// Toggling never changes the order.
    KeepOrder,
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Insert a new active task at the head of the list.
    pub fn add(&mut self, text: &str, due_at: NaiveDateTime) -> Result<TaskId, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let task = Task::new(text, due_at);
        let id = task.id;
        self.tasks.insert(0, task);
        Ok(id)
    }

    /// Flip the completion flag of a task and return its new value.
    pub fn toggle(&mut self, id: TaskId, policy: TogglePolicy) -> Result<bool, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound(id))?;
        let completed = !self.tasks[index].completed;
        self.tasks[index].completed = completed;

        if policy == TogglePolicy::SinkCompleted {
            let task = self.tasks.remove(index);
            if completed {
                self.tasks.push(task);
            } else {
                self.tasks.insert(0, task);
            }
        }

        Ok(completed)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Move the task at `from` so it sits before the task currently at
    /// `insert_before`; `insert_before == len()` moves it to the tail.
    ///
    /// Returns the task's final index, or `None` if nothing moved.
    pub fn move_before(&mut self, from: usize, insert_before: usize) -> Option<usize> {
        if from >= self.tasks.len() {
            return None;
        }

        let mut target = insert_before.min(self.tasks.len());
        if target > from {
            // Removing the task first shifts everything after it up by one
            target -= 1;
        }
        if target == from {
            return None;
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(target, task);
        Some(target)
    }

    /// Swap a task with the one above it.
    pub fn move_up(&mut self, id: TaskId) -> Result<Option<usize>, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound(id))?;
        if index == 0 {
            return Ok(None);
        }
        Ok(self.move_before(index, index - 1))
    }

    /// Swap a task with the one below it.
    pub fn move_down(&mut self, id: TaskId) -> Result<Option<usize>, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound(id))?;
        if index + 1 >= self.tasks.len() {
            return Ok(None);
        }
        Ok(self.move_before(index, index + 2))
    }
}
