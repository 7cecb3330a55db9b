//! Schedulist - a terminal task scheduler
//!
//! A single-window to-do list: tasks carry a label, a due timestamp and a
//! completion flag, can be added with terse `DDMMYY`/`HHMM` due tokens,
//! toggled, deleted, and reordered by dragging them with the mouse.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`task`] / [`task_list`] - Task model and the ordered collection
//! * [`utils`] - Due date token parsing and formatting
//! * [`ui`] - Terminal user interface components and the drag controller
//! * [`logger`] - `log` + `fern` wiring

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types for task operations
pub mod error;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup feeding the logs dialog and an optional file
pub mod logger;

pub mod task;
pub mod task_list;

/// Color palettes and named styles
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use error::TaskError;
pub use task::{Task, TaskId};
pub use task_list::{TaskList, TogglePolicy};
