//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

use std::time::Duration;

// Window text
pub const APP_TITLE: &str = "Task Scheduler";
pub const FORM_TITLE: &str = "Add New Task";
pub const TASKS_TITLE: &str = "Tasks";
pub const PLACEHOLDER_TASK: &str = "What needs to be done?";
pub const PLACEHOLDER_DATE: &str = "DDMMYY";
pub const PLACEHOLDER_TIME: &str = "HHMM";
pub const BUTTON_ADD_TASK: &str = "Add Task";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Type one below and press Enter.";
pub const DROP_ABOVE_MARKER: &str = " ▲ drop here ";
pub const DROP_BELOW_MARKER: &str = " ▼ drop here ";

// Status Messages
pub const SUCCESS_TASK_ADDED: &str = "✅ Task added";
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASK_REOPENED: &str = "↺ Task reopened";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_TASK_MOVED: &str = "✅ Task moved";
pub const ERROR_TASK_TEXT_EMPTY: &str = "❌ Task text cannot be empty";
pub const INFO_DRAG_CANCELLED: &str = "Drag cancelled";
pub const STATUS_HINT: &str = "Tab: form • Space: toggle • d: delete • J/K: move • ?: help • q: quit";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Due date defaults
pub const DEFAULT_DUE_FORMAT: &str = "%d/%m/%y %H:%M";
pub const DEFAULT_HEADER_DATE_FORMAT: &str = "%A, %d %B %Y";
/// Offset added to the two-digit year of a `DDMMYY` token
pub const DUE_YEAR_BASE: i32 = 2000;

// Input form limits
pub const DATE_TOKEN_LEN: usize = 6;
pub const TIME_TOKEN_LEN: usize = 4;

// Timing
/// How long the empty-text error cue stays on the task field
pub const INPUT_ERROR_FLASH: Duration = Duration::from_millis(300);
/// How long a status bar message stays visible
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

// UI Layout Constants
/// Rows taken by one task card (borders + label line + due line)
pub const ITEM_HEIGHT: u16 = 4;
/// Rows taken by the header (title, date, spacer)
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the input panel
pub const FORM_HEIGHT: u16 = 11;
/// Width of the clickable checkbox region at the start of a card's inner area
pub const CHECKBOX_WIDTH: u16 = 4;
/// Width of the clickable delete region at the end of a card's inner area
pub const DELETE_WIDTH: u16 = 3;

// Drag thresholds
pub const DRAG_THRESHOLD_MIN: u16 = 1;
pub const DRAG_THRESHOLD_MAX: u16 = 10;
pub const DRAG_THRESHOLD_DEFAULT: u16 = 2;

// Event loop tick rate bounds (milliseconds)
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const TICK_RATE_DEFAULT_MS: u64 = 50;

/// Maximum number of lines kept by the in-memory log buffer
pub const MAX_LOG_LINES: usize = 1000;
