//! Core UI functionality for the Schedulist application.
//!
//! - [`actions`] - Messages components emit and the main window applies
//! - [`component`] - Base component trait
//! - [`drag`] - Drag-and-drop gesture state machine and the midpoint test
//! - [`event_handler`] - Terminal event polling and ticks
//!
//! Components turn input into [`Action`]s. The app component is the only
//! place that mutates the task collection, after which it pushes fresh data
//! back down to the components for the next render.

pub mod actions;
pub mod component;
pub mod drag;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use drag::{DragController, DragOutcome, ItemBounds};
pub use event_handler::{EventHandler, EventType};
