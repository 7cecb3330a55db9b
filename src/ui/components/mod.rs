//! Reusable UI components

pub mod dialog_component;
pub mod input_form_component;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use input_form_component::{FormField, InputFormComponent};
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
pub use task_list_item_component::{CardVisual, DropMarker, TaskCard};
