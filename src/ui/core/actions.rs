use crate::task::TaskId;

/// Which part of the window receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    List,
}

/// Messages emitted by components and handled by the main window.
///
/// Components never touch the task collection themselves; they describe what
/// the user asked for and [`crate::ui::app_component::AppComponent`] applies it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    SelectTask(TaskId),
    SetFocus(Focus),
    ScrollUp,
    ScrollDown,

    // Task operations
    AddTask {
        text: String,
        date: String,
        time: String,
    },
    ToggleTask(TaskId),
    DeleteTask(TaskId),
    MoveTask {
        id: TaskId,
        insert_before: usize,
    },
    MoveTaskUp(TaskId),
    MoveTaskDown(TaskId),

    // Drag feedback
    DragStarted(TaskId),
    DragCancelled,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIcons,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
