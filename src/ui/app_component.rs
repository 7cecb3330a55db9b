use std::time::Instant;

use crate::config::Config;
use crate::constants::{
    APP_TITLE, ERROR_TASK_TEXT_EMPTY, INFO_DRAG_CANCELLED, STATUS_MESSAGE_TTL, SUCCESS_TASK_ADDED,
    SUCCESS_TASK_COMPLETED, SUCCESS_TASK_DELETED, SUCCESS_TASK_MOVED, SUCCESS_TASK_REOPENED,
};
use crate::error::TaskError;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::task::TaskId;
use crate::task_list::TaskList;
use crate::theme::{StyleKind, Theme};
use crate::ui::components::{DialogComponent, InputFormComponent, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::{format_header_date, resolve_due};
use chrono::{Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tasks: TaskList,
    pub focus: Focus,
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error,
            expires_at: Instant::now() + STATUS_MESSAGE_TTL,
        });
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_messages(&mut self, now: Instant) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|message| now >= message.expires_at)
        {
            self.status_message = None;
        }
    }
}

/// The main window: owns the task collection and composes every component.
pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    form: InputFormComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    config: Config,
    theme: Theme,
    icons: IconService,
    clock: fn() -> NaiveDateTime,

    should_quit: bool,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let theme = Theme::new(config.display.theme);
        let icons = IconService::new(config.display.icons);

        let mut task_list = TaskListComponent::new();
        task_list.configure(theme, icons.clone(), config.display.clone(), config.ui.drag_threshold);

        let mut form = InputFormComponent::new();
        form.configure(theme, icons.clone());

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger);
        dialog.set_theme(theme);

        let mut app = Self {
            task_list,
            form,
            dialog,
            state: AppState::default(),
            config,
            theme,
            icons,
            clock: local_now,
            should_quit: false,
        };
        app.set_focus(Focus::Form);
        app
    }

    /// Replace the wall clock used to resolve due dates
    pub fn set_clock(&mut self, clock: fn() -> NaiveDateTime) {
        self.clock = clock;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tasks(&self) -> &TaskList {
        &self.state.tasks
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    pub fn status_message(&self) -> Option<&str> {
        self.state.status_message.as_ref().map(|message| message.text.as_str())
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn form(&self) -> &InputFormComponent {
        &self.form
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.task_list.update_data(self.state.tasks.as_slice().to_vec());
    }

    fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
        self.task_list.focused = focus == Focus::List;
        self.form.focused = focus == Focus::Form;
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('c') => Action::CycleIcons,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::debug!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Esc && self.task_list.drag.is_dragging() {
            return self.task_list.cancel_drag();
        }

        match self.state.focus {
            Focus::Form => self.form.handle_key_events(key),
            Focus::List => {
                let task_list_action = self.task_list.handle_key_events(key);
                if !matches!(task_list_action, Action::None) {
                    task_list_action
                } else {
                    self.handle_global_key(key)
                }
            }
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_mouse_events(mouse);
        }

        // A press on the input panel belongs to the form; everything else,
        // including the rest of a drag that wandered off the list, goes to the list
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && !self.task_list.contains(mouse.column, mouse.row)
        {
            return self.form.handle_mouse_events(mouse);
        }
        self.task_list.handle_mouse_events(mouse)
    }

    /// Feed one terminal event through the component tree
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::FocusLost => {
                log::debug!("Terminal lost focus");
                self.task_list.cancel_drag()
            }
            EventType::Tick => {
                let now = Instant::now();
                self.form.tick(now);
                self.state.expire_messages(now);
                Action::None
            }
            EventType::Resize(width, height) => {
                let layout = LayoutManager::main_layout(Rect::new(0, 0, width, height));
                self.task_list.set_area(layout.list);
                Action::None
            }
            EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action)
    }

    /// Handle app-level actions; the only place the task collection changes
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::SetFocus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::AddTask { text, date, time } => {
                let now = (self.clock)();
                let due_at = resolve_due(&date, &time, now);
                match self.state.tasks.add(&text, due_at) {
                    Ok(id) => {
                        log::info!("Task: Added '{}' due {}", text.trim(), due_at);
                        self.form.clear();
                        self.set_focus(Focus::Form);
                        self.sync_component_data();
                        self.task_list.select(id);
                        self.state.set_status(SUCCESS_TASK_ADDED, false);
                    }
                    Err(TaskError::EmptyText) => {
                        log::debug!("Task: Rejected empty task text");
                        self.form.flash_error();
                        self.set_focus(Focus::Form);
                        self.state.set_status(ERROR_TASK_TEXT_EMPTY, true);
                    }
                    Err(e) => log::warn!("Task: Failed to add task: {}", e),
                }
                Action::None
            }
            Action::ToggleTask(id) => {
                match self.state.tasks.toggle(id, self.config.behavior.toggle_policy) {
                    Ok(completed) => {
                        log::info!("Task: {} marked {}", id, if completed { "done" } else { "active" });
                        let message = if completed {
                            SUCCESS_TASK_COMPLETED
                        } else {
                            SUCCESS_TASK_REOPENED
                        };
                        self.state.set_status(message, false);
                        self.sync_component_data();
                    }
                    Err(e) => log::warn!("Task: Toggle ignored: {}", e),
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                match self.state.tasks.remove(id) {
                    Ok(task) => {
                        log::info!("Task: Deleted '{}'", task.text);
                        self.state.set_status(SUCCESS_TASK_DELETED, false);
                        self.sync_component_data();
                    }
                    Err(e) => log::warn!("Task: Delete ignored: {}", e),
                }
                Action::None
            }
            Action::MoveTask { id, insert_before } => {
                let Some(from) = self.state.tasks.index_of(id) else {
                    log::warn!("Task: Drop ignored: {}", TaskError::NotFound(id));
                    self.sync_component_data();
                    return Action::None;
                };
                match self.state.tasks.move_before(from, insert_before) {
                    Some(to) => {
                        log::info!("Task: Moved {} from {} to {}", id, from, to);
                        self.state.set_status(SUCCESS_TASK_MOVED, false);
                    }
                    None => log::debug!("Task: Dropped {} at its own position", id),
                }
                self.finish_move(id);
                Action::None
            }
            Action::MoveTaskUp(id) => {
                self.apply_step_move(id, TaskList::move_up);
                Action::None
            }
            Action::MoveTaskDown(id) => {
                self.apply_step_move(id, TaskList::move_down);
                Action::None
            }
            Action::DragStarted(id) => {
                log::debug!("Drag: Started on {}", id);
                Action::None
            }
            Action::DragCancelled => {
                log::debug!("Drag: Cancelled, order unchanged");
                self.state.set_status(INFO_DRAG_CANCELLED, false);
                Action::None
            }
            Action::CycleIcons => {
                self.icons.cycle_icon_theme();
                log::debug!("Icons: Switched to {:?}", self.icons.theme());
                self.task_list.set_icons(self.icons.clone());
                self.form.set_icons(self.icons.clone());
                Action::None
            }
            _ => Action::None,
        }
    }

    fn apply_step_move(&mut self, id: TaskId, step: fn(&mut TaskList, TaskId) -> Result<Option<usize>, TaskError>) {
        match step(&mut self.state.tasks, id) {
            Ok(Some(to)) => {
                log::info!("Task: Moved {} to {}", id, to);
                self.state.set_status(SUCCESS_TASK_MOVED, false);
                self.finish_move(id);
            }
            Ok(None) => log::debug!("Task: {} is already at the edge", id),
            Err(e) => log::warn!("Task: Move ignored: {}", e),
        }
    }

    fn finish_move(&mut self, id: TaskId) {
        self.sync_component_data();
        self.task_list.select(id);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let today = format_header_date((self.clock)().date(), &self.config.display.header_date_format);
        let lines = vec![
            Line::from(Span::styled(APP_TITLE, self.theme.style(StyleKind::Title))),
            Line::from(Span::styled(
                format!("Today: {}", today),
                self.theme.style(StyleKind::Subtitle),
            )),
        ];
        f.render_widget(Paragraph::new(lines).style(self.theme.style(StyleKind::Window)), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.task_list.update(action);
        self.form.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Paragraph::new("").style(self.theme.style(StyleKind::Window)), rect);

        let layout = LayoutManager::main_layout(rect);
        self.render_header(f, layout.header);
        self.task_list.render(f, layout.list);
        self.form.render(f, layout.form);

        let message = self.state.status_message.as_ref();
        StatusBar {
            message: message.map(|message| message.text.as_str()),
            is_error: message.is_some_and(|message| message.is_error),
            total: self.state.tasks.len(),
            completed: self.state.tasks.completed_count(),
            theme: &self.theme,
        }
        .render(f, layout.status);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
