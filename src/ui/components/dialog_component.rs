//! Modal dialogs: the key reference and the in-memory log viewer.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::theme::{StyleKind, Theme};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_TEXT: &str = r"
TASK SCHEDULER
==============

TASK LIST
---------
j/k, ↑/↓    Select next/previous task
Space/Enter Toggle task completion
d/Delete    Delete task
J/K         Move task down/up
Mouse       Click checkbox to toggle, ✕ to delete
            Drag a card to reorder, Esc cancels the drag
Wheel       Scroll the list

INPUT PANEL
-----------
a/i/Tab     Focus the input panel (from the list)
Tab         Next field
Shift+Tab   Previous field
Enter       Add the task
Esc         Back to the list

DUE DATE
--------
Date        DDMMYY, e.g. 311226 (blank or malformed: today)
Time        HHMM, e.g. 0930 (blank or malformed: current time)
            A date that does not exist schedules the task for tomorrow

GENERAL
-------
?           Toggle this help
G           Show logs
c           Cycle icon theme
q, Ctrl+C   Quit
";

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
    theme: Theme,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
            theme: Theme::default(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn content_lines(&self) -> Vec<String> {
        match self.dialog_type {
            Some(DialogType::Help) => HELP_TEXT.lines().map(str::to_string).collect(),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                if logs.is_empty() {
                    vec!["No logs available".to_string()]
                } else {
                    logs
                }
            }
            None => Vec::new(),
        }
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let closes = match self.dialog_type {
            Some(DialogType::Help) => matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')),
            Some(DialogType::Logs) => matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')),
            None => false,
        };
        if closes {
            return Action::HideDialog;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_offset = 0,
            _ => {}
        }
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_up(),
            MouseEventKind::ScrollDown => self.scroll_down(),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type else {
            return;
        };

        let (percent_x, percent_y, title) = match dialog_type {
            DialogType::Help => {
                let (w, h) = LayoutManager::help_panel_dimensions(rect.width, rect.height);
                (w, h, DIALOG_TITLE_HELP)
            }
            DialogType::Logs => (90, 90, DIALOG_TITLE_LOGS),
        };
        let area = LayoutManager::centered_rect(percent_x, percent_y, rect);
        f.render_widget(Clear, area);

        let lines = self.content_lines();
        let visible_height = area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(lines.len())
            .viewport_content_length(visible_height)
            .position(self.scroll_offset);

        let text = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style(StyleKind::EntryFocused))
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .style(self.theme.style(StyleKind::Window));
        f.render_widget(paragraph, area);

        if lines.len() > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            f.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut self.scrollbar_state,
            );
        }
    }
}
