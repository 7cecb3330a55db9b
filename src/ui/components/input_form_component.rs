//! Input panel for new tasks: label, date and time fields plus the add button.

use std::time::Instant;

use crate::constants::{
    BUTTON_ADD_TASK, DATE_TOKEN_LEN, FORM_TITLE, INPUT_ERROR_FLASH, PLACEHOLDER_DATE, PLACEHOLDER_TASK,
    PLACEHOLDER_TIME, TIME_TOKEN_LEN,
};
use crate::icons::IconService;
use crate::theme::{StyleKind, Theme};
use crate::ui::core::{
    actions::{Action, Focus},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Text,
    Date,
    Time,
    Button,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Text => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Button,
            FormField::Button => FormField::Text,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Text => FormField::Button,
            FormField::Date => FormField::Text,
            FormField::Time => FormField::Date,
            FormField::Button => FormField::Time,
        }
    }

    /// Character limit of an editable field
    fn max_len(self) -> Option<usize> {
        match self {
            FormField::Date => Some(DATE_TOKEN_LEN),
            FormField::Time => Some(TIME_TOKEN_LEN),
            FormField::Text | FormField::Button => None,
        }
    }
}

/// Screen areas recorded at render time for mouse hit-testing
#[derive(Debug, Clone, Copy, Default)]
struct FieldAreas {
    text: Rect,
    date: Rect,
    time: Rect,
    button: Rect,
}

impl FieldAreas {
    fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        let position = Position::new(column, row);
        [
            (self.text, FormField::Text),
            (self.date, FormField::Date),
            (self.time, FormField::Time),
            (self.button, FormField::Button),
        ]
        .into_iter()
        .find(|(area, _)| area.contains(position))
        .map(|(_, field)| field)
    }
}

pub struct InputFormComponent {
    pub text: String,
    pub date: String,
    pub time: String,
    pub active_field: FormField,
    pub focused: bool,
    error_until: Option<Instant>,
    areas: FieldAreas,
    theme: Theme,
    icons: IconService,
}

impl Default for InputFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFormComponent {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            date: String::new(),
            time: String::new(),
            active_field: FormField::Text,
            focused: true,
            error_until: None,
            areas: FieldAreas::default(),
            theme: Theme::default(),
            icons: IconService::default(),
        }
    }

    pub fn configure(&mut self, theme: Theme, icons: IconService) {
        self.theme = theme;
        self.icons = icons;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Empty all fields and put the cursor back on the label
    pub fn clear(&mut self) {
        self.text.clear();
        self.date.clear();
        self.time.clear();
        self.active_field = FormField::Text;
        self.error_until = None;
    }

    /// Briefly mark the label field as invalid
    pub fn flash_error(&mut self) {
        self.flash_error_at(Instant::now());
    }

    pub fn flash_error_at(&mut self, now: Instant) {
        self.error_until = Some(now + INPUT_ERROR_FLASH);
        self.active_field = FormField::Text;
    }

    pub fn is_error_visible(&self) -> bool {
        self.error_until.is_some()
    }

    /// Expire the error cue once its time has passed
    pub fn tick(&mut self, now: Instant) {
        if self.error_until.is_some_and(|until| now >= until) {
            self.error_until = None;
        }
    }

    /// Current field values as an add request
    pub fn submit(&self) -> Action {
        Action::AddTask {
            text: self.text.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.active_field {
            FormField::Text => Some(&mut self.text),
            FormField::Date => Some(&mut self.date),
            FormField::Time => Some(&mut self.time),
            FormField::Button => None,
        }
    }

    fn insert_char(&mut self, c: char) {
        let limit = self.active_field.max_len();
        if let Some(buffer) = self.active_buffer() {
            if limit.is_none_or(|max| buffer.chars().count() < max) {
                buffer.push(c);
            }
        }
    }

    fn delete_char(&mut self) {
        if let Some(buffer) = self.active_buffer() {
            buffer.pop();
        }
    }

    fn field_block(&self, field: FormField, icon: &str) -> Block<'static> {
        let kind = if field == FormField::Text && self.is_error_visible() {
            StyleKind::InputError
        } else if self.focused && self.active_field == field {
            StyleKind::EntryFocused
        } else {
            StyleKind::Entry
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(kind))
            .title(format!(" {} ", icon))
            .style(self.theme.style(kind))
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: FormField, value: &str, placeholder: &str, icon: &str) {
        let editing = self.focused && self.active_field == field;
        let content = if value.is_empty() && !editing {
            Span::styled(placeholder.to_string(), self.theme.style(StyleKind::Placeholder))
        } else if editing {
            Span::raw(format!("{}▏", value))
        } else {
            Span::raw(value.to_string())
        };

        f.render_widget(Paragraph::new(Line::from(content)).block(self.field_block(field, icon)), area);
    }

    fn render_button(&self, f: &mut Frame, area: Rect) {
        let kind = if self.focused && self.active_field == FormField::Button {
            StyleKind::ButtonFocused
        } else {
            StyleKind::Button
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(kind));

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(BUTTON_ADD_TASK, self.theme.style(kind))))
                .centered()
                .block(block),
            area,
        );
    }
}

impl Component for InputFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.active_field = self.active_field.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.active_field = self.active_field.previous();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::SetFocus(Focus::List),
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        match self.areas.field_at(mouse.column, mouse.row) {
            Some(FormField::Button) => {
                self.active_field = FormField::Button;
                self.submit()
            }
            Some(field) => {
                self.active_field = field;
                Action::SetFocus(Focus::Form)
            }
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SetFocus(focus) = action {
            self.focused = focus == Focus::Form;
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let panel = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(StyleKind::InputPanel))
            .title(Span::styled(format!(" {} ", FORM_TITLE), self.theme.style(StyleKind::Subtitle)))
            .style(self.theme.style(StyleKind::InputPanel));
        let inner = panel.inner(rect);
        f.render_widget(panel, rect);

        let [text_area, when_area, button_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);
        let [date_area, time_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(when_area);

        self.areas = FieldAreas {
            text: text_area,
            date: date_area,
            time: time_area,
            button: button_area,
        };

        let icons = self.icons.icons().fields;
        self.render_field(f, text_area, FormField::Text, &self.text, PLACEHOLDER_TASK, icons.task);
        self.render_field(f, date_area, FormField::Date, &self.date, PLACEHOLDER_DATE, icons.date);
        self.render_field(f, time_area, FormField::Time, &self.time, PLACEHOLDER_TIME, icons.time);
        self.render_button(f, button_area);
    }
}
