//! Status bar component

use crate::constants::STATUS_HINT;
use crate::theme::{StyleKind, Theme};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// One-line footer: transient message or shortcut hint, plus task counts
pub struct StatusBar<'a> {
    pub message: Option<&'a str>,
    pub is_error: bool,
    pub total: usize,
    pub completed: usize,
    pub theme: &'a Theme,
}

impl StatusBar<'_> {
    pub fn counts_label(total: usize, completed: usize) -> String {
        let noun = if total == 1 { "task" } else { "tasks" };
        format!("{} {} • {} done", total, noun, completed)
    }

    /// Render the status bar
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let counts = Self::counts_label(self.total, self.completed);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(counts.chars().count() as u16 + 1)])
                .areas(area);

        let (text, kind) = match self.message {
            Some(message) if self.is_error => (message, StyleKind::StatusError),
            Some(message) => (message, StyleKind::StatusBar),
            None => (STATUS_HINT, StyleKind::StatusBar),
        };

        f.render_widget(Paragraph::new(Span::styled(text, self.theme.style(kind))), left);
        f.render_widget(
            Paragraph::new(Span::styled(counts, self.theme.style(StyleKind::Subtitle))).right_aligned(),
            right,
        );
    }
}
