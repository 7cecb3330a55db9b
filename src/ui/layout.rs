//! Layout management and calculations

use crate::constants::{FORM_HEIGHT, HEADER_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the main window, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub list: Rect,
    pub form: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the window into header, task list, input panel and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> MainLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        MainLayout {
            header: chunks[0],
            list: chunks[1],
            form: chunks[2],
            status: chunks[3],
        }
    }

    /// Calculate a centered rectangle with percentage-based dimensions
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Help dialog size in percent, roomier on small terminals
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 90 } else { 70 };
        let help_height = if screen_height < 40 { 90 } else { 70 };
        (help_width, help_height)
    }
}
