//! Scrollbar helper for the task list.
//!
//! Content is measured in terminal rows, so callers pass
//! `task_count * ITEM_HEIGHT` rather than an item count.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    ///
    /// # Arguments
    /// * `total_rows` - Height of the whole content in rows
    /// * `offset_rows` - First visible content row
    /// * `viewport_rows` - Rows available for content
    pub fn update_state(&mut self, total_rows: usize, offset_rows: usize, viewport_rows: usize) {
        self.state = self
            .state
            .content_length(total_rows.saturating_sub(viewport_rows) + 1)
            .viewport_content_length(viewport_rows)
            .position(offset_rows);
    }

    pub fn needs_scrollbar(total_rows: usize, available_rows: usize) -> bool {
        total_rows > available_rows
    }

    /// Split `rect` (a bordered block) into content and scrollbar areas.
    ///
    /// The scrollbar takes the last column, between the top and bottom borders.
    pub fn calculate_areas(rect: Rect, total_rows: usize) -> (Rect, Option<Rect>) {
        let available_rows = rect.height.saturating_sub(2) as usize;

        if Self::needs_scrollbar(total_rows, available_rows) {
            let content_area = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                y: rect.y + 1,
                width: 1,
                height: rect.height.saturating_sub(2),
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>, style: Style) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(style)
                .thumb_style(style);

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
