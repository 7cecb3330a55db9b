use crate::constants::{CHECKBOX_WIDTH, DELETE_WIDTH, DROP_ABOVE_MARKER, DROP_BELOW_MARKER};
use crate::icons::IconService;
use crate::task::Task;
use crate::theme::{StyleKind, Theme};
use crate::ui::core::drag::ItemRegion;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Which edge of a card shows the drop indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropMarker {
    Before,
    After,
}

/// Per-card visual state derived from selection, hover and drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardVisual {
    pub selected: bool,
    pub hovered: bool,
    pub dragging: bool,
    pub drop_marker: Option<DropMarker>,
}

/// Where the drop indicator goes for the card at `index`.
///
/// `insert_before == len` means the tail, which is drawn under the last card
/// that is not being dragged.
pub fn drop_marker_for(index: usize, dragged: usize, insert_before: usize, len: usize) -> Option<DropMarker> {
    if index == dragged {
        return None;
    }
    if insert_before < len {
        return (index == insert_before).then_some(DropMarker::Before);
    }

    let last_other = (0..len).rev().find(|i| *i != dragged)?;
    (index == last_other).then_some(DropMarker::After)
}

/// Draw the drop indicator label on the edge of `card` named by `marker`.
///
/// Drawn separately from the card so it stays visible above the drag ghost.
pub fn render_drop_marker(f: &mut Frame, card: Rect, marker: DropMarker, theme: &Theme) {
    let (label, row) = match marker {
        DropMarker::Before => (DROP_ABOVE_MARKER, card.y),
        DropMarker::After => (DROP_BELOW_MARKER, card.bottom().saturating_sub(1)),
    };
    let width = (label.chars().count() as u16).min(card.width.saturating_sub(2));
    let area = Rect::new(card.x + 1, row, width, 1);
    f.render_widget(
        Paragraph::new(Line::from(label)).style(theme.style(StyleKind::DropIndicator)),
        area,
    );
}

/// Which control of the card a column falls on
pub fn hit_test(card: Rect, column: u16) -> ItemRegion {
    let inner = card.inner(Margin::new(1, 1));
    if inner.width == 0 {
        return ItemRegion::Body;
    }

    if column >= inner.x && column < inner.x + CHECKBOX_WIDTH {
        ItemRegion::Checkbox
    } else if column < inner.right() && column >= inner.right().saturating_sub(DELETE_WIDTH) {
        ItemRegion::Delete
    } else {
        ItemRegion::Body
    }
}

/// A single task rendered as a bordered card: checkbox, label and delete
/// control on the first line, due timestamp on the second.
pub struct TaskCard<'a> {
    pub task: &'a Task,
    pub visual: CardVisual,
    pub theme: &'a Theme,
    pub icons: &'a IconService,
    pub due_format: &'a str,
}

impl<'a> TaskCard<'a> {
    pub fn new(task: &'a Task, theme: &'a Theme, icons: &'a IconService, due_format: &'a str) -> Self {
        Self {
            task,
            visual: CardVisual::default(),
            theme,
            icons,
            due_format,
        }
    }

    pub fn visual(mut self, visual: CardVisual) -> Self {
        self.visual = visual;
        self
    }

    fn frame_kind(&self) -> StyleKind {
        if self.visual.dragging {
            StyleKind::TaskDragging
        } else if self.visual.selected {
            StyleKind::TaskSelected
        } else if self.visual.hovered {
            StyleKind::TaskHover
        } else if self.task.completed {
            StyleKind::TaskCompleted
        } else {
            StyleKind::TaskNormal
        }
    }

    fn block(&self) -> Block<'static> {
        let kind = self.frame_kind();
        let border_kind = if self.visual.drop_marker.is_some() {
            StyleKind::DropIndicator
        } else {
            kind
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(border_kind))
            .style(self.theme.style(kind))
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = self.block();
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.height == 0 || inner.width <= CHECKBOX_WIDTH + DELETE_WIDTH {
            return;
        }

        let (text_kind, due_kind, check_kind) = if self.task.completed {
            (
                StyleKind::TaskTextCompleted,
                StyleKind::DueTextCompleted,
                StyleKind::CheckboxChecked,
            )
        } else {
            (StyleKind::TaskText, StyleKind::DueText, StyleKind::Checkbox)
        };

        let columns = Layout::horizontal([
            Constraint::Length(CHECKBOX_WIDTH),
            Constraint::Min(0),
            Constraint::Length(DELETE_WIDTH),
        ])
        .split(Rect::new(inner.x, inner.y, inner.width, 1));

        f.render_widget(
            Paragraph::new(Span::styled(
                self.icons.checkbox(self.task.completed),
                self.theme.style(check_kind),
            )),
            columns[0],
        );
        f.render_widget(
            Paragraph::new(Span::styled(self.task.text.clone(), self.theme.style(text_kind))),
            columns[1],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.icons.delete(),
                self.theme.style(StyleKind::DeleteButton),
            )))
            .right_aligned(),
            columns[2],
        );

        if inner.height > 1 {
            let due_area = Rect::new(columns[1].x, inner.y + 1, columns[1].width, 1);
            f.render_widget(
                Paragraph::new(Span::styled(
                    self.task.due_label(self.due_format),
                    self.theme.style(due_kind),
                )),
                due_area,
            );
        }
    }

    /// Draw the card floating over whatever is underneath (the drag ghost)
    pub fn render_floating(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Clear, area);
        self.render(f, area);
    }
}
