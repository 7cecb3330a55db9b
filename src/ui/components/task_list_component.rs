use crate::config::DisplayConfig;
use crate::constants::{EMPTY_LIST_MESSAGE, ITEM_HEIGHT, TASKS_TITLE};
use crate::icons::IconService;
use crate::task::{Task, TaskId};
use crate::theme::{StyleKind, Theme};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::task_list_item_component::{
    drop_marker_for, hit_test, render_drop_marker, CardVisual, TaskCard,
};
use crate::ui::core::{
    actions::{Action, Focus},
    drag::{DragController, DragOutcome, ItemBounds, ItemRegion},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// The reorderable list of task cards.
///
/// Holds a snapshot of the tasks pushed down by the app component and turns
/// keyboard and pointer input into [`Action`]s. Drag gestures are tracked
/// here; the resulting move is applied by the app component.
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    selected_id: Option<TaskId>,
    /// Index of the first visible task
    pub scroll_offset: usize,
    pub hovered_index: Option<usize>,
    pub focused: bool,
    pub drag: DragController,
    area: Rect,
    scrollbar: ScrollbarHelper,
    theme: Theme,
    icons: IconService,
    display_config: DisplayConfig,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            selected_id: None,
            scroll_offset: 0,
            hovered_index: None,
            focused: false,
            drag: DragController::default(),
            area: Rect::default(),
            scrollbar: ScrollbarHelper::new(),
            theme: Theme::default(),
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
        }
    }

    pub fn configure(&mut self, theme: Theme, icons: IconService, display_config: DisplayConfig, drag_threshold: u16) {
        self.theme = theme;
        self.icons = icons;
        self.display_config = display_config;
        self.drag = DragController::new(drag_threshold);
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Replace the task snapshot; the selection follows the selected task's id
    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;

        if let Some(index) = self
            .selected_id
            .and_then(|id| self.tasks.iter().position(|task| task.id == id))
        {
            self.selected_index = index;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
        self.selected_id = self.tasks.get(self.selected_index).map(|task| task.id);

        if self.hovered_index.is_some_and(|index| index >= self.tasks.len()) {
            self.hovered_index = None;
        }
        self.clamp_scroll();

        let bounds = self.item_bounds();
        let tasks = &self.tasks;
        self.drag
            .relocate(|id| tasks.iter().position(|task| task.id == id), &bounds);
    }

    pub fn select(&mut self, id: TaskId) {
        if let Some(index) = self.tasks.iter().position(|task| task.id == id) {
            self.selected_index = index;
            self.selected_id = Some(id);
            self.ensure_visible(index);
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    /// Set the area the list occupies; `render` also records it
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.clamp_scroll();
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x && column < self.area.right() && row >= self.area.y && row < self.area.bottom()
    }

    fn total_rows(&self) -> usize {
        self.tasks.len() * ITEM_HEIGHT as usize
    }

    fn layout(&self) -> (Rect, Option<Rect>) {
        ScrollbarHelper::calculate_areas(self.area, self.total_rows())
    }

    /// Area inside the list border where cards are drawn
    pub fn inner_area(&self) -> Rect {
        let (content, _) = self.layout();
        content.inner(Margin::new(1, 1))
    }

    /// Number of cards that fit entirely in the viewport
    pub fn visible_capacity(&self) -> usize {
        (self.inner_area().height / ITEM_HEIGHT) as usize
    }

    fn max_scroll(&self) -> usize {
        self.tasks.len().saturating_sub(self.visible_capacity().max(1))
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn ensure_visible(&mut self, index: usize) {
        let capacity = self.visible_capacity().max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + capacity {
            self.scroll_offset = index + 1 - capacity;
        }
        self.clamp_scroll();
    }

    /// Vertical extent of every task, including those scrolled out of view
    pub fn item_bounds(&self) -> Vec<ItemBounds> {
        let inner = self.inner_area();
        (0..self.tasks.len())
            .map(|index| {
                let offset = index as i32 - self.scroll_offset as i32;
                ItemBounds::new(i32::from(inner.y) + offset * i32::from(ITEM_HEIGHT), ITEM_HEIGHT)
            })
            .collect()
    }

    /// Screen rectangle of a card, if it is fully visible
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        if index < self.scroll_offset || index >= self.scroll_offset + self.visible_capacity() {
            return None;
        }
        let inner = self.inner_area();
        let slot = (index - self.scroll_offset) as u16;
        Some(Rect::new(inner.x, inner.y + slot * ITEM_HEIGHT, inner.width, ITEM_HEIGHT))
    }

    /// Task index under a screen position
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.inner_area();
        if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
            return None;
        }
        let index = self.scroll_offset + ((row - inner.y) / ITEM_HEIGHT) as usize;
        if index >= self.tasks.len() {
            return None;
        }
        self.card_rect(index).map(|_| index)
    }

    /// Abort a drag in progress without touching the order
    pub fn cancel_drag(&mut self) -> Action {
        match self.drag.cancel() {
            DragOutcome::Cancelled => Action::DragCancelled,
            _ => Action::None,
        }
    }

    fn selected_action(&self, make: impl FnOnce(TaskId) -> Action) -> Action {
        match self.get_selected_task() {
            Some(task) => make(task.id),
            None => Action::None,
        }
    }

    fn handle_drag_outcome(&mut self, outcome: DragOutcome) -> Action {
        match outcome {
            DragOutcome::Started(id) => {
                self.hovered_index = None;
                Action::DragStarted(id)
            }
            DragOutcome::Drop { id, insert_before, .. } => Action::MoveTask { id, insert_before },
            DragOutcome::Click { id, region } => match region {
                ItemRegion::Checkbox => Action::ToggleTask(id),
                ItemRegion::Delete => Action::DeleteTask(id),
                ItemRegion::Body => Action::SelectTask(id),
            },
            DragOutcome::Cancelled => Action::DragCancelled,
            DragOutcome::Moved { .. } | DragOutcome::None => Action::None,
        }
    }

    fn card_visual(&self, index: usize) -> CardVisual {
        let dragged_index = self
            .drag
            .dragged_id()
            .and_then(|id| self.tasks.iter().position(|task| task.id == id));

        let drop_marker = match (dragged_index, self.drag.drop_target()) {
            (Some(dragged), Some(insert_before)) => drop_marker_for(index, dragged, insert_before, self.tasks.len()),
            _ => None,
        };

        CardVisual {
            selected: self.focused && index == self.selected_index,
            hovered: self.hovered_index == Some(index),
            dragging: dragged_index == Some(index),
            drop_marker,
        }
    }

    fn render_ghost(&self, f: &mut Frame) {
        let (Some(id), Some((pointer_row, grab_offset))) = (self.drag.dragged_id(), self.drag.ghost_anchor()) else {
            return;
        };
        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            return;
        };

        let inner = self.inner_area();
        if inner.height < ITEM_HEIGHT {
            return;
        }
        let lowest_top = inner.bottom() - ITEM_HEIGHT;
        let top = pointer_row.saturating_sub(grab_offset).clamp(inner.y, lowest_top);
        let ghost_area = Rect::new(inner.x, top, inner.width, ITEM_HEIGHT);

        TaskCard::new(task, &self.theme, &self.icons, &self.display_config.due_format)
            .visual(CardVisual {
                dragging: true,
                ..CardVisual::default()
            })
            .render_floating(f, ghost_area);
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc if self.drag.is_dragging() => self.cancel_drag(),
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char(' ') => self.selected_action(Action::ToggleTask),
            KeyCode::Char('d') | KeyCode::Delete => self.selected_action(Action::DeleteTask),
            KeyCode::Char('K') => self.selected_action(Action::MoveTaskUp),
            KeyCode::Char('J') => self.selected_action(Action::MoveTaskDown),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => Action::SetFocus(Focus::Form),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let position = (mouse.column, mouse.row);
        let inside = self.contains(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = self.index_at(mouse.column, mouse.row) else {
                    return Action::None;
                };
                let Some(card) = self.card_rect(index) else {
                    return Action::None;
                };
                let Some(id) = self.tasks.get(index).map(|task| task.id) else {
                    return Action::None;
                };
                let region = hit_test(card, mouse.column);
                self.drag.press(id, index, position, region, mouse.row - card.y);
                Action::None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let bounds = self.item_bounds();
                let outcome = self.drag.motion(position, inside, &bounds);
                self.handle_drag_outcome(outcome)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let bounds = self.item_bounds();
                let outcome = self.drag.release(position, inside, &bounds);
                self.handle_drag_outcome(outcome)
            }
            MouseEventKind::Moved => {
                self.hovered_index = self.index_at(mouse.column, mouse.row);
                Action::None
            }
            MouseEventKind::ScrollUp if inside => Action::ScrollUp,
            MouseEventKind::ScrollDown if inside => Action::ScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.selected_id = Some(self.tasks[self.selected_index].id);
                    self.ensure_visible(self.selected_index);
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.selected_id = Some(self.tasks[self.selected_index].id);
                    self.ensure_visible(self.selected_index);
                }
                Action::None
            }
            Action::SelectTask(id) => {
                self.select(id);
                Action::SetFocus(Focus::List)
            }
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::ScrollDown => {
                self.scroll_offset += 1;
                self.clamp_scroll();
                Action::None
            }
            Action::SetFocus(focus) => {
                self.focused = focus == Focus::List;
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.set_area(rect);
        let (content_area, scrollbar_area) = self.layout();

        let border_kind = if self.focused {
            StyleKind::EntryFocused
        } else {
            StyleKind::Entry
        };
        let title = format!(" {} ({}) ", TASKS_TITLE, self.tasks.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(border_kind))
            .title(Span::styled(title, self.theme.style(StyleKind::Subtitle)))
            .style(self.theme.style(StyleKind::Window));
        f.render_widget(block, content_area);

        if self.tasks.is_empty() {
            let inner = content_area.inner(Margin::new(1, 1));
            f.render_widget(
                Paragraph::new(Span::styled(EMPTY_LIST_MESSAGE, self.theme.style(StyleKind::Placeholder))),
                inner,
            );
            return;
        }

        let end = (self.scroll_offset + self.visible_capacity()).min(self.tasks.len());
        for index in self.scroll_offset..end {
            if let Some(card_area) = self.card_rect(index) {
                TaskCard::new(
                    &self.tasks[index],
                    &self.theme,
                    &self.icons,
                    &self.display_config.due_format,
                )
                .visual(self.card_visual(index))
                .render(f, card_area);
            }
        }

        self.render_ghost(f);

        for index in self.scroll_offset..end {
            if let (Some(marker), Some(card_area)) = (self.card_visual(index).drop_marker, self.card_rect(index)) {
                render_drop_marker(f, card_area, marker, &self.theme);
            }
        }

        let viewport_rows = self.inner_area().height as usize;
        self.scrollbar.update_state(
            self.total_rows(),
            self.scroll_offset * ITEM_HEIGHT as usize,
            viewport_rows,
        );
        let scrollbar_style = self.theme.style(StyleKind::Subtitle);
        self.scrollbar.render(f, scrollbar_area, scrollbar_style);
    }
}
