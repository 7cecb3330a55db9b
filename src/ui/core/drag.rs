//! Drag-and-drop reordering for the task list.
//!
//! A gesture moves through `Idle -> Pressed -> Dragging -> Idle`. A press
//! only becomes a drag once the pointer has travelled `threshold` cells
//! (Manhattan distance); releasing before that is a plain click on whatever
//! part of the card was pressed. A gesture that is cancelled while the button
//! is still held parks in `Aborted` until the release arrives, so the
//! trailing events cannot start a second gesture.

use crate::task::TaskId;

/// Part of a task card under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRegion {
    Checkbox,
    Delete,
    Body,
}

/// Vertical extent of one rendered task, in terminal rows.
///
/// `top` is signed because cards scrolled above the viewport still take part
/// in the midpoint test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBounds {
    pub top: i32,
    pub height: u16,
}

impl ItemBounds {
    pub fn new(top: i32, height: u16) -> Self {
        Self { top, height }
    }

    pub fn contains_row(&self, row: i32) -> bool {
        row >= self.top && row < self.top + i32::from(self.height)
    }

    /// Whether the center of `row` lies above this card's vertical midpoint.
    ///
    /// Compared in half-rows so odd heights need no floating point.
    pub fn is_below_row(&self, row: i32) -> bool {
        2 * row + 1 < 2 * self.top + i32::from(self.height)
    }
}

/// Insertion point for a dragged task, as an index into the current order.
///
/// Walks the other tasks in order and returns the index of the first one
/// whose midpoint lies below the pointer; the result is `bounds.len()` (the
/// tail) when the pointer is below every midpoint.
pub fn drop_index(bounds: &[ItemBounds], dragged: usize, pointer_row: i32) -> usize {
    bounds
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != dragged)
        .find(|(_, item)| item.is_below_row(pointer_row))
        .map(|(index, _)| index)
        .unwrap_or(bounds.len())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Pressed {
        id: TaskId,
        index: usize,
        origin: (u16, u16),
        region: ItemRegion,
        grab_offset: u16,
    },
    Dragging {
        id: TaskId,
        index: usize,
        grab_offset: u16,
        pointer_row: u16,
        insert_before: usize,
    },
    Aborted,
}

/// Result of feeding a pointer event to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    None,
    /// The press crossed the threshold and is now a drag
    Started(TaskId),
    /// The drop target moved while dragging
    Moved { insert_before: usize },
    /// Press and release without dragging
    Click { id: TaskId, region: ItemRegion },
    Drop {
        id: TaskId,
        from: usize,
        insert_before: usize,
    },
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    threshold: u16,
}

impl DragController {
    pub fn new(threshold: u16) -> Self {
        Self {
            state: DragState::Idle,
            threshold: threshold.max(1),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_id(&self) -> Option<TaskId> {
        match self.state {
            DragState::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Current insertion index while dragging
    pub fn drop_target(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { insert_before, .. } => Some(insert_before),
            _ => None,
        }
    }

    /// Pointer row and grab offset of the dragged card, for drawing it under the pointer
    pub fn ghost_anchor(&self) -> Option<(u16, u16)> {
        match self.state {
            DragState::Dragging {
                pointer_row,
                grab_offset,
                ..
            } => Some((pointer_row, grab_offset)),
            _ => None,
        }
    }

    /// Left button went down on a task card
    pub fn press(&mut self, id: TaskId, index: usize, position: (u16, u16), region: ItemRegion, grab_offset: u16) {
        self.state = DragState::Pressed {
            id,
            index,
            origin: position,
            region,
            grab_offset,
        };
    }

    /// Pointer moved with the left button held.
    ///
    /// `inside` tells whether the pointer is still over the task list.
    pub fn motion(&mut self, position: (u16, u16), inside: bool, bounds: &[ItemBounds]) -> DragOutcome {
        match self.state.clone() {
            DragState::Idle | DragState::Aborted => DragOutcome::None,
            DragState::Pressed {
                id,
                index,
                origin,
                grab_offset,
                ..
            } => {
                if !inside {
                    self.state = DragState::Aborted;
                    return DragOutcome::None;
                }

                let distance = position.0.abs_diff(origin.0) + position.1.abs_diff(origin.1);
                if distance < self.threshold {
                    return DragOutcome::None;
                }

                self.state = DragState::Dragging {
                    id,
                    index,
                    grab_offset,
                    pointer_row: position.1,
                    insert_before: drop_index(bounds, index, i32::from(position.1)),
                };
                DragOutcome::Started(id)
            }
            DragState::Dragging {
                id,
                index,
                grab_offset,
                ..
            } => {
                if !inside {
                    self.state = DragState::Aborted;
                    return DragOutcome::Cancelled;
                }

                let insert_before = drop_index(bounds, index, i32::from(position.1));
                self.state = DragState::Dragging {
                    id,
                    index,
                    grab_offset,
                    pointer_row: position.1,
                    insert_before,
                };
                DragOutcome::Moved { insert_before }
            }
        }
    }

    /// Left button released
    pub fn release(&mut self, position: (u16, u16), inside: bool, bounds: &[ItemBounds]) -> DragOutcome {
        let state = std::mem::take(&mut self.state);
        match state {
            DragState::Idle | DragState::Aborted => DragOutcome::None,
            DragState::Pressed { id, region, .. } => {
                if inside {
                    DragOutcome::Click { id, region }
                } else {
                    DragOutcome::None
                }
            }
            DragState::Dragging { id, index, .. } => {
                if !inside {
                    return DragOutcome::Cancelled;
                }
                DragOutcome::Drop {
                    id,
                    from: index,
                    insert_before: drop_index(bounds, index, i32::from(position.1)),
                }
            }
        }
    }

    /// Abort the current gesture, keeping the list order intact.
    ///
    /// Returns `Cancelled` when a drag was in progress.
    pub fn cancel(&mut self) -> DragOutcome {
        match self.state {
            DragState::Dragging { .. } => {
                self.state = DragState::Aborted;
                DragOutcome::Cancelled
            }
            DragState::Pressed { .. } => {
                self.state = DragState::Aborted;
                DragOutcome::None
            }
            DragState::Idle | DragState::Aborted => DragOutcome::None,
        }
    }

    /// Re-anchor the gesture after the list was rebuilt under it.
    ///
    /// `position_of` finds the pressed task in the new order. A gesture whose
    /// task is gone is aborted; a drag keeps its pointer row and gets a fresh
    /// drop target from `bounds`.
    pub fn relocate(&mut self, position_of: impl Fn(TaskId) -> Option<usize>, bounds: &[ItemBounds]) {
        match self.state.clone() {
            DragState::Idle | DragState::Aborted => {}
            DragState::Pressed {
                id,
                origin,
                region,
                grab_offset,
                ..
            } => {
                self.state = match position_of(id) {
                    Some(index) => DragState::Pressed {
                        id,
                        index,
                        origin,
                        region,
                        grab_offset,
                    },
                    None => DragState::Aborted,
                };
            }
            DragState::Dragging {
                id,
                grab_offset,
                pointer_row,
                ..
            } => {
                self.state = match position_of(id) {
                    Some(index) => DragState::Dragging {
                        id,
                        index,
                        grab_offset,
                        pointer_row,
                        insert_before: drop_index(bounds, index, i32::from(pointer_row)),
                    },
                    None => {
                        log::debug!("Dragged task {} was removed, aborting drag", id);
                        DragState::Aborted
                    }
                };
            }
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(crate::constants::DRAG_THRESHOLD_DEFAULT)
    }
}
