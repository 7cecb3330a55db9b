use schedulist::task::TaskId;
use schedulist::ui::core::drag::{drop_index, DragController, DragOutcome, DragState, ItemBounds, ItemRegion};

/// Four cards of height 4 starting at row 10
fn bounds() -> Vec<ItemBounds> {
    (0..4).map(|i| ItemBounds::new(10 + i * 4, 4)).collect()
}

#[test]
fn test_midpoint_boundary() {
    let card = ItemBounds::new(10, 4);
    // Midpoint sits between rows 11 and 12
    assert!(card.is_below_row(11));
    assert!(!card.is_below_row(12));
    assert!(card.contains_row(13));
    assert!(!card.contains_row(14));
}

#[test]
fn test_drop_index_skips_dragged_item() {
    let bounds = bounds();
    // Pointer above the first card's midpoint
    assert_eq!(drop_index(&bounds, 3, 10), 0);
    // Lower half of card 0: before card 1
    assert_eq!(drop_index(&bounds, 3, 13), 1);
    // The dragged card's own midpoint is ignored
    assert_eq!(drop_index(&bounds, 1, 14), 2);
    // Below every midpoint: tail
    assert_eq!(drop_index(&bounds, 0, 40), 4);
}

#[test]
fn test_drop_index_with_cards_scrolled_away() {
    // Two cards above the viewport (negative tops) still take part
    let bounds: Vec<ItemBounds> = (0..4).map(|i| ItemBounds::new(-8 + i * 4, 4)).collect();
    assert_eq!(drop_index(&bounds, 3, 0), 2);
    assert_eq!(drop_index(&bounds, 3, -20), 0);
}

#[test]
fn test_press_release_is_click() {
    let id = TaskId::new();
    let mut drag = DragController::new(2);
    drag.press(id, 0, (5, 11), ItemRegion::Checkbox, 1);

    // One cell of jitter stays under the threshold
    assert_eq!(drag.motion((6, 11), true, &bounds()), DragOutcome::None);
    assert!(!drag.is_dragging());

    assert_eq!(
        drag.release((6, 11), true, &bounds()),
        DragOutcome::Click {
            id,
            region: ItemRegion::Checkbox
        }
    );
    assert_eq!(drag.state(), &DragState::Idle);
}

#[test]
fn test_drag_last_item_to_top() {
    let id = TaskId::new();
    let bounds = bounds();
    let mut drag = DragController::new(2);
    drag.press(id, 3, (20, 23), ItemRegion::Body, 1);

    assert_eq!(drag.motion((20, 18), true, &bounds), DragOutcome::Started(id));
    assert_eq!(drag.dragged_id(), Some(id));
    assert_eq!(drag.ghost_anchor(), Some((18, 1)));

    assert_eq!(drag.motion((20, 10), true, &bounds), DragOutcome::Moved { insert_before: 0 });
    assert_eq!(drag.drop_target(), Some(0));

    assert_eq!(
        drag.release((20, 10), true, &bounds),
        DragOutcome::Drop {
            id,
            from: 3,
            insert_before: 0
        }
    );
    assert!(!drag.is_dragging());
}

#[test]
fn test_leaving_the_list_cancels() {
    let id = TaskId::new();
    let bounds = bounds();
    let mut drag = DragController::new(2);
    drag.press(id, 0, (20, 11), ItemRegion::Body, 1);
    drag.motion((20, 15), true, &bounds);
    assert!(drag.is_dragging());

    assert_eq!(drag.motion((20, 50), false, &bounds), DragOutcome::Cancelled);
    assert_eq!(drag.state(), &DragState::Aborted);

    // The rest of the gesture is swallowed
    assert_eq!(drag.motion((20, 15), true, &bounds), DragOutcome::None);
    assert_eq!(drag.release((20, 15), true, &bounds), DragOutcome::None);
    assert_eq!(drag.state(), &DragState::Idle);
}

#[test]
fn test_cancel_while_dragging() {
    let id = TaskId::new();
    let mut drag = DragController::new(1);
    drag.press(id, 0, (20, 11), ItemRegion::Body, 1);
    drag.motion((20, 12), true, &bounds());

    assert_eq!(drag.cancel(), DragOutcome::Cancelled);
    assert_eq!(drag.cancel(), DragOutcome::None);
    assert_eq!(drag.release((20, 12), true, &bounds()), DragOutcome::None);
}

#[test]
fn test_release_outside_after_press_does_nothing() {
    let id = TaskId::new();
    let mut drag = DragController::new(2);
    drag.press(id, 0, (20, 11), ItemRegion::Delete, 1);
    assert_eq!(drag.release((20, 60), false, &bounds()), DragOutcome::None);
}

#[test]
fn test_relocate_follows_the_dragged_task() {
    let id = TaskId::new();
    let bounds = bounds();
    let mut drag = DragController::new(2);
    drag.press(id, 1, (20, 15), ItemRegion::Body, 1);
    drag.motion((20, 17), true, &bounds);
    assert_eq!(drag.drop_target(), Some(2));

    // A task above was removed: the dragged one is now first
    let shorter: Vec<ItemBounds> = bounds[..3].to_vec();
    drag.relocate(|moved| (moved == id).then_some(0), &shorter);
    assert!(drag.is_dragging());
    assert_eq!(drag.drop_target(), Some(2));

    // Row 14 is the top of the new second card, above its midpoint
    assert_eq!(
        drag.release((20, 14), true, &shorter),
        DragOutcome::Drop {
            id,
            from: 0,
            insert_before: 1
        }
    );
}

#[test]
fn test_relocate_aborts_when_task_is_gone() {
    let id = TaskId::new();
    let mut drag = DragController::new(2);
    drag.press(id, 0, (20, 11), ItemRegion::Body, 1);
    drag.motion((20, 14), true, &bounds());

    drag.relocate(|_| None, &bounds()[1..]);
    assert_eq!(drag.state(), &DragState::Aborted);
    assert_eq!(drag.release((20, 14), true, &bounds()), DragOutcome::None);
    assert_eq!(drag.state(), &DragState::Idle);
}
