use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use schedulist::config::Config;
use schedulist::constants::{INFO_DRAG_CANCELLED, SUCCESS_TASK_ADDED};
use schedulist::logger::Logger;
use schedulist::task_list::TogglePolicy;
use schedulist::ui::core::{Component, EventType, Focus};
use schedulist::ui::AppComponent;

// 60x40 terminal: the list occupies rows 3..28, cards are 4 rows tall
// starting at row 4, so card `i` spans rows 4 + 4i ..= 7 + 4i.
const WIDTH: u16 = 60;
const HEIGHT: u16 = 40;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 15)
        .unwrap()
        .and_hms_opt(14, 7, 42)
        .unwrap()
}

fn card_row(index: u16) -> u16 {
    5 + index * 4
}

struct Harness {
    app: AppComponent,
    terminal: Terminal<TestBackend>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        let mut app = AppComponent::new(config, Logger::new());
        app.set_clock(fixed_now);
        let mut harness = Self {
            app,
            terminal: Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap(),
        };
        harness.draw();
        harness
    }

    fn draw(&mut self) {
        let app = &mut self.app;
        self.terminal.draw(|f| app.render(f, f.area())).unwrap();
    }

    fn key(&mut self, code: KeyCode) {
        self.app
            .handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        self.draw();
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.app.handle_event(EventType::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
        self.draw();
    }

    fn click(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Add tasks so that the list reads `labels` top to bottom
    fn add_all(&mut self, labels: &[&str]) {
        for label in labels.iter().rev() {
            self.type_text(label);
            self.key(KeyCode::Enter);
        }
    }

    fn labels(&self) -> Vec<String> {
        self.app.tasks().iter().map(|task| task.text.clone()).collect()
    }

    fn screen(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}

#[test]
fn test_add_task_with_blank_due_fields() {
    let mut h = Harness::new();
    h.type_text("Buy milk");
    h.key(KeyCode::Enter);

    assert_eq!(h.app.tasks().len(), 1);
    let task = h.app.tasks().get_at(0).unwrap();
    assert_eq!(task.text, "Buy milk");
    assert!(!task.completed);
    assert_eq!(task.due_at, fixed_now());

    assert!(h.app.form().text.is_empty());
    assert_eq!(h.app.focus(), Focus::Form);
    assert_eq!(h.app.status_message(), Some(SUCCESS_TASK_ADDED));
    assert!(h.screen().contains("Due: 15/10/26 14:07"));
}

#[test]
fn test_add_task_with_tokens() {
    let mut h = Harness::new();
    h.type_text("Dentist");
    h.key(KeyCode::Tab);
    h.type_text("241226");
    h.key(KeyCode::Tab);
    h.type_text("0915");
    h.key(KeyCode::Enter);

    let task = h.app.tasks().get_at(0).unwrap();
    assert_eq!(task.due_label("%d/%m/%y %H:%M"), "Due: 24/12/26 09:15");
    assert!(h.app.form().date.is_empty());
}

#[test]
fn test_empty_text_is_rejected_and_fields_kept() {
    let mut h = Harness::new();
    h.key(KeyCode::Tab);
    h.type_text("311226");
    h.key(KeyCode::BackTab);
    h.type_text("   ");
    h.key(KeyCode::Enter);

    assert!(h.app.tasks().is_empty());
    assert!(h.app.form().is_error_visible());
    assert_eq!(h.app.form().date, "311226");
}

#[test]
fn test_new_tasks_go_to_the_head() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);
    assert_eq!(h.labels(), vec!["a", "b", "c"]);
    assert_eq!(h.app.task_list().selected_index, 0);
}

#[test]
fn test_drag_last_item_to_top() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c", "d"]);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(3));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(3) - 2);
    assert!(h.app.task_list().drag.is_dragging());

    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, 4);
    assert_eq!(h.app.task_list().drag.drop_target(), Some(0));
    assert!(h.screen().contains("drop here"));

    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, 4);
    assert_eq!(h.labels(), vec!["d", "a", "b", "c"]);
    assert!(!h.app.task_list().drag.is_dragging());
    assert!(!h.screen().contains("drop here"));
}

#[test]
fn test_drop_at_own_position_keeps_order() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(1));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(1) + 2);
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, card_row(1) + 2);

    assert_eq!(h.labels(), vec!["a", "b", "c"]);
}

#[test]
fn test_drag_first_item_below_second() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(0));
    // Lower half of card 1 is past its midpoint
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(1) + 2);
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, card_row(1) + 2);

    assert_eq!(h.labels(), vec!["b", "a", "c"]);
}

#[test]
fn test_leaving_the_list_cancels_drag() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(0));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(2));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, 35);
    assert!(!h.app.task_list().drag.is_dragging());
    assert_eq!(h.app.status_message(), Some(INFO_DRAG_CANCELLED));

    // Coming back and releasing does not drop anything
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(2));
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, card_row(2));
    assert_eq!(h.labels(), vec!["a", "b", "c"]);
}

#[test]
fn test_escape_and_focus_loss_cancel_drag() {
    let mut h = Harness::new();
    h.add_all(&["a", "b"]);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(0));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(1) + 2);
    h.key(KeyCode::Esc);
    assert!(!h.app.task_list().drag.is_dragging());
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, card_row(1) + 2);
    assert_eq!(h.labels(), vec!["a", "b"]);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(0));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(1) + 2);
    h.app.handle_event(EventType::FocusLost);
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, card_row(1) + 2);
    assert_eq!(h.labels(), vec!["a", "b"]);
}

#[test]
fn test_delete_during_drag_keeps_drop_target_in_sync() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c", "d"]);
    h.key(KeyCode::Esc);
    assert_eq!(h.app.task_list().selected_index, 0);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(1));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(1) + 2);
    assert!(h.app.task_list().drag.is_dragging());

    // Deletes "a" while "b" is held; "b" is now card 0 and "c" card 1
    h.key(KeyCode::Char('d'));
    assert_eq!(h.labels(), vec!["b", "c", "d"]);
    assert!(h.app.task_list().drag.is_dragging());

    // Top row of "c" lies above its midpoint: dropping here is a no-op
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, 8);
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, 8);
    assert_eq!(h.labels(), vec!["b", "c", "d"]);
}

#[test]
fn test_keyboard_move_during_drag() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c", "d"]);
    h.key(KeyCode::Esc);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(2));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(2) + 2);

    // Moves "a" below "b", leaving the held "c" where it was
    h.key(KeyCode::Char('J'));
    assert_eq!(h.labels(), vec!["b", "a", "c", "d"]);

    // Lower half of "d" is past its midpoint
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(3) + 2);
    assert_eq!(h.app.task_list().drag.drop_target(), Some(4));
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, card_row(3) + 2);
    assert_eq!(h.labels(), vec!["b", "a", "d", "c"]);
}

#[test]
fn test_deleting_the_dragged_task_aborts_the_gesture() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);
    h.key(KeyCode::Esc);

    h.mouse(MouseEventKind::Down(MouseButton::Left), 20, card_row(0));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(0) + 2);
    h.key(KeyCode::Char('d'));
    assert!(!h.app.task_list().drag.is_dragging());
    assert!(!h.screen().contains("drop here"));

    h.mouse(MouseEventKind::Drag(MouseButton::Left), 20, card_row(2));
    h.mouse(MouseEventKind::Up(MouseButton::Left), 20, card_row(2));
    assert_eq!(h.labels(), vec!["b", "c"]);
}

#[test]
fn test_click_checkbox_toggles_and_sinks() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);

    h.click(3, card_row(0));
    assert_eq!(h.labels(), vec!["b", "c", "a"]);
    assert!(h.app.tasks().get_at(2).unwrap().completed);
    assert!(h.screen().contains("3 tasks • 1 done"));

    // Reopening moves it back to the head
    h.click(3, card_row(2));
    assert_eq!(h.labels(), vec!["a", "b", "c"]);
    assert_eq!(h.app.tasks().completed_count(), 0);
}

#[test]
fn test_keep_order_policy() {
    let mut config = Config::default();
    config.behavior.toggle_policy = TogglePolicy::KeepOrder;
    let mut h = Harness::with_config(config);
    h.add_all(&["a", "b", "c"]);

    h.click(3, card_row(0));
    assert_eq!(h.labels(), vec!["a", "b", "c"]);
    assert!(h.app.tasks().get_at(0).unwrap().completed);
}

#[test]
fn test_click_delete_removes_task() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c", "d"]);

    h.click(56, card_row(1));
    assert_eq!(h.labels(), vec!["a", "c", "d"]);
}

#[test]
fn test_body_click_selects_and_focuses_list() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);

    h.click(20, card_row(2));
    assert_eq!(h.app.focus(), Focus::List);
    assert_eq!(h.app.task_list().selected_index, 2);
}

#[test]
fn test_keyboard_list_operations() {
    let mut h = Harness::new();
    h.add_all(&["a", "b", "c"]);

    h.key(KeyCode::Esc);
    assert_eq!(h.app.focus(), Focus::List);

    h.key(KeyCode::Char('j'));
    assert_eq!(h.app.task_list().selected_index, 1);

    // Move "b" up, selection follows it
    h.key(KeyCode::Char('K'));
    assert_eq!(h.labels(), vec!["b", "a", "c"]);
    assert_eq!(h.app.task_list().selected_index, 0);

    h.key(KeyCode::Char('J'));
    h.key(KeyCode::Char('J'));
    assert_eq!(h.labels(), vec!["a", "c", "b"]);

    h.key(KeyCode::Char(' '));
    assert!(h.app.tasks().get_at(2).unwrap().completed);

    h.key(KeyCode::Char('k'));
    h.key(KeyCode::Char('d'));
    assert_eq!(h.labels(), vec!["a", "b"]);

    h.key(KeyCode::Tab);
    assert_eq!(h.app.focus(), Focus::Form);
}

#[test]
fn test_q_types_in_form_and_quits_from_list() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('q'));
    assert!(!h.app.should_quit());
    assert_eq!(h.app.form().text, "q");

    h.key(KeyCode::Esc);
    h.key(KeyCode::Char('q'));
    assert!(h.app.should_quit());
}

#[test]
fn test_ctrl_c_quits_anywhere() {
    let mut h = Harness::new();
    h.app.handle_event(EventType::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(h.app.should_quit());
}

#[test]
fn test_help_dialog_toggles() {
    let mut h = Harness::new();
    h.key(KeyCode::Esc);
    h.key(KeyCode::Char('?'));
    assert!(h.app.is_dialog_visible());
    assert!(h.screen().contains("Help"));

    h.key(KeyCode::Esc);
    assert!(!h.app.is_dialog_visible());
}

#[test]
fn test_header_and_status_bar() {
    let mut h = Harness::new();
    h.add_all(&["a"]);
    let screen = h.screen();
    assert!(screen.contains("Task Scheduler"));
    assert!(screen.contains("Today: Thursday, 15 October 2026"));
    assert!(screen.contains("1 task • 0 done"));
}

#[test]
fn test_empty_list_message() {
    let h = Harness::new();
    assert!(h.screen().contains("No tasks yet"));
}
