use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use schedulist::constants::INPUT_ERROR_FLASH;
use schedulist::ui::components::{FormField, InputFormComponent};
use schedulist::ui::core::{Action, Component, Focus};
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(form: &mut InputFormComponent, text: &str) {
    for c in text.chars() {
        form.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_typing_and_submit() {
    let mut form = InputFormComponent::new();
    type_text(&mut form, "Buy milk");
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "311226");
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "0930");

    assert_eq!(
        form.handle_key_events(key(KeyCode::Enter)),
        Action::AddTask {
            text: "Buy milk".to_string(),
            date: "311226".to_string(),
            time: "0930".to_string(),
        }
    );
}

#[test]
fn test_date_and_time_length_limits() {
    let mut form = InputFormComponent::new();
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "12345678");
    assert_eq!(form.date, "123456");

    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "ab:cd");
    assert_eq!(form.time, "ab:c");

    form.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(form.time, "ab:");
}

#[test]
fn test_field_cycling() {
    let mut form = InputFormComponent::new();
    assert_eq!(form.active_field, FormField::Text);
    form.handle_key_events(key(KeyCode::BackTab));
    assert_eq!(form.active_field, FormField::Button);
    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!(form.active_field, FormField::Text);
}

#[test]
fn test_escape_returns_to_list() {
    let mut form = InputFormComponent::new();
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::SetFocus(Focus::List));
}

#[test]
fn test_error_flash_expires() {
    let mut form = InputFormComponent::new();
    let start = Instant::now();
    form.flash_error_at(start);
    assert!(form.is_error_visible());

    form.tick(start + Duration::from_millis(100));
    assert!(form.is_error_visible());

    form.tick(start + INPUT_ERROR_FLASH);
    assert!(!form.is_error_visible());
}

#[test]
fn test_clear_resets_fields() {
    let mut form = InputFormComponent::new();
    type_text(&mut form, "x");
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "01");
    form.clear();

    assert!(form.text.is_empty());
    assert!(form.date.is_empty());
    assert_eq!(form.active_field, FormField::Text);
}
