use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind,
};
use schedulist::ui::core::event_handler::{EventHandler, EventType};
use tokio::time::Duration;

#[test]
fn test_classify_key_press_only() {
    let press = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
    assert!(matches!(EventHandler::classify(Event::Key(press)), EventType::Key(_)));

    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Char('j'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );
    assert!(matches!(EventHandler::classify(Event::Key(release)), EventType::Other));
}

#[test]
fn test_classify_mouse_resize_focus() {
    let mouse = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 3,
        row: 4,
        modifiers: KeyModifiers::NONE,
    };
    assert!(matches!(EventHandler::classify(Event::Mouse(mouse)), EventType::Mouse(_)));
    assert!(matches!(EventHandler::classify(Event::Resize(80, 24)), EventType::Resize(80, 24)));
    assert!(matches!(EventHandler::classify(Event::FocusLost), EventType::FocusLost));
    assert!(matches!(EventHandler::classify(Event::FocusGained), EventType::Other));
}

#[tokio::test]
async fn test_tick_rate() {
    let handler = EventHandler::new(Duration::from_millis(25));
    assert_eq!(handler.tick_rate(), Duration::from_millis(25));

    let default = EventHandler::default();
    assert_eq!(default.tick_rate(), Duration::from_millis(50));
}
