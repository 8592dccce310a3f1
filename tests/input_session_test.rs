//! Input capture scenarios, driven through the engine's host-event API.

use retroscreen::types::{Color, TextEvent};
use retroscreen::Engine;

#[test]
fn type_delete_type_terminate_resolves_the_edited_text() {
    let mut engine = Engine::without_flash_ticker();
    let mut prompt = engine.input_session(5, 2, 5);

    engine.on_text_input(TextEvent::Char('A'));
    engine.on_text_input(TextEvent::Char('B'));
    engine.on_text_input(TextEvent::Delete);
    engine.on_text_input(TextEvent::Char('C'));
    assert!(prompt.try_resolve().is_none());

    engine.on_text_input(TextEvent::Terminator);
    assert_eq!(prompt.try_resolve().as_deref(), Some("AC"));

    for col in [2, 3] {
        let cell = engine.cell(5, col).unwrap();
        assert_eq!(cell.character, ' ');
        assert_eq!(cell.pen, Color::BLACK);
        assert_eq!(cell.paper, Color::WHITE);
        assert!(!cell.flash);
        assert!(!cell.invert);
    }
    assert!(!engine.awaiting_input());
}

#[test]
fn echo_shows_buffered_text_with_a_flashing_cursor() {
    let mut engine = Engine::without_flash_ticker();
    let _prompt = engine.input_session(5, 2, 10);

    // Empty session: just the cursor at the start column.
    assert!(engine.cell(5, 2).unwrap().flash);

    engine.on_text_input(TextEvent::Char('h'));
    engine.on_text_input(TextEvent::Char('i'));

    assert_eq!(engine.cell(5, 2).unwrap().character, 'h');
    assert_eq!(engine.cell(5, 3).unwrap().character, 'i');
    let cursor = engine.cell(5, 4).unwrap();
    assert_eq!(cursor.character, ' ');
    assert!(cursor.flash);
}

#[test]
fn delete_pulls_the_cursor_back() {
    let mut engine = Engine::without_flash_ticker();
    let _prompt = engine.input_session(5, 2, 10);

    engine.on_text_input(TextEvent::Char('a'));
    engine.on_text_input(TextEvent::Char('b'));
    assert!(engine.cell(5, 4).unwrap().flash);

    engine.on_text_input(TextEvent::Delete);
    assert!(engine.cell(5, 3).unwrap().flash);
    assert!(!engine.cell(5, 4).unwrap().flash);
}

#[test]
fn characters_past_max_length_are_ignored() {
    let mut engine = Engine::without_flash_ticker();
    let mut prompt = engine.input_session(0, 0, 2);

    for ch in ['x', 'y', 'z', 'w'] {
        engine.on_text_input(TextEvent::Char(ch));
    }
    engine.on_text_input(TextEvent::Terminator);
    assert_eq!(prompt.try_resolve().as_deref(), Some("xy"));
}

#[test]
fn delete_on_an_empty_session_is_harmless() {
    let mut engine = Engine::without_flash_ticker();
    let mut prompt = engine.input_session(0, 0, 5);
    engine.on_text_input(TextEvent::Delete);
    engine.on_text_input(TextEvent::Terminator);
    assert_eq!(prompt.try_resolve().as_deref(), Some(""));
}

#[test]
fn text_events_without_a_session_are_ignored() {
    let mut engine = Engine::without_flash_ticker();
    engine.print(0, 0, "keep");
    engine.on_text_input(TextEvent::Char('x'));
    engine.on_text_input(TextEvent::Terminator);
    assert_eq!(engine.cell(0, 0).unwrap().character, 'k');
}

#[tokio::test]
async fn prompt_wait_resolves_once_the_terminator_arrives() {
    let mut engine = Engine::without_flash_ticker();
    let prompt = engine.input_session(1, 1, 8);

    engine.on_text_input(TextEvent::Char('o'));
    engine.on_text_input(TextEvent::Char('k'));
    engine.on_text_input(TextEvent::Terminator);

    assert_eq!(prompt.wait().await.unwrap(), "ok");
}

#[test]
fn blocking_wait_resolves_from_another_thread() {
    let mut engine = Engine::without_flash_ticker();
    let prompt = engine.input_session(1, 1, 8);

    let waiter = std::thread::spawn(move || prompt.blocking_wait().unwrap());

    engine.on_text_input(TextEvent::Char('g'));
    engine.on_text_input(TextEvent::Char('o'));
    engine.on_text_input(TextEvent::Terminator);

    assert_eq!(waiter.join().unwrap(), "go");
}

#[test]
#[should_panic(expected = "input session already active")]
fn nested_sessions_are_a_programming_error() {
    let mut engine = Engine::without_flash_ticker();
    let _a = engine.input_session(0, 0, 5);
    let _b = engine.input_session(1, 0, 5);
}
