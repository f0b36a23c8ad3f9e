use ratatui::prelude::Rect;

use super::AppState;
use crate::domain::models::Author;
use crate::domain::models::ConversationEvent;
use crate::domain::models::Effect;
use crate::domain::models::Message;
use crate::domain::models::ResponderName;

fn app_state() -> AppState {
    let mut app_state = AppState::new(ResponderName::Keyword);
    app_state.set_rect(Rect::new(0, 0, 60, 10));
    return app_state;
}

#[test]
fn it_starts_with_welcome_message() {
    let app_state = AppState::new(ResponderName::Research);
    let messages = app_state.conversation.messages();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author, Author::Assistant);
    assert_eq!(messages[0].text, ResponderName::Research.welcome_text());
    assert!(!app_state.conversation.is_busy());
}

#[test]
fn it_returns_effects_from_submit() {
    let mut app_state = app_state();
    let effects = app_state.apply(ConversationEvent::Submit("hello".to_string()));

    assert_eq!(effects, vec![Effect::RequestReply("hello".to_string())]);
    assert!(app_state.conversation.is_busy());
}

#[test]
fn it_rerenders_on_every_mutation() {
    let mut app_state = app_state();
    let idle_len = app_state.lines.len();

    app_state.apply(ConversationEvent::Submit("hello".to_string()));
    let busy_len = app_state.lines.len();
    assert!(busy_len > idle_len);

    app_state.apply(ConversationEvent::ResponseReceived(Message::new(
        Author::Assistant,
        "Hello! How can I assist you today?",
    )));
    assert!(!app_state.conversation.is_busy());
    assert!(app_state.lines.len() > idle_len);
}

#[test]
fn it_scrolls_to_newest_entry() {
    let mut app_state = app_state();
    for text in ["one", "two", "three"] {
        app_state.apply(ConversationEvent::Submit(text.to_string()));
        app_state.apply(ConversationEvent::ResponseFailed);
    }

    let expected = app_state.lines.len() as u16 - app_state.last_known_height;
    assert_eq!(app_state.scroll.position, expected);
}

#[test]
fn it_ignores_submit_while_busy() {
    let mut app_state = app_state();
    app_state.apply(ConversationEvent::Submit("hello".to_string()));
    let len = app_state.conversation.len();

    let effects = app_state.apply(ConversationEvent::Submit("again".to_string()));

    assert!(effects.is_empty());
    assert_eq!(app_state.conversation.len(), len);
}

#[test]
fn it_keeps_manual_scroll_on_rejected_submit() {
    let mut app_state = app_state();
    for text in ["one", "two", "three"] {
        app_state.apply(ConversationEvent::Submit(text.to_string()));
        app_state.apply(ConversationEvent::ResponseFailed);
    }
    app_state.scroll.up_page();
    let position = app_state.scroll.position;
    let lines = app_state.lines.len();

    let effects = app_state.apply(ConversationEvent::Submit("   ".to_string()));

    assert!(effects.is_empty());
    assert_eq!(app_state.scroll.position, position);
    assert_eq!(app_state.lines.len(), lines);
}
