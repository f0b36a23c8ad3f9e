use super::Author;
use super::Message;
use super::MessageType;
use crate::domain::models::Source;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Assistant, "Hi there!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.author.to_string(), "Assistant");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert!(msg.sources.is_empty());
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_keeps_text_verbatim() {
    let msg = Message::new(Author::User, "\tHi  there!");
    assert_eq!(msg.text, "\tHi  there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_stamps_hours_and_minutes() {
    let msg = Message::new(Author::User, "Hi there!");
    assert_eq!(msg.timestamp.len(), 5);
    assert_eq!(msg.timestamp.chars().nth(2), Some(':'));
}

#[test]
fn it_attaches_sources() {
    let msg = Message::new(Author::Assistant, "Answer").with_sources(vec![
        Source::new("GPT-4", 0.92, "Python/JS"),
        Source::new("Claude", 0.87, "JavaScript"),
    ]);

    assert_eq!(msg.sources.len(), 2);
    assert_eq!(msg.sources[0].name, "GPT-4");
    assert_eq!(msg.sources[1].name, "Claude");
}
