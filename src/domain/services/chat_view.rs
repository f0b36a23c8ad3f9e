#[cfg(test)]
#[path = "chat_view_test.rs"]
mod tests;

use ratatui::text::Line;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Conversation;
use crate::domain::models::Message;

pub struct ChatView {}

impl ChatView {
    /// Renders the whole conversation into display lines. Output only depends
    /// on the arguments, so the same state always renders the same lines.
    pub fn lines(conversation: &Conversation, indicator: &str, width: usize) -> Vec<Line<'static>> {
        let mut lines = conversation
            .messages()
            .iter()
            .flat_map(|message| {
                let alignment = BubbleAlignment::for_author(&message.author);
                return Bubble::new(message, alignment, width).as_lines();
            })
            .collect::<Vec<Line<'static>>>();

        if conversation.is_busy() {
            let mut pending = Message::new(Author::Assistant, indicator);
            pending.timestamp = "".to_string();
            lines.extend(Bubble::new(&pending, BubbleAlignment::Left, width).as_lines());
        }

        return lines;
    }
}
