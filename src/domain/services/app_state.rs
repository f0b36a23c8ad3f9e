#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::mem;

use ratatui::prelude::Rect;
use ratatui::text::Line;

use super::ChatView;
use super::Scroll;
use crate::domain::models::Author;
use crate::domain::models::Conversation;
use crate::domain::models::ConversationEvent;
use crate::domain::models::Effect;
use crate::domain::models::Message;
use crate::domain::models::ResponderName;

pub struct AppState {
    pub conversation: Conversation,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub lines: Vec<Line<'static>>,
    pub responder_name: ResponderName,
    pub scroll: Scroll,
}

impl AppState {
    pub fn new(responder_name: ResponderName) -> AppState {
        let welcome = Message::new(Author::Assistant, responder_name.welcome_text());

        return AppState {
            conversation: Conversation::new(welcome),
            last_known_height: 0,
            last_known_width: 0,
            lines: vec![],
            responder_name,
            scroll: Scroll::default(),
        };
    }

    /// Feeds an event through the conversation and re-renders. Returns the
    /// effects the caller still has to run.
    pub fn apply(&mut self, event: ConversationEvent) -> Vec<Effect> {
        let before = (self.conversation.len(), self.conversation.is_busy());
        let conversation = mem::take(&mut self.conversation);
        let transition = conversation.transition(event);
        self.conversation = transition.conversation;

        // Rejected submissions leave the view and the scroll position alone.
        if before != (self.conversation.len(), self.conversation.is_busy()) {
            self.sync_dependants();
            self.scroll.last();
        }

        return transition.effects;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.lines = ChatView::lines(
            &self.conversation,
            self.responder_name.indicator_text(),
            self.last_known_width.into(),
        );

        let lines_len = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(lines_len, self.last_known_height);
    }
}
