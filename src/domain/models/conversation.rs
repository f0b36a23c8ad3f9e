#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use super::Author;
use super::Message;
use super::MessageType;

pub const FALLBACK_REPLY: &str =
    "I'm sorry, there was an error processing your request. Please try again.";

/// Inputs that advance a conversation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversationEvent {
    Submit(String),
    ResponseReceived(Message),
    ResponseFailed,
}

/// Work the caller must perform after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Ask the responder for a reply to the given user text.
    RequestReply(String),
}

#[derive(Debug)]
pub struct Transition {
    pub conversation: Conversation,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn new(conversation: Conversation) -> Transition {
        return Transition {
            conversation,
            effects: vec![],
        };
    }

    fn with_effect(mut self, effect: Effect) -> Transition {
        self.effects.push(effect);
        return self;
    }
}

/// Append-only message log plus the busy flag gating new submissions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
    busy: bool,
}

impl Conversation {
    pub fn new(welcome: Message) -> Conversation {
        return Conversation {
            messages: vec![welcome],
            busy: false,
        };
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn is_busy(&self) -> bool {
        return self.busy;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn last(&self) -> Option<&Message> {
        return self.messages.last();
    }

    /// Advances the conversation by one event. Rejected submissions return the
    /// conversation untouched and without effects.
    pub fn transition(mut self, event: ConversationEvent) -> Transition {
        match event {
            ConversationEvent::Submit(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || self.busy {
                    tracing::debug!(busy = self.busy, "Ignoring submission");
                    return Transition::new(self);
                }

                let trimmed = trimmed.to_string();
                self.messages.push(Message::new(Author::User, &trimmed));
                self.busy = true;

                return Transition::new(self).with_effect(Effect::RequestReply(trimmed));
            }
            ConversationEvent::ResponseReceived(message) => {
                self.messages.push(message);
                self.busy = false;

                return Transition::new(self);
            }
            ConversationEvent::ResponseFailed => {
                self.messages.push(Message::new_with_type(
                    Author::Assistant,
                    MessageType::Error,
                    FALLBACK_REPLY,
                ));
                self.busy = false;

                return Transition::new(self);
            }
        }
    }
}
