#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::Local;

use super::Author;
use super::Source;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub sources: Vec<Source>,
    pub timestamp: String,
    mtype: MessageType,
}

fn now_timestamp() -> String {
    return Local::now().format("%H:%M").to_string();
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string(),
            sources: vec![],
            timestamp: now_timestamp(),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string(),
            sources: vec![],
            timestamp: now_timestamp(),
            mtype,
        };
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Message {
        self.sources = sources;
        return self;
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }
}
