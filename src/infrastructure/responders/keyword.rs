#[cfg(test)]
#[path = "keyword_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::Responder;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Picks a canned reply from the first keyword found in the input. Rules are
/// checked in order, so a greeting wins over a request for help.
pub fn get_keyword_reply(input: &str) -> &'static str {
    let lower_input = input.to_lowercase();

    if lower_input.contains("hello") || lower_input.contains("hi") {
        return "Hello! How can I assist you today?";
    }
    if lower_input.contains("help") {
        return "I'm here to help! You can ask me questions, and I'll do my best to assist you.";
    }
    if lower_input.contains("thank") {
        return "You're welcome! Is there anything else you'd like to know?";
    }
    if lower_input.contains("bye") {
        return "Goodbye! Feel free to come back if you have more questions.";
    }

    return "That's an interesting point. Can you tell me more about what you're looking for?";
}

pub struct Keyword {
    delay: Duration,
}

impl Default for Keyword {
    fn default() -> Keyword {
        return Keyword::new(DEFAULT_DELAY);
    }
}

impl Keyword {
    pub fn new(delay: Duration) -> Keyword {
        return Keyword { delay };
    }
}

#[async_trait]
impl Responder for Keyword {
    fn name(&self) -> ResponderName {
        return ResponderName::Keyword;
    }

    #[allow(clippy::implicit_return)]
    async fn get_reply(&self, prompt: ResponderPrompt) -> Result<Message> {
        time::sleep(self.delay).await;

        let reply = get_keyword_reply(&prompt.text);
        tracing::debug!(input = prompt.text.as_str(), reply, "Keyword reply");

        return Ok(Message::new(Author::Assistant, reply));
    }
}
