#[cfg(test)]
#[path = "research_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::time;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::Responder;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::Source;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Builds the templated multi-model answer. Only the query is embedded, the
/// rest of the reply and the sources never change.
pub fn research_reply(query: &str) -> Message {
    let text = format!(
        "Based on research across multiple AI models, here's the best answer for \"{query}\"...\n\nThis would be implemented using HTML, CSS, JavaScript for the frontend and Python for the backend processing of multiple AI model responses."
    );

    return Message::new(Author::Assistant, &text).with_sources(vec![
        Source::new("GPT-4", 0.92, "Python/JS"),
        Source::new("Gemini", 0.89, "HTML/CSS"),
        Source::new("Claude", 0.87, "JavaScript"),
    ]);
}

/// In-process stand-in for the research service.
pub struct Research {
    delay: Duration,
}

impl Default for Research {
    fn default() -> Research {
        return Research::new(DEFAULT_DELAY);
    }
}

impl Research {
    pub fn new(delay: Duration) -> Research {
        return Research { delay };
    }
}

#[async_trait]
impl Responder for Research {
    fn name(&self) -> ResponderName {
        return ResponderName::Research;
    }

    #[allow(clippy::implicit_return)]
    async fn get_reply(&self, prompt: ResponderPrompt) -> Result<Message> {
        if prompt.text.is_empty() {
            bail!("Query is required");
        }

        time::sleep(self.delay).await;

        return Ok(research_reply(&prompt.text));
    }
}
