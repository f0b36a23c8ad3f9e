#[cfg(test)]
#[path = "responder_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ResponderName {
    Keyword,
    Research,
    ResearchHttp,
}

impl ResponderName {
    pub fn parse(text: String) -> Option<ResponderName> {
        return ResponderName::iter().find(|e| return e.to_string() == text);
    }

    /// First assistant message of every new conversation.
    pub fn welcome_text(&self) -> &'static str {
        match self {
            ResponderName::Keyword => {
                return "Hi there! I'm your AI assistant. How can I help you today?";
            }
            ResponderName::Research | ResponderName::ResearchHttp => {
                return "Hi there! I'm your AI research assistant. I can search across multiple AI models for the best answers using HTML, CSS, JavaScript, and Python.";
            }
        }
    }

    /// Shown after the last message while a reply is outstanding.
    pub fn indicator_text(&self) -> &'static str {
        match self {
            ResponderName::Keyword => return "typing...",
            ResponderName::Research | ResponderName::ResearchHttp => {
                return "Researching across multiple AI models (HTML, CSS, JS, Python)...";
            }
        }
    }
}

pub struct ResponderPrompt {
    pub text: String,
}

impl ResponderPrompt {
    pub fn new(text: String) -> ResponderPrompt {
        return ResponderPrompt { text };
    }
}

#[async_trait]
pub trait Responder {
    /// Returns the name of the responder.
    fn name(&self) -> ResponderName;

    /// Produces the assistant reply for the most recent user text. Any
    /// artificial delay is awaited inside this call, so the returned message
    /// is ready to be appended as-is.
    async fn get_reply(&self, prompt: ResponderPrompt) -> Result<Message>;
}

pub type ResponderBox = Box<dyn Responder + Send + Sync>;
