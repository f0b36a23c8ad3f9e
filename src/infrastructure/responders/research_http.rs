#[cfg(test)]
#[path = "research_http_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::Responder;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::Source;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ResearchRequest {
    query: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ResearchResponse {
    text: String,
    #[serde(default)]
    sources: Vec<Source>,
}

/// Forwards the query to an external research service over HTTP.
pub struct ResearchHttp {
    url: String,
}

impl Default for ResearchHttp {
    fn default() -> ResearchHttp {
        return ResearchHttp::new(Config::get(ConfigKey::ResearchURL));
    }
}

impl ResearchHttp {
    pub fn new(url: String) -> ResearchHttp {
        return ResearchHttp { url };
    }
}

#[async_trait]
impl Responder for ResearchHttp {
    fn name(&self) -> ResponderName {
        return ResponderName::ResearchHttp;
    }

    #[allow(clippy::implicit_return)]
    async fn get_reply(&self, prompt: ResponderPrompt) -> Result<Message> {
        if self.url.is_empty() {
            bail!("Research URL is not defined");
        }

        let req = ResearchRequest { query: prompt.text };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/api/research",
                url = self.url.trim_end_matches('/')
            ))
            .json(&req)
            .send()
            .await;

        if let Err(err) = res {
            tracing::error!(error = ?err, "Research service is not reachable");
            bail!("Research service is not reachable");
        }

        let res = res?;
        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to get research results"
            );
            bail!("Failed to get research results");
        }

        let body = res.json::<ResearchResponse>().await?;
        tracing::debug!(body = ?body, "Research response");

        return Ok(Message::new(Author::Assistant, &body.text).with_sources(body.sources));
    }
}
