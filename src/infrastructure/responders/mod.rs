pub mod keyword;
pub mod research;
pub mod research_http;

use std::time::Duration;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ResponderBox;
use crate::domain::models::ResponderName;

pub struct ResponderManager {}

impl ResponderManager {
    pub fn get(name: ResponderName) -> Result<ResponderBox> {
        let delay = ResponderManager::configured_delay()?;

        match name {
            ResponderName::Keyword => {
                return Ok(Box::new(keyword::Keyword::new(
                    delay.unwrap_or(keyword::DEFAULT_DELAY),
                )));
            }
            ResponderName::Research => {
                return Ok(Box::new(research::Research::new(
                    delay.unwrap_or(research::DEFAULT_DELAY),
                )));
            }
            ResponderName::ResearchHttp => {
                return Ok(Box::<research_http::ResearchHttp>::default());
            }
        }
    }

    fn configured_delay() -> Result<Option<Duration>> {
        let delay = Config::get(ConfigKey::ResponseDelay);
        if delay.is_empty() {
            return Ok(None);
        }

        return Ok(Some(Duration::from_millis(delay.parse::<u64>()?)));
    }
}
