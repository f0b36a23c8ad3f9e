#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

/// Citation-like tag attached to a research reply. Purely decorative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub confidence: f64,
    pub language: String,
}

impl Source {
    pub fn new(name: &str, confidence: f64, language: &str) -> Source {
        return Source {
            name: name.to_string(),
            confidence,
            language: language.to_string(),
        };
    }

    /// Confidence as a whole percentage, clamped to 0..=100.
    pub fn percentage(&self) -> u8 {
        let pct = (self.confidence.clamp(0.0, 1.0) * 100.0).round();
        return pct as u8;
    }

    pub fn format(&self) -> String {
        return format!("{} ({}%) - {}", self.name, self.percentage(), self.language);
    }
}
