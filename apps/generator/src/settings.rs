//! Generator settings supplied by the host application.

use flashcard_core::DEFAULT_MAX_LENGTH;
use serde::Deserialize;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive, e.g. `info` or `flashcard_generator=debug`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Settings for the generation client and session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub backend_url: String,
    /// Ask the service for simulated cards instead of model output.
    pub simulate: bool,
    /// Output language forwarded to the service.
    pub language: Option<String>,
    pub max_text_length: usize,
    pub log: LogSettings,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            simulate: false,
            language: None,
            max_text_length: DEFAULT_MAX_LENGTH,
            log: LogSettings::default(),
        }
    }
}

impl GeneratorSettings {
    /// Parse from a JSON document; missing keys take defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }
}
