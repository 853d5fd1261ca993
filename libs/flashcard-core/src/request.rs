//! Outbound generation request.

use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::source::SourceText;
use crate::types::{CardType, Difficulty, GenerationConfig};

/// Snapshot of text and config taken when generation is triggered.
///
/// Owns its data, so later edits to the session never reach an in-flight
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub text: String,
    pub difficulty: Difficulty,
    pub card_type: CardType,
    pub total_cards: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub simulate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl GenerateRequest {
    /// Build a request, failing if the text is blank.
    pub fn new(text: &SourceText, config: &GenerationConfig) -> Result<Self> {
        if text.is_blank() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self {
            text: text.as_str().to_string(),
            difficulty: config.difficulty,
            card_type: config.card_type,
            total_cards: config.total_cards,
            simulate: false,
            language: None,
        })
    }

    pub fn with_simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(s: &str) -> SourceText {
        let mut t = SourceText::new();
        t.set(s);
        t
    }

    #[test]
    fn rejects_blank_text() {
        let result = GenerateRequest::new(&text("   "), &GenerationConfig::default());
        assert_eq!(result, Err(ValidationError::EmptyText));
    }

    #[test]
    fn wire_body_has_snake_case_fields_only() {
        let request =
            GenerateRequest::new(&text("The sky is blue."), &GenerationConfig::default()).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "text": "The sky is blue.",
                "difficulty": "Mixed",
                "card_type": "Standard",
                "total_cards": 10,
            })
        );
    }

    #[test]
    fn wire_body_with_extras() {
        let request = GenerateRequest::new(&text("x"), &GenerationConfig::default())
            .unwrap()
            .with_simulate(true)
            .with_language(Some("English".to_string()));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["simulate"], true);
        assert_eq!(body["language"], "English");
    }

    #[test]
    fn keeps_original_text_untrimmed() {
        let request = GenerateRequest::new(&text("  padded  "), &GenerationConfig::default())
            .unwrap();
        assert_eq!(request.text, "  padded  ");
    }
}
