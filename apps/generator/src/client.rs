//! HTTP client for the flashcard generation service.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{GenerateError, Result};
use crate::settings::GeneratorSettings;
use flashcard_core::{Flashcard, GenerateRequest};

/// Path of the generation endpoint relative to the backend URL.
pub const GENERATE_PATH: &str = "/api/generate";

/// Anything that can turn a request into cards.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Issue one request and wait for its single response.
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Flashcard>>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    cards: Vec<Flashcard>,
}

/// Client for a remote generation service.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    client: Client,
    backend_url: String,
    simulate: bool,
    language: Option<String>,
}

impl HttpGenerationClient {
    pub fn new(settings: &GeneratorSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    /// Use a preconfigured reqwest client (timeouts, proxies, TLS).
    pub fn with_client(client: Client, settings: &GeneratorSettings) -> Self {
        Self {
            client,
            backend_url: settings.backend_url.trim_end_matches('/').to_string(),
            simulate: settings.simulate,
            language: settings.language.clone(),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Flashcard>> {
        let url = format!("{}{}", self.backend_url, GENERATE_PATH);
        let body = request
            .clone()
            .with_simulate(request.simulate || self.simulate)
            .with_language(request.language.clone().or_else(|| self.language.clone()));

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(GenerateError::network)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GenerateError::status(status, &message));
        }

        let response: GenerateResponse = resp.json().await.map_err(GenerateError::parse)?;
        Ok(response.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let settings = GeneratorSettings::default().with_backend_url("http://host:1234//");
        let client = HttpGenerationClient::new(&settings);
        assert_eq!(client.backend_url(), "http://host:1234");
    }

    #[test]
    fn test_response_requires_cards() {
        let result: std::result::Result<GenerateResponse, _> =
            serde_json::from_str(r#"{"items":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_preserves_order() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"cards":[
                {"question":"b","answer":"2","tags":[],"type":"Standard"},
                {"question":"a","answer":"1","tags":[],"type":"Standard"}
            ]}"#,
        )
        .unwrap();
        let questions: Vec<_> = response.cards.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(questions, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_failure() {
        // Port 9 (discard) on loopback is closed in test environments.
        let settings = GeneratorSettings::default().with_backend_url("http://127.0.0.1:9");
        let client =
            HttpGenerationClient::with_client(Client::builder().no_proxy().build().unwrap(), &settings);
        let mut text = flashcard_core::SourceText::new();
        text.set("hello");
        let request =
            GenerateRequest::new(&text, &flashcard_core::GenerationConfig::default()).unwrap();

        let error = client.generate(&request).await.unwrap_err();
        assert!(matches!(error, GenerateError::Failure { .. }));
    }
}
