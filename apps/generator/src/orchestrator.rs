//! Generation session state machine.
//!
//! ```text
//! Idle ──generate──▶ Validating ──blank──▶ Failed
//!                        │
//!                        └──ok──▶ Requesting ──▶ ResultsReady | Failed
//! ```
//!
//! `Failed` and `ResultsReady` accept a new `generate` the same way `Idle`
//! does. While `Requesting`, further triggers are ignored. `Validating` is
//! transient: it is entered and left under one session lock, so `state()`
//! never reports it.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::{GenerationClient, HttpGenerationClient};
use crate::delivery::FileDelivery;
use crate::error::{GenerateError, GENERATION_FAILURE_MESSAGE};
use crate::settings::GeneratorSettings;
use flashcard_core::{
    to_csv, Clock, ConfigField, CsvExport, Flashcard, GenerateRequest, GenerationConfig,
    SourceText,
};

/// Generation status for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum GenerationState {
    Idle,
    Validating,
    Requesting,
    ResultsReady { cards: Vec<Flashcard> },
    Failed { message: String },
}

impl GenerationState {
    pub fn is_requesting(&self) -> bool {
        matches!(self, Self::Requesting)
    }
}

/// What a `generate` trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Cards received; holds the count.
    Completed(usize),
    /// Blank text; no request was sent.
    Rejected,
    /// The service call failed.
    Failed,
    /// Another generation was already in flight.
    Ignored,
}

struct Session {
    text: SourceText,
    config: GenerationConfig,
    state: GenerationState,
}

struct OrchestratorInner {
    client: Arc<dyn GenerationClient>,
    clock: Arc<dyn Clock>,
    delivery: Arc<dyn FileDelivery>,
    session: Mutex<Session>,
}

/// Owns the session (text, config, result slot) and drives generation.
///
/// Clone-able; clones share the same session.
#[derive(Clone)]
pub struct Orchestrator {
    inner: Arc<OrchestratorInner>,
}

impl Orchestrator {
    pub fn new(
        client: Arc<dyn GenerationClient>,
        clock: Arc<dyn Clock>,
        delivery: Arc<dyn FileDelivery>,
        max_text_length: usize,
    ) -> Self {
        Self {
            inner: Arc::new(OrchestratorInner {
                client,
                clock,
                delivery,
                session: Mutex::new(Session {
                    text: SourceText::with_max_length(max_text_length),
                    config: GenerationConfig::default(),
                    state: GenerationState::Idle,
                }),
            }),
        }
    }

    /// Build with an HTTP client configured from settings.
    pub fn from_settings(
        settings: &GeneratorSettings,
        clock: Arc<dyn Clock>,
        delivery: Arc<dyn FileDelivery>,
    ) -> Self {
        Self::new(
            Arc::new(HttpGenerationClient::new(settings)),
            clock,
            delivery,
            settings.max_text_length,
        )
    }

    // === Session edits ===

    /// Replace the source text. Over-long input is dropped.
    pub async fn set_text(&self, text: impl Into<String>) -> bool {
        let mut session = self.inner.session.lock().await;
        let applied = session.text.set(text);
        if !applied {
            tracing::debug!(max = session.text.max_length(), "text over limit; edit rejected");
        }
        applied
    }

    pub async fn set_config(&self, field: ConfigField) -> GenerationConfig {
        let mut session = self.inner.session.lock().await;
        let updated = session.config.set(field);
        if updated == session.config {
            tracing::debug!(?field, "config edit had no effect");
        }
        session.config = updated;
        updated
    }

    /// Restore default config. Generation state is untouched.
    pub async fn reset_config(&self) -> GenerationConfig {
        let mut session = self.inner.session.lock().await;
        session.config = GenerationConfig::reset();
        session.config
    }

    /// Clear text, config and results. Ignored while a request is in flight.
    pub async fn reset(&self) -> bool {
        let mut session = self.inner.session.lock().await;
        if session.state.is_requesting() {
            return false;
        }
        session.text.clear();
        session.config = GenerationConfig::reset();
        session.state = GenerationState::Idle;
        true
    }

    // === Queries ===

    pub async fn state(&self) -> GenerationState {
        self.inner.session.lock().await.state.clone()
    }

    pub async fn config(&self) -> GenerationConfig {
        self.inner.session.lock().await.config
    }

    pub async fn text(&self) -> String {
        self.inner.session.lock().await.text.as_str().to_string()
    }

    pub async fn char_count_label(&self) -> String {
        self.inner.session.lock().await.text.char_count_label()
    }

    /// Whether a generate trigger would start a request right now.
    pub async fn can_generate(&self) -> bool {
        let session = self.inner.session.lock().await;
        !session.state.is_requesting() && !session.text.is_blank()
    }

    /// Cards from the last successful generation, in service order.
    pub async fn preview(&self) -> Vec<Flashcard> {
        match &self.inner.session.lock().await.state {
            GenerationState::ResultsReady { cards } => cards.clone(),
            _ => Vec::new(),
        }
    }

    // === Actions ===

    /// Validate, send one request and store its outcome.
    pub async fn generate(&self) -> GenerateOutcome {
        let request = {
            let mut session = self.inner.session.lock().await;
            if session.state.is_requesting() {
                tracing::debug!("generation in flight; trigger ignored");
                return GenerateOutcome::Ignored;
            }

            session.state = GenerationState::Validating;
            match GenerateRequest::new(&session.text, &session.config) {
                Ok(request) => {
                    session.state = GenerationState::Requesting;
                    request
                }
                Err(e) => {
                    session.state = GenerationState::Failed {
                        message: e.to_string(),
                    };
                    return GenerateOutcome::Rejected;
                }
            }
        };

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "generate",
            %request_id,
            difficulty = request.difficulty.as_str(),
            card_type = request.card_type.as_str(),
            total_cards = request.total_cards,
        );

        // Run on its own task so the request settles even if the caller goes away.
        let this = self.clone();
        let task = tokio::spawn(async move { this.send_and_settle(request).await }.instrument(span));

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "generation task aborted");
                self.settle(Err(GenerateError::Failure {
                    cause: e.to_string(),
                }))
                .await
            }
        }
    }

    async fn send_and_settle(&self, request: GenerateRequest) -> GenerateOutcome {
        tracing::info!(text_len = request.text.len(), "requesting cards");
        let result = self.inner.client.generate(&request).await;
        self.settle(result).await
    }

    async fn settle(&self, result: Result<Vec<Flashcard>, GenerateError>) -> GenerateOutcome {
        let mut session = self.inner.session.lock().await;
        match result {
            Ok(cards) => {
                let count = cards.len();
                tracing::info!(count, "cards received");
                session.state = GenerationState::ResultsReady { cards };
                GenerateOutcome::Completed(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                session.state = GenerationState::Failed {
                    message: GENERATION_FAILURE_MESSAGE.to_string(),
                };
                GenerateOutcome::Failed
            }
        }
    }

    /// Encode the current results as CSV. `None` when there are no cards.
    pub async fn export(&self) -> Option<CsvExport> {
        let session = self.inner.session.lock().await;
        let cards: &[Flashcard] = match &session.state {
            GenerationState::ResultsReady { cards } => cards.as_slice(),
            _ => &[],
        };
        to_csv(cards, session.config.card_type.as_str(), self.inner.clock.now())
    }

    /// Export and hand the file to the delivery. Returns the filename, or
    /// `None` without delivering when there is nothing to export.
    pub async fn download(&self) -> anyhow::Result<Option<String>> {
        let Some(export) = self.export().await else {
            tracing::debug!("no cards to export");
            return Ok(None);
        };
        self.inner
            .delivery
            .deliver(&export.content, &export.filename)?;
        Ok(Some(export.filename))
    }
}
