//! Error handling for card generation.

use flashcard_core::ValidationError;
use thiserror::Error;

/// Message shown for every service-side failure.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "Failed to generate cards. Please check your connection and try again.";

/// Generation error types.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network, status or schema failure. `cause` is for logs only.
    #[error("Generation failed: {cause}")]
    Failure { cause: String },
}

impl GenerateError {
    pub fn network(e: impl std::fmt::Display) -> Self {
        Self::Failure {
            cause: format!("network error: {}", e),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::Failure {
            cause: format!("service returned {}: {}", status, body),
        }
    }

    pub fn parse(e: impl std::fmt::Display) -> Self {
        Self::Failure {
            cause: format!("malformed response: {}", e),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Text safe to show the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Failure { .. } => GENERATION_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
