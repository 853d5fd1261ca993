//! Flashcard generation session: HTTP client, state machine and export.

pub mod client;
pub mod delivery;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod settings;

use std::sync::Arc;

use flashcard_core::Clock;

pub use client::{GenerationClient, HttpGenerationClient, GENERATE_PATH};
pub use delivery::{Delivered, DirectoryDelivery, FileDelivery, MemoryDelivery};
pub use error::{GenerateError, Result, GENERATION_FAILURE_MESSAGE};
pub use orchestrator::{GenerateOutcome, GenerationState, Orchestrator};
pub use settings::{GeneratorSettings, LogSettings};

/// Set up logging and build a session wired to the remote service.
///
/// The clock and delivery come from the host shell.
pub fn start(
    settings: &GeneratorSettings,
    clock: Arc<dyn Clock>,
    delivery: Arc<dyn FileDelivery>,
) -> anyhow::Result<Orchestrator> {
    logging::init(&settings.log)?;

    tracing::info!(backend = %settings.backend_url, "starting generator session");
    Ok(Orchestrator::from_settings(settings, clock, delivery))
}
