//! Core flashcard generation library.
//!
//! Provides:
//! - Generation config model with range validation
//! - Bounded source text holder
//! - Generation request snapshot
//! - CSV export encoder with injectable clock
//! - Shared types (Flashcard, Difficulty, CardType, etc.)

pub mod error;
pub mod export;
pub mod request;
pub mod source;
pub mod types;

pub use error::{Result, ValidationError};
pub use export::{export_filename, to_csv, Clock, CsvExport, FixedClock, SystemClock, CSV_HEADERS};
pub use request::GenerateRequest;
pub use source::{SourceText, DEFAULT_MAX_LENGTH};
pub use types::{CardType, ConfigField, Difficulty, Flashcard, GenerationConfig};
