//! CSV export of generated cards.
//!
//! # Format
//! ```text
//! Question,Answer,Tags,Type
//! "Q1","A1","a, b","Standard"
//! ```
//!
//! Every field is quoted and embedded quotes are doubled. Commas and
//! newlines inside a field need no further escaping once quoted.

use chrono::{Local, NaiveDateTime};

use crate::types::Flashcard;

/// Column order shared by the header and every row.
pub const CSV_HEADERS: [&str; 4] = ["Question", "Answer", "Tags", "Type"];

/// Source of the export timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// An encoded CSV document and the file name to save it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub content: String,
    pub filename: String,
}

/// Encode cards as CSV.
///
/// Returns `None` for an empty card list; there is nothing to export.
pub fn to_csv(cards: &[Flashcard], card_type: &str, now: NaiveDateTime) -> Option<CsvExport> {
    if cards.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(cards.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(cards.iter().map(encode_row));

    Some(CsvExport {
        content: lines.join("\n"),
        filename: export_filename(card_type, now),
    })
}

/// `cards_<type>_<YYYYMMDD>_<HHMM>.csv`
pub fn export_filename(card_type: &str, now: NaiveDateTime) -> String {
    format!(
        "cards_{}_{}.csv",
        card_type.to_lowercase(),
        now.format("%Y%m%d_%H%M")
    )
}

fn encode_row(card: &Flashcard) -> String {
    let tags = card.tags.join(", ");
    [
        card.question.as_str(),
        card.answer.as_str(),
        tags.as_str(),
        card.card_type.as_str(),
    ]
    .iter()
    .map(|field| quote(field))
    .collect::<Vec<_>>()
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
