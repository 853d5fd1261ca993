//! Core types for flashcard generation.

use serde::{Deserialize, Deserializer, Serialize};

/// Difficulty level requested from the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Mixed
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Mixed,
    ];

    /// Get the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Mixed => "Mixed",
        }
    }

    /// Parse from the wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

/// Kind of card requested from the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Standard,
    MultipleChoice,
    TrueFalse,
    Mixed,
}

impl Default for CardType {
    fn default() -> Self {
        Self::Standard
    }
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        Self::Standard,
        Self::MultipleChoice,
        Self::TrueFalse,
        Self::Mixed,
    ];

    /// Get the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::MultipleChoice => "MultipleChoice",
            Self::TrueFalse => "TrueFalse",
            Self::Mixed => "Mixed",
        }
    }

    /// Parse from the wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// A generated question/answer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(rename = "type", default = "default_card_type")]
    pub card_type: String,
}

impl Flashcard {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        tags: Vec<String>,
        card_type: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            tags,
            card_type: card_type.into(),
        }
    }
}

fn default_card_type() -> String {
    CardType::Standard.as_str().to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<String>),
    Joined(String),
}

/// Tags arrive either as a list or as one comma-separated string.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsRepr>::deserialize(deserializer)? {
        Some(TagsRepr::List(tags)) => tags,
        Some(TagsRepr::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };
    Ok(tags)
}

/// User-tunable generation parameters.
///
/// Treated as an immutable snapshot: every edit goes through [`GenerationConfig::set`]
/// and produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub difficulty: Difficulty,
    pub card_type: CardType,
    pub total_cards: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Mixed,
            card_type: CardType::Standard,
            total_cards: 10,
        }
    }
}

/// A single edit to a [`GenerationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Difficulty(Difficulty),
    CardType(CardType),
    /// Raw user input; may be out of range.
    TotalCards(i64),
}

impl GenerationConfig {
    pub const MIN_CARDS: u32 = 1;
    pub const MAX_CARDS: u32 = 100;

    /// Apply one edit and return the resulting snapshot.
    ///
    /// Out-of-range card counts are ignored and the current value is kept.
    pub fn set(&self, field: ConfigField) -> GenerationConfig {
        match field {
            ConfigField::Difficulty(difficulty) => Self {
                difficulty,
                ..*self
            },
            ConfigField::CardType(card_type) => Self {
                card_type,
                ..*self
            },
            ConfigField::TotalCards(value) => match Self::valid_total(value) {
                Some(total_cards) => Self {
                    total_cards,
                    ..*self
                },
                None => *self,
            },
        }
    }

    /// The default snapshot.
    pub fn reset() -> GenerationConfig {
        Self::default()
    }

    fn valid_total(value: i64) -> Option<u32> {
        u32::try_from(value)
            .ok()
            .filter(|v| (Self::MIN_CARDS..=Self::MAX_CARDS).contains(v))
    }
}
