//! Bounded holder for the source text cards are generated from.

/// Default upper bound on source text length.
pub const DEFAULT_MAX_LENGTH: usize = 50_000;

/// Source text that never exceeds its maximum length.
///
/// Length is measured in UTF-16 code units, the same unit a browser text
/// field counts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    value: String,
    max_length: usize,
}

impl Default for SourceText {
    fn default() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }
}

impl SourceText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty holder with a custom bound.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            value: String::new(),
            max_length,
        }
    }

    /// Replace the stored text.
    ///
    /// Input longer than the bound is rejected whole and the previous value
    /// is kept. Returns whether the update was applied.
    pub fn set(&mut self, new_text: impl Into<String>) -> bool {
        let new_text = new_text.into();
        if utf16_len(&new_text) > self.max_length {
            return false;
        }
        self.value = new_text;
        true
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        utf16_len(&self.value)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True when the text is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Counter shown next to the input, e.g. `12 / 50000`.
    pub fn char_count_label(&self) -> String {
        format!("{} / {}", self.len(), self.max_length)
    }
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
