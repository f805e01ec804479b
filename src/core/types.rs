// src/core/types.rs
use crate::error::{DictionaryError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Raw occurrence count attached to a word. The only ranking signal.
pub type Frequency = u64;

/// An immutable (word, frequency) pair.
///
/// Equality and ordering are defined by `word` alone; `frequency` is payload.
/// The word is never empty: `new` rejects it, so every backend can rely on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawWordFrequency")]
pub struct WordFrequency {
    word: String,
    frequency: Frequency,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, frequency: Frequency) -> Result<Self> {
        let word = word.into();
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }
        Ok(Self { word, frequency })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn into_parts(self) -> (String, Frequency) {
        (self.word, self.frequency)
    }
}

impl PartialEq for WordFrequency {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordFrequency {}

impl PartialOrd for WordFrequency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordFrequency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.frequency)
    }
}

// Deserialization goes through `new` so the non-empty rule holds for JSON input too.
#[derive(Deserialize)]
struct RawWordFrequency {
    word: String,
    frequency: Frequency,
}

impl TryFrom<RawWordFrequency> for WordFrequency {
    type Error = DictionaryError;

    fn try_from(raw: RawWordFrequency) -> Result<Self> {
        Self::new(raw.word, raw.frequency)
    }
}
