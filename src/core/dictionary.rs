// File: src/core/dictionary.rs
use crate::core::array::OrderedArrayDictionary;
use crate::core::linked_list::LinkedListDictionary;
use crate::core::trie::{PrunePolicy, TrieDictionary};
use crate::core::types::{Frequency, WordFrequency};
use crate::error::{DictionaryError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Maximum number of completions returned by `autocomplete`.
pub const AUTOCOMPLETE_LIMIT: usize = 3;

/// The capability set shared by every backend.
///
/// Backends are interchangeable: given the same inputs they agree on every
/// lookup, insertion and deletion result, and on autocomplete results up to
/// the order of entries tied on frequency.
pub trait Dictionary {
    /// Replaces the current contents with `entries` (any order).
    ///
    /// Fails with `DuplicateWord` without touching the current state if a word
    /// appears more than once.
    fn build_dictionary(&mut self, entries: Vec<WordFrequency>) -> Result<()>;

    /// Stored frequency of `word`, or `None` when it is absent.
    fn get(&self, word: &str) -> Option<Frequency>;

    /// Stored frequency of `word`, or `0` when it is absent.
    fn search(&self, word: &str) -> Frequency {
        self.get(word).unwrap_or(0)
    }

    /// Inserts `entry` unless its word is already stored. Returns whether it was inserted.
    fn add_word_frequency(&mut self, entry: WordFrequency) -> bool;

    /// Removes `word`. Returns whether it was present.
    fn delete_word(&mut self, word: &str) -> bool;

    /// Up to `AUTOCOMPLETE_LIMIT` stored words starting with `prefix`, highest frequency first.
    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency>;

    /// Number of stored words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn build_dictionary(&mut self, entries: Vec<WordFrequency>) -> Result<()> {
        (**self).build_dictionary(entries)
    }

    fn get(&self, word: &str) -> Option<Frequency> {
        (**self).get(word)
    }

    fn search(&self, word: &str) -> Frequency {
        (**self).search(word)
    }

    fn add_word_frequency(&mut self, entry: WordFrequency) -> bool {
        (**self).add_word_frequency(entry)
    }

    fn delete_word(&mut self, word: &str) -> bool {
        (**self).delete_word(word)
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        (**self).autocomplete(prefix)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Keeps the `k` highest-frequency candidates, descending.
///
/// The sort is stable, so entries tied on frequency keep their collection order.
pub fn top_k(mut candidates: Vec<WordFrequency>, k: usize) -> Vec<WordFrequency> {
    candidates.sort_by_key(|entry| Reverse(entry.frequency()));
    candidates.truncate(k);
    candidates
}

/// Rejects build input that repeats a word.
pub(crate) fn ensure_unique(entries: &[WordFrequency]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.word()) {
            return Err(DictionaryError::DuplicateWord {
                word: entry.word().to_string(),
            });
        }
    }
    Ok(())
}

/// Selects one of the three backends at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Array,
    List,
    Trie,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Array, Backend::List, Backend::Trie];

    /// Creates an empty dictionary of this kind. `prune` only affects the trie.
    pub fn create(self, prune: PrunePolicy) -> Box<dyn Dictionary> {
        match self {
            Backend::Array => Box::new(OrderedArrayDictionary::new()),
            Backend::List => Box::new(LinkedListDictionary::new()),
            Backend::Trie => Box::new(TrieDictionary::with_policy(prune)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Array => "array",
            Backend::List => "list",
            Backend::Trie => "trie",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(Backend::Array),
            "list" | "linkedlist" => Ok(Backend::List),
            "trie" => Ok(Backend::Trie),
            other => Err(format!("unknown backend '{other}' (expected array, list or trie)")),
        }
    }
}
