// File: src/core/array.rs
use crate::core::dictionary::{ensure_unique, top_k, Dictionary, AUTOCOMPLETE_LIMIT};
use crate::core::types::{Frequency, WordFrequency};
use crate::error::Result;

/// A contiguous vector kept strictly increasing by word.
///
/// Lookups are O(log n); insertions and deletions shift the tail, O(n).
#[derive(Debug, Clone, Default)]
pub struct OrderedArrayDictionary {
    entries: Vec<WordFrequency>,
}

impl OrderedArrayDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first entry whose word is >= `word`.
    fn lower_bound(&self, word: &str) -> usize {
        self.entries.partition_point(|entry| entry.word() < word)
    }

    /// Index of `word` if stored.
    fn position(&self, word: &str) -> Option<usize> {
        let idx = self.lower_bound(word);
        match self.entries.get(idx) {
            Some(entry) if entry.word() == word => Some(idx),
            _ => None,
        }
    }

    /// Stored entries in word order.
    pub fn entries(&self) -> &[WordFrequency] {
        &self.entries
    }
}

impl Dictionary for OrderedArrayDictionary {
    fn build_dictionary(&mut self, mut entries: Vec<WordFrequency>) -> Result<()> {
        ensure_unique(&entries)?;
        entries.sort_unstable();
        tracing::debug!(backend = "array", entries = entries.len(), "built dictionary");
        self.entries = entries;
        Ok(())
    }

    fn get(&self, word: &str) -> Option<Frequency> {
        self.position(word).map(|idx| self.entries[idx].frequency())
    }

    fn add_word_frequency(&mut self, entry: WordFrequency) -> bool {
        let idx = self.lower_bound(entry.word());
        if matches!(self.entries.get(idx), Some(existing) if existing.word() == entry.word()) {
            return false;
        }
        self.entries.insert(idx, entry);
        true
    }

    fn delete_word(&mut self, word: &str) -> bool {
        match self.position(word) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        // Matches are contiguous from the lower bound of the prefix.
        let start = self.lower_bound(prefix);
        let candidates: Vec<WordFrequency> = self.entries[start..]
            .iter()
            .take_while(|entry| entry.word().starts_with(prefix))
            .cloned()
            .collect();
        top_k(candidates, AUTOCOMPLETE_LIMIT)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wf(word: &str, frequency: Frequency) -> WordFrequency {
        WordFrequency::new(word, frequency).unwrap()
    }

    fn is_strictly_sorted(dict: &OrderedArrayDictionary) -> bool {
        dict.entries().windows(2).all(|pair| pair[0].word() < pair[1].word())
    }

    #[test]
    fn test_build_sorts_input() {
        let mut dict = OrderedArrayDictionary::new();
        dict.build_dictionary(vec![wf("pear", 1), wf("apple", 2), wf("fig", 3)])
            .unwrap();
        let words: Vec<&str> = dict.entries().iter().map(|e| e.word()).collect();
        assert_eq!(words, ["apple", "fig", "pear"]);
    }

    #[test]
    fn test_mutations_keep_order() {
        let mut dict = OrderedArrayDictionary::new();
        dict.build_dictionary(vec![wf("m", 1), wf("c", 1), wf("x", 1)]).unwrap();
        assert!(dict.add_word_frequency(wf("a", 2)));
        assert!(dict.add_word_frequency(wf("z", 2)));
        assert!(dict.add_word_frequency(wf("n", 2)));
        assert!(dict.delete_word("m"));
        assert!(is_strictly_sorted(&dict));
        assert_eq!(dict.len(), 5);
    }

    #[test]
    fn test_autocomplete_stops_at_first_non_match() {
        let mut dict = OrderedArrayDictionary::new();
        dict.build_dictionary(vec![
            wf("car", 4),
            wf("card", 9),
            wf("care", 1),
            wf("cat", 20),
            wf("carzz", 2),
        ])
        .unwrap();
        let words: Vec<String> = dict
            .autocomplete("car")
            .into_iter()
            .map(|e| e.word().to_string())
            .collect();
        assert_eq!(words, ["card", "car", "carzz"]);
    }

    #[test]
    fn test_ties_follow_word_order() {
        let mut dict = OrderedArrayDictionary::new();
        dict.build_dictionary(vec![wf("bd", 5), wf("bb", 5), wf("bc", 5), wf("ba", 5)])
            .unwrap();
        let words: Vec<String> = dict
            .autocomplete("b")
            .into_iter()
            .map(|e| e.word().to_string())
            .collect();
        assert_eq!(words, ["ba", "bb", "bc"]);
    }

    #[test]
    fn test_failed_build_leaves_state() {
        let mut dict = OrderedArrayDictionary::new();
        dict.build_dictionary(vec![wf("keep", 1)]).unwrap();
        assert!(dict.build_dictionary(vec![wf("a", 1), wf("a", 2)]).is_err());
        assert_eq!(dict.search("keep"), 1);
    }
}
