// File: src/core/linked_list.rs
use crate::core::dictionary::{ensure_unique, top_k, Dictionary, AUTOCOMPLETE_LIMIT};
use crate::core::types::{Frequency, WordFrequency};
use crate::error::Result;

type NodeId = usize;

#[derive(Debug, Clone)]
struct ListNode {
    entry: WordFrequency,
    next: Option<NodeId>,
}

/// An unordered singly-linked chain of entries.
///
/// Nodes live in an arena and link by index; freed slots are recycled through
/// a free list. New entries are prepended, so every operation except the
/// insertion itself is a linear scan from the head.
#[derive(Debug, Clone, Default)]
pub struct LinkedListDictionary {
    slots: Vec<Option<ListNode>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    len: usize,
}

impl LinkedListDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, id: NodeId) -> Option<&ListNode> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Walks the chain from the head.
    pub fn iter(&self) -> impl Iterator<Item = &WordFrequency> + '_ {
        std::iter::successors(self.head.and_then(|id| self.node(id)), move |node| {
            node.next.and_then(|id| self.node(id))
        })
        .map(|node| &node.entry)
    }

    fn push_front(&mut self, entry: WordFrequency) {
        let node = ListNode { entry, next: self.head };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.head = Some(id);
        self.len += 1;
    }
}

impl Dictionary for LinkedListDictionary {
    fn build_dictionary(&mut self, entries: Vec<WordFrequency>) -> Result<()> {
        ensure_unique(&entries)?;
        *self = Self::new();
        self.slots.reserve(entries.len());
        for entry in entries {
            self.push_front(entry);
        }
        tracing::debug!(backend = "list", entries = self.len, "built dictionary");
        Ok(())
    }

    fn get(&self, word: &str) -> Option<Frequency> {
        self.iter()
            .find(|entry| entry.word() == word)
            .map(WordFrequency::frequency)
    }

    fn add_word_frequency(&mut self, entry: WordFrequency) -> bool {
        if self.get(entry.word()).is_some() {
            return false;
        }
        self.push_front(entry);
        true
    }

    fn delete_word(&mut self, word: &str) -> bool {
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(node) = self.node(id) else { break };
            if node.entry.word() == word {
                let next = node.next;
                match prev {
                    Some(prev_id) => {
                        if let Some(prev_node) = self.slots[prev_id].as_mut() {
                            prev_node.next = next;
                        }
                    }
                    None => self.head = next,
                }
                self.slots[id] = None;
                self.free.push(id);
                self.len -= 1;
                return true;
            }
            prev = Some(id);
            cursor = node.next;
        }
        false
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        let candidates: Vec<WordFrequency> = self
            .iter()
            .filter(|entry| entry.word().starts_with(prefix))
            .cloned()
            .collect();
        top_k(candidates, AUTOCOMPLETE_LIMIT)
    }

    fn len(&self) -> usize {
        self.len
    }
}
