// --- File: src/core/trie.rs
use crate::core::dictionary::{ensure_unique, top_k, Dictionary, AUTOCOMPLETE_LIMIT};
use crate::core::types::{Frequency, WordFrequency};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type NodeId = usize;

const ROOT: NodeId = 0;

/// What `delete_word` does with nodes that no longer lead to any word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrunePolicy {
    /// Only clear the terminal mark; the path stays in the tree.
    #[default]
    Retain,
    /// Also unlink dead leaf nodes bottom-up and recycle their slots.
    Prune,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Ordered so that traversal, and therefore tie-breaking, is deterministic.
    children: BTreeMap<char, NodeId>,
    /// Frequency of the word ending here, if one does.
    word_end: Option<Frequency>,
}

impl TrieNode {
    fn is_dead(&self) -> bool {
        self.word_end.is_none() && self.children.is_empty()
    }
}

/// A character trie over an index arena.
///
/// Node 0 is the root. Every other node is owned by exactly one parent edge,
/// so the arena is a tree: no cycles and no shared subtrees.
#[derive(Debug, Clone)]
pub struct TrieDictionary {
    nodes: Vec<TrieNode>,
    free: Vec<NodeId>,
    policy: PrunePolicy,
    len: usize,
}

impl Default for TrieDictionary {
    fn default() -> Self {
        Self::with_policy(PrunePolicy::default())
    }
}

impl TrieDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PrunePolicy) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            free: Vec::new(),
            policy,
            len: 0,
        }
    }

    pub fn policy(&self) -> PrunePolicy {
        self.policy
    }

    /// Nodes currently linked into the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.nodes.push(TrieNode::default());
                self.nodes.len() - 1
            }
        }
    }

    /// Follows `key` from the root without creating edges.
    fn walk(&self, key: &str) -> Option<NodeId> {
        let mut node_idx = ROOT;
        for ch in key.chars() {
            node_idx = *self.nodes[node_idx].children.get(&ch)?;
        }
        Some(node_idx)
    }

    /// Follows `key` from the root, creating missing edges.
    /// O(k) where k is the key length.
    fn walk_or_create(&mut self, key: &str) -> NodeId {
        let mut node_idx = ROOT;
        for ch in key.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_node_id = self.alloc();
                self.nodes[node_idx].children.insert(ch, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        node_idx
    }

    /// Unlinks the dead tail of `word`'s path, deepest node first.
    fn prune_path(&mut self, word: &str) {
        let mut path: Vec<(NodeId, char, NodeId)> = Vec::with_capacity(word.len());
        let mut node_idx = ROOT;
        for ch in word.chars() {
            let Some(&child) = self.nodes[node_idx].children.get(&ch) else {
                return;
            };
            path.push((node_idx, ch, child));
            node_idx = child;
        }

        let mut released = 0;
        for &(parent, ch, child) in path.iter().rev() {
            if !self.nodes[child].is_dead() {
                break;
            }
            self.nodes[parent].children.remove(&ch);
            self.nodes[child] = TrieNode::default();
            self.free.push(child);
            released += 1;
        }
        tracing::trace!(word, released, "pruned trie path");
    }

    /// Pre-order collection of every word at or below `start`, which spells `prefix`.
    ///
    /// Uses an explicit work stack so depth is bounded by the heap, not the
    /// call stack. Each entry holds the buffer length before its edge character;
    /// children are pushed in reverse so they pop in ascending character order.
    fn collect(&self, start: NodeId, prefix: &str) -> Vec<WordFrequency> {
        let mut out = Vec::new();
        let mut buffer = prefix.to_string();
        let mut stack: Vec<(NodeId, usize, Option<char>)> = vec![(start, prefix.len(), None)];

        while let Some((node_idx, depth, edge)) = stack.pop() {
            buffer.truncate(depth);
            if let Some(ch) = edge {
                buffer.push(ch);
            }
            let node = &self.nodes[node_idx];
            if let Some(frequency) = node.word_end {
                // The root never ends a word, so `buffer` is non-empty here.
                if let Ok(entry) = WordFrequency::new(buffer.clone(), frequency) {
                    out.push(entry);
                }
            }
            let depth = buffer.len();
            for (&ch, &child_idx) in node.children.iter().rev() {
                stack.push((child_idx, depth, Some(ch)));
            }
        }
        out
    }
}

impl Dictionary for TrieDictionary {
    fn build_dictionary(&mut self, entries: Vec<WordFrequency>) -> Result<()> {
        ensure_unique(&entries)?;
        *self = Self::with_policy(self.policy);
        for entry in entries {
            let node_idx = self.walk_or_create(entry.word());
            self.nodes[node_idx].word_end = Some(entry.frequency());
            self.len += 1;
        }
        tracing::debug!(
            backend = "trie",
            entries = self.len,
            nodes = self.node_count(),
            "built dictionary"
        );
        Ok(())
    }

    fn get(&self, word: &str) -> Option<Frequency> {
        self.walk(word).and_then(|id| self.nodes[id].word_end)
    }

    fn add_word_frequency(&mut self, entry: WordFrequency) -> bool {
        let node_idx = self.walk_or_create(entry.word());
        let node = &mut self.nodes[node_idx];
        if node.word_end.is_some() {
            return false;
        }
        node.word_end = Some(entry.frequency());
        self.len += 1;
        true
    }

    fn delete_word(&mut self, word: &str) -> bool {
        let Some(node_idx) = self.walk(word) else {
            return false;
        };
        if self.nodes[node_idx].word_end.take().is_none() {
            return false;
        }
        self.len -= 1;
        if self.policy == PrunePolicy::Prune {
            self.prune_path(word);
        }
        true
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        let Some(start) = self.walk(prefix) else {
            return Vec::new();
        };
        top_k(self.collect(start, prefix), AUTOCOMPLETE_LIMIT)
    }

    fn len(&self) -> usize {
        self.len
    }
}
