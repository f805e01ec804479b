// src/core/mod.rs

pub mod array;
pub mod dictionary;
pub mod linked_list;
pub mod trie;
pub mod types;
