// src/lib.rs

pub mod commands;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod instrument;
pub mod sampling;

pub use crate::core::array::OrderedArrayDictionary;
pub use crate::core::dictionary::{Backend, Dictionary, AUTOCOMPLETE_LIMIT};
pub use crate::core::linked_list::LinkedListDictionary;
pub use crate::core::trie::{PrunePolicy, TrieDictionary};
pub use crate::core::types::{Frequency, WordFrequency};
