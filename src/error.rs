// File: src/error.rs
use thiserror::Error;

/// Precondition violations rejected by the dictionary core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("word must not be empty")]
    EmptyWord,
    #[error("duplicate word in build input: {word}")]
    DuplicateWord { word: String },
}

/// Failures while reading corpora or operation scripts.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("line {line}: {source}")]
    Word {
        line: usize,
        #[source]
        source: DictionaryError,
    },
    #[error("cannot sample {requested} lines from a corpus of {available}")]
    SampleTooLarge { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
