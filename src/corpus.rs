// File: src/corpus.rs
//! Reads `(word, frequency)` corpora: one entry per line, fields separated by
//! whitespace or a comma. Blank lines are ignored; every other line is an entry.
use crate::core::types::{Frequency, WordFrequency};
use crate::error::CorpusError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Splits a line into non-empty fields on whitespace and commas.
pub(crate) fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
}

/// Parses one corpus line. `Ok(None)` for blank lines.
pub fn parse_entry(line: &str, line_no: usize) -> Result<Option<WordFrequency>, CorpusError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = fields(trimmed).collect();
    let [word, frequency] = parts.as_slice() else {
        return Err(CorpusError::Parse {
            line: line_no,
            reason: format!("expected 'word frequency', found {} field(s)", parts.len()),
        });
    };
    let frequency: Frequency = frequency.parse().map_err(|_| CorpusError::Parse {
        line: line_no,
        reason: format!("invalid frequency '{frequency}'"),
    })?;
    WordFrequency::new(*word, frequency)
        .map(Some)
        .map_err(|source| CorpusError::Word { line: line_no, source })
}

/// Reads every entry from `reader`.
///
/// In strict mode the first malformed line aborts the read; in lenient mode it
/// is logged and skipped. Duplicate words are passed through untouched.
pub fn read_corpus<R: BufRead>(reader: R, lenient: bool) -> Result<Vec<WordFrequency>, CorpusError> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_entry(&line, idx + 1) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(err) if lenient => tracing::warn!("skipping corpus entry: {err}"),
            Err(err) => return Err(err),
        }
    }
    Ok(entries)
}

pub fn load_corpus(path: &Path, lenient: bool) -> Result<Vec<WordFrequency>, CorpusError> {
    let file = File::open(path)?;
    let entries = read_corpus(BufReader::new(file), lenient)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded corpus");
    Ok(entries)
}
