// File: src/instrument.rs
use crate::core::dictionary::Dictionary;
use crate::core::types::{Frequency, WordFrequency};
use crate::error::Result;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Build,
    Search,
    Add,
    Delete,
    Autocomplete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Build => "build",
            Operation::Search => "search",
            Operation::Add => "add",
            Operation::Delete => "delete",
            Operation::Autocomplete => "autocomplete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpStats {
    pub calls: u64,
    pub total_nanos: u64,
}

impl OpStats {
    pub fn mean_nanos(&self) -> u64 {
        if self.calls == 0 {
            0
        } else {
            self.total_nanos / self.calls
        }
    }
}

/// Per-operation wall-clock totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpTimings {
    stats: BTreeMap<Operation, OpStats>,
}

impl OpTimings {
    fn record(&mut self, op: Operation, elapsed: Duration) {
        let nanos = saturating_nanos(elapsed);
        let entry = self.stats.entry(op).or_default();
        entry.calls += 1;
        entry.total_nanos = entry.total_nanos.saturating_add(nanos);
    }

    pub fn get(&self, op: Operation) -> OpStats {
        self.stats.get(&op).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Operation, OpStats)> + '_ {
        self.stats.iter().map(|(&op, &stats)| (op, stats))
    }
}

impl fmt::Display for OpTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (op, stats) in self.iter() {
            writeln!(
                f,
                "{op:<13} calls={:<8} total={}ns mean={}ns",
                stats.calls,
                stats.total_nanos,
                stats.mean_nanos()
            )?;
        }
        Ok(())
    }
}

/// Whole nanoseconds in `elapsed`, clamped to `u64::MAX`.
fn saturating_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

fn timed<T>(timings: &RefCell<OpTimings>, op: Operation, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    timings.borrow_mut().record(op, elapsed);
    tracing::trace!(operation = %op, nanos = saturating_nanos(elapsed), "dictionary operation");
    out
}

/// Wraps a backend and times every call, leaving results untouched.
pub struct Timed<D> {
    inner: D,
    timings: RefCell<OpTimings>,
}

impl<D: Dictionary> Timed<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            timings: RefCell::new(OpTimings::default()),
        }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    pub fn into_inner(self) -> D {
        self.inner
    }

    pub fn timings(&self) -> OpTimings {
        self.timings.borrow().clone()
    }

    pub fn reset_timings(&self) {
        *self.timings.borrow_mut() = OpTimings::default();
    }
}

impl<D: Dictionary> Dictionary for Timed<D> {
    fn build_dictionary(&mut self, entries: Vec<WordFrequency>) -> Result<()> {
        timed(&self.timings, Operation::Build, || self.inner.build_dictionary(entries))
    }

    fn get(&self, word: &str) -> Option<Frequency> {
        timed(&self.timings, Operation::Search, || self.inner.get(word))
    }

    fn search(&self, word: &str) -> Frequency {
        timed(&self.timings, Operation::Search, || self.inner.search(word))
    }

    fn add_word_frequency(&mut self, entry: WordFrequency) -> bool {
        timed(&self.timings, Operation::Add, || self.inner.add_word_frequency(entry))
    }

    fn delete_word(&mut self, word: &str) -> bool {
        timed(&self.timings, Operation::Delete, || self.inner.delete_word(word))
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        timed(&self.timings, Operation::Autocomplete, || self.inner.autocomplete(prefix))
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
