// File: src/config.rs
use crate::core::dictionary::Backend;
use crate::core::trie::PrunePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for the driver binary. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub backend: Backend,
    /// Only consulted by the trie backend.
    pub prune: PrunePolicy,
    /// Skip malformed corpus lines instead of failing.
    pub lenient: bool,
}

impl DriverConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let text = fs::read_to_string(path)
            .with_context(|| format!("error reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("error parsing config {}", path.display()))
    }
}
