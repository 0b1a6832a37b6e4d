//! Word catalog domain types.
//!
//! A [`WordEntry`] is the canonical shape of a playable word, no matter where
//! it came from (database catalog or the bundled fallback list). Downstream
//! code never branches on the source of an entry.

pub mod fallback;

use serde::{Deserialize, Serialize};

use crate::ids::WordId;

/// One playable word with its definition and optional annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    pub word: String,
    pub definition: String,
    /// Opaque key-value annotations (linguistic root, provenance, rarity…).
    pub meta: Option<serde_json::Value>,
}

/// A word about to enter the catalog; the storage layer assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWordEntry {
    pub word: String,
    pub definition: String,
    pub meta: Option<serde_json::Value>,
}

impl NewWordEntry {
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        meta: Option<serde_json::Value>,
    ) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            meta,
        }
    }

    /// Catalog invariant: display text and definition are non-empty.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.word.trim().is_empty(), "word text must not be empty");
        anyhow::ensure!(
            !self.definition.trim().is_empty(),
            "word definition must not be empty"
        );
        Ok(())
    }
}
