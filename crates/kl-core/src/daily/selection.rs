//! The engine's output shape.

use serde::Serialize;

use crate::daily::day_key::DayKey;
use crate::words::WordEntry;

/// Sentinel index reported when a day was served via an administrator
/// override instead of rotation. All rotation indexes are non-negative.
pub const OVERRIDE_INDEX: i64 = -1;

/// Which source produced a selection. Mutually exclusive outcomes of one
/// invocation; the fourth state (no source available) is the
/// [`SelectionError::EmptyCatalog`](crate::daily::SelectionError::EmptyCatalog)
/// error, not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    Override,
    PrimaryCatalog,
    Fallback,
}

/// Result of resolving one day. Derived from the catalog/override snapshot at
/// call time; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub day: DayKey,
    /// Rotation index into the active source, or [`OVERRIDE_INDEX`].
    pub index: i64,
    pub entry: WordEntry,
    pub source: SelectionSource,
}

impl Selection {
    pub fn word(&self) -> &str {
        &self.entry.word
    }

    pub fn definition(&self) -> &str {
        &self.entry.definition
    }
}
