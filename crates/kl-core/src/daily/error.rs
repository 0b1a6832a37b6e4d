use thiserror::Error;

use crate::daily::day_key::DayKey;
use crate::ids::WordId;
use crate::ports::errors::{CatalogError, OverrideStoreError};

/// Failure modes of the daily selection engine.
///
/// The engine never substitutes a plausible-but-wrong answer: every failure
/// is surfaced as one of these typed conditions and the boundary layer
/// decides user-visible messaging.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Malformed explicit date input; a client error at the boundary.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    /// An override points at a catalog entry that no longer exists. This is
    /// corrupt administrative state and is surfaced rather than silently
    /// falling through to rotation.
    #[error("override for {day} references missing word {word_id}")]
    DanglingOverride { day: DayKey, word_id: WordId },

    /// Both the primary catalog and the fallback list are empty; no word can
    /// be served. Fatal to the request, not to the process.
    #[error("no words available in the catalog or the fallback list")]
    EmptyCatalog,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    OverrideStore(#[from] OverrideStoreError),
}
