//! Daily word selection domain.
//!
//! Given a calendar day, the engine deterministically picks "the word of the
//! day": an administrator override wins when present, otherwise the day is
//! mapped onto the active word source by epoch-based rotation. The arithmetic
//! lives here; orchestration over the storage ports lives in the application
//! layer.

pub mod day_key;
pub mod error;
pub mod rotation;
pub mod selection;

use serde::{Deserialize, Serialize};

use crate::ids::WordId;

pub use day_key::DayKey;
pub use error::SelectionError;
pub use rotation::RotationPlan;
pub use selection::{Selection, SelectionSource, OVERRIDE_INDEX};

/// A manual pin of one calendar day to one catalog entry.
///
/// At most one override exists per day key; the engine consults it read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOverride {
    pub day: DayKey,
    pub word_id: WordId,
}
