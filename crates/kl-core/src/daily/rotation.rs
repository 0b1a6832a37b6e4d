//! Epoch-based rotation arithmetic.

use chrono::NaiveDate;

use crate::daily::day_key::DayKey;

/// Deterministic cyclic mapping from a calendar day to an index into an
/// ordered word source.
///
/// The mapping is a pure function of (epoch, day, source size): stable across
/// restarts and replicas, and independent of insertion order because sources
/// are ordered by stable identifier. Known limitation of indexing into a
/// mutable set: deleting an entry shifts the position of every entry with a
/// larger identifier, silently remapping days to words. Appending does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPlan {
    epoch: NaiveDate,
}

impl RotationPlan {
    pub fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Whole days between the epoch and `day`; negative before the epoch.
    pub fn day_offset(&self, day: &DayKey) -> i64 {
        (day.date() - self.epoch).num_days()
    }

    /// Index of `day` into a source of `len` entries, or `None` when the
    /// source is empty.
    ///
    /// Euclidean remainder keeps the result in `[0, len)` even for days
    /// before the epoch; a truncating `%` would go negative there.
    pub fn index_for(&self, day: &DayKey, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.day_offset(day).rem_euclid(len as i64) as usize)
    }
}
