use async_trait::async_trait;

use crate::daily::{DailyOverride, DayKey};
use crate::ids::WordId;
use crate::ports::errors::OverrideStoreError;

/// Access to administrator day-to-word pins. At most one override per day.
#[async_trait]
pub trait OverrideStorePort: Send + Sync {
    async fn find_for_day(&self, day: &DayKey) -> Result<Option<DailyOverride>, OverrideStoreError>;

    /// Pin `day` to `word_id`, replacing any previous pin for that day.
    async fn set(&self, day: &DayKey, word_id: &WordId) -> Result<(), OverrideStoreError>;

    /// Remove the pin for `day`. Returns whether one existed.
    async fn clear(&self, day: &DayKey) -> Result<bool, OverrideStoreError>;
}
