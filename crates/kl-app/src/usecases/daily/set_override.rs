//! Administrative use case pinning a day to a specific word.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{info, info_span, Instrument};

use kl_core::daily::DayKey;
use kl_core::ids::WordId;
use kl_core::ports::{OverrideStorePort, WordCatalogPort};

pub struct SetDailyOverride {
    catalog: Arc<dyn WordCatalogPort>,
    overrides: Arc<dyn OverrideStorePort>,
}

impl SetDailyOverride {
    pub fn new(catalog: Arc<dyn WordCatalogPort>, overrides: Arc<dyn OverrideStorePort>) -> Self {
        Self { catalog, overrides }
    }

    /// Pin `date` to `word_id`. The referenced word must exist so the pin is
    /// never created dangling.
    pub async fn execute(&self, date: &str, word_id: WordId) -> Result<()> {
        let span = info_span!("usecase.set_daily_override.execute");

        async {
            let day = DayKey::parse(date)?;
            let entry = self
                .catalog
                .find_by_id(&word_id)
                .await
                .context("look up override target")?;
            if entry.is_none() {
                bail!("word {word_id} does not exist in the catalog");
            }

            self.overrides
                .set(&day, &word_id)
                .await
                .context("persist override")?;
            info!(day = %day, word_id = %word_id, "daily override pinned");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
