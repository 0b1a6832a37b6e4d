//! Administrative use case removing a day's pin.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use kl_core::daily::DayKey;
use kl_core::ports::OverrideStorePort;

pub struct ClearDailyOverride {
    overrides: Arc<dyn OverrideStorePort>,
}

impl ClearDailyOverride {
    pub fn new(overrides: Arc<dyn OverrideStorePort>) -> Self {
        Self { overrides }
    }

    /// Remove the pin for `date`. Returns whether one existed.
    pub async fn execute(&self, date: &str) -> Result<bool> {
        let span = info_span!("usecase.clear_daily_override.execute");

        async {
            let day = DayKey::parse(date)?;
            let removed = self
                .overrides
                .clear(&day)
                .await
                .context("remove override")?;
            info!(day = %day, removed, "daily override cleared");
            Ok(removed)
        }
        .instrument(span)
        .await
    }
}
