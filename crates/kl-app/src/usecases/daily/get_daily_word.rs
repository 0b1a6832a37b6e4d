//! Use case resolving the word of the day.

use std::sync::Arc;

use chrono::FixedOffset;
use tracing::{info, info_span, Instrument};

use kl_core::config::AppConfig;
use kl_core::daily::{
    DayKey, RotationPlan, Selection, SelectionError, SelectionSource, OVERRIDE_INDEX,
};
use kl_core::ports::errors::CatalogError;
use kl_core::ports::{ClockPort, OverrideStorePort, WordCatalogPort};
use kl_core::words::{fallback, WordEntry};

/// Use case resolving "the word of the day" for a calendar day.
///
/// ## Behavior
/// - Normalizes the requested day (explicit `YYYY-MM-DD`, or "today" in the
///   configured reference offset)
/// - Serves an administrator override when one is pinned for that day
/// - Otherwise rotates deterministically over the primary catalog, or over
///   the bundled fallback list when the catalog is empty
///
/// Each call is a pure function of the catalog/override snapshot it reads;
/// nothing is cached between calls.
pub struct GetDailyWord {
    catalog: Arc<dyn WordCatalogPort>,
    overrides: Arc<dyn OverrideStorePort>,
    clock: Arc<dyn ClockPort>,
    rotation: RotationPlan,
    reference_offset: FixedOffset,
    fallback: Vec<WordEntry>,
}

impl GetDailyWord {
    pub fn new(
        catalog: Arc<dyn WordCatalogPort>,
        overrides: Arc<dyn OverrideStorePort>,
        clock: Arc<dyn ClockPort>,
        config: &AppConfig,
    ) -> Self {
        Self {
            catalog,
            overrides,
            clock,
            rotation: RotationPlan::new(config.rotation_epoch),
            reference_offset: config.reference_offset,
            fallback: fallback::fallback_words().to_vec(),
        }
    }

    /// Replace the bundled fallback list (custom bundles, tests).
    pub fn with_fallback(mut self, fallback: Vec<WordEntry>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Execute the use case.
    ///
    /// `date` is an optional explicit `YYYY-MM-DD`; `None` means "today" in
    /// the reference offset.
    pub async fn execute(&self, date: Option<&str>) -> Result<Selection, SelectionError> {
        let span = info_span!("usecase.get_daily_word.execute");

        async {
            let day = self.resolve_day(date)?;

            if let Some(pin) = self.overrides.find_for_day(&day).await? {
                let entry = self.catalog.find_by_id(&pin.word_id).await?.ok_or(
                    SelectionError::DanglingOverride {
                        day,
                        word_id: pin.word_id,
                    },
                )?;
                info!(day = %day, word_id = %entry.id, "serving pinned override");
                return Ok(Selection {
                    day,
                    index: OVERRIDE_INDEX,
                    entry,
                    source: SelectionSource::Override,
                });
            }

            let ids = self.catalog.list_ids().await?;
            if let Some(index) = self.rotation.index_for(&day, ids.len()) {
                let word_id = ids[index];
                let entry = self.catalog.find_by_id(&word_id).await?.ok_or_else(|| {
                    // The entry vanished between the id listing and the fetch;
                    // report it instead of indexing something else.
                    CatalogError::Storage(format!("word {word_id} listed but missing"))
                })?;
                info!(day = %day, index, word_id = %word_id, "serving catalog rotation");
                Ok(Selection {
                    day,
                    index: index as i64,
                    entry,
                    source: SelectionSource::PrimaryCatalog,
                })
            } else if let Some(index) = self.rotation.index_for(&day, self.fallback.len()) {
                info!(day = %day, index, "catalog empty, serving fallback rotation");
                Ok(Selection {
                    day,
                    index: index as i64,
                    entry: self.fallback[index].clone(),
                    source: SelectionSource::Fallback,
                })
            } else {
                Err(SelectionError::EmptyCatalog)
            }
        }
        .instrument(span)
        .await
    }

    fn resolve_day(&self, date: Option<&str>) -> Result<DayKey, SelectionError> {
        match date {
            Some(explicit) => DayKey::parse(explicit),
            None => Ok(DayKey::today_in(
                self.reference_offset,
                self.clock.now_utc(),
            )),
        }
    }
}
