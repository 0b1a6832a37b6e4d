use async_trait::async_trait;
use diesel::prelude::*;

use kl_core::daily::{DailyOverride, DayKey};
use kl_core::ids::WordId;
use kl_core::ports::{OverrideStoreError, OverrideStorePort};

use crate::db::{
    models::{DailyOverrideRow, NewDailyOverrideRow},
    pool::DbPool,
    schema::t_daily_override::dsl::*,
};

pub struct DieselOverrideStore {
    pool: DbPool,
}

impl DieselOverrideStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OverrideStorePort for DieselOverrideStore {
    async fn find_for_day(
        &self,
        day: &DayKey,
    ) -> Result<Option<DailyOverride>, OverrideStoreError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| OverrideStoreError::Storage(e.to_string()))?;

        let row = t_daily_override
            .filter(day_key.eq(day.to_string()))
            .first::<DailyOverrideRow>(&mut conn)
            .optional()
            .map_err(|e| OverrideStoreError::Storage(e.to_string()))?;

        row.map(|r| {
            // The stored key was written from a DayKey; reparse to keep the
            // domain type canonical.
            DayKey::parse(&r.day_key)
                .map(|parsed| DailyOverride {
                    day: parsed,
                    word_id: WordId::new(r.word_id),
                })
                .map_err(|e| OverrideStoreError::Storage(format!("corrupt day key: {e}")))
        })
        .transpose()
    }

    async fn set(&self, day: &DayKey, pinned: &WordId) -> Result<(), OverrideStoreError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| OverrideStoreError::Storage(e.to_string()))?;

        let key = day.to_string();
        let row = NewDailyOverrideRow {
            day_key: &key,
            word_id: pinned.value(),
        };

        diesel::insert_into(t_daily_override)
            .values(&row)
            .on_conflict(day_key)
            .do_update()
            .set(word_id.eq(pinned.value()))
            .execute(&mut conn)
            .map_err(|e| OverrideStoreError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self, day: &DayKey) -> Result<bool, OverrideStoreError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| OverrideStoreError::Storage(e.to_string()))?;

        let removed = diesel::delete(t_daily_override.filter(day_key.eq(day.to_string())))
            .execute(&mut conn)
            .map_err(|e| OverrideStoreError::Storage(e.to_string()))?;

        Ok(removed > 0)
    }
}
