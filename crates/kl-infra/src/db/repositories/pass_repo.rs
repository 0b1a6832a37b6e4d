use async_trait::async_trait;
use diesel::prelude::*;

use kl_core::battlepass::{PassLevel, PassProgress};
use kl_core::ids::UserId;
use kl_core::ports::{PassRepositoryError, PassRepositoryPort};

use crate::db::models::{NewPassLevelRow, NewPassProgressRow, PassLevelRow, PassProgressRow};
use crate::db::pool::DbPool;
use crate::db::schema::{t_pass_level, t_pass_progress};

pub struct DieselPassRepository {
    pool: DbPool,
}

impl DieselPassRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassRepositoryPort for DieselPassRepository {
    async fn find_progress(
        &self,
        user: &UserId,
    ) -> Result<Option<PassProgress>, PassRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        let row = t_pass_progress::table
            .filter(t_pass_progress::user_id.eq(user.value()))
            .first::<PassProgressRow>(&mut conn)
            .optional()
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        Ok(row.map(PassProgress::from))
    }

    async fn insert_progress(
        &self,
        progress: PassProgress,
    ) -> Result<PassProgress, PassRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        let row = NewPassProgressRow::from(&progress);
        let inserted = diesel::insert_into(t_pass_progress::table)
            .values(&row)
            .get_result::<PassProgressRow>(&mut conn)
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        Ok(PassProgress::from(inserted))
    }

    async fn save_progress(&self, progress: &PassProgress) -> Result<(), PassRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        diesel::update(
            t_pass_progress::table.filter(t_pass_progress::user_id.eq(progress.user_id.value())),
        )
        .set((
            t_pass_progress::current_level.eq(progress.current_level),
            t_pass_progress::current_xp.eq(progress.current_xp),
        ))
        .execute(&mut conn)
        .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn find_level(
        &self,
        pass_season: &str,
        pass_level: i32,
    ) -> Result<Option<PassLevel>, PassRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        let row = t_pass_level::table
            .filter(t_pass_level::season.eq(pass_season))
            .filter(t_pass_level::level.eq(pass_level))
            .first::<PassLevelRow>(&mut conn)
            .optional()
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        row.map(PassLevel::try_from)
            .transpose()
            .map_err(|e| PassRepositoryError::Storage(format!("malformed reward json: {e}")))
    }

    async fn insert_levels(&self, levels: Vec<PassLevel>) -> Result<usize, PassRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        let rows: Vec<NewPassLevelRow> = levels.into_iter().map(NewPassLevelRow::from).collect();

        let inserted = diesel::insert_into(t_pass_level::table)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| PassRepositoryError::Storage(e.to_string()))?;

        Ok(inserted)
    }
}
