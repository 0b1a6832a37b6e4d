use async_trait::async_trait;
use diesel::prelude::*;

use kl_core::ids::WordId;
use kl_core::ports::{CatalogError, WordCatalogPort};
use kl_core::words::{NewWordEntry, WordEntry};

use crate::db::{
    models::{NewWordRow, WordRow},
    pool::DbPool,
    schema::t_word::dsl::*,
};

pub struct DieselWordCatalog {
    pool: DbPool,
}

impl DieselWordCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordCatalogPort for DieselWordCatalog {
    async fn list_ids(&self) -> Result<Vec<WordId>, CatalogError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        // Ascending id order is the rotation order; never rely on the
        // database's natural ordering here.
        let ids = t_word
            .select(id)
            .order(id.asc())
            .load::<i64>(&mut conn)
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        Ok(ids.into_iter().map(WordId::new).collect())
    }

    async fn find_by_id(&self, word_id: &WordId) -> Result<Option<WordEntry>, CatalogError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        let row = t_word
            .filter(id.eq(word_id.value()))
            .first::<WordRow>(&mut conn)
            .optional()
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        row.map(WordEntry::try_from)
            .transpose()
            .map_err(|e| CatalogError::Storage(format!("malformed meta json: {e}")))
    }

    async fn insert_many(&self, entries: Vec<NewWordEntry>) -> Result<usize, CatalogError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        let rows: Vec<NewWordRow> = entries.into_iter().map(NewWordRow::from).collect();

        let inserted = diesel::insert_into(t_word)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        Ok(inserted)
    }
}
