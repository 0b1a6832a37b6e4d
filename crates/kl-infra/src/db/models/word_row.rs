use diesel::prelude::*;

use kl_core::ids::WordId;
use kl_core::words::{NewWordEntry, WordEntry};

use crate::db::schema::t_word;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_word)]
pub struct WordRow {
    pub id: i64,
    pub word: String,
    pub definition: String,
    pub meta: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_word)]
pub struct NewWordRow {
    pub word: String,
    pub definition: String,
    pub meta: Option<String>,
}

impl TryFrom<WordRow> for WordEntry {
    type Error = serde_json::Error;

    fn try_from(row: WordRow) -> Result<Self, Self::Error> {
        let meta = row
            .meta
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;
        Ok(WordEntry {
            id: WordId::new(row.id),
            word: row.word,
            definition: row.definition,
            meta,
        })
    }
}

impl From<NewWordEntry> for NewWordRow {
    fn from(entry: NewWordEntry) -> Self {
        Self {
            word: entry.word,
            definition: entry.definition,
            meta: entry.meta.map(|value| value.to_string()),
        }
    }
}
