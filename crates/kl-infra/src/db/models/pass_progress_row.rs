use diesel::prelude::*;

use kl_core::battlepass::PassProgress;
use kl_core::ids::UserId;

use crate::db::schema::t_pass_progress;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_pass_progress)]
pub struct PassProgressRow {
    pub id: i64,
    pub user_id: i64,
    pub season: String,
    pub current_level: i32,
    pub current_xp: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_pass_progress)]
pub struct NewPassProgressRow {
    pub user_id: i64,
    pub season: String,
    pub current_level: i32,
    pub current_xp: i64,
}

impl From<PassProgressRow> for PassProgress {
    fn from(row: PassProgressRow) -> Self {
        PassProgress {
            user_id: UserId::new(row.user_id),
            season: row.season,
            current_level: row.current_level,
            current_xp: row.current_xp,
        }
    }
}

impl From<&PassProgress> for NewPassProgressRow {
    fn from(progress: &PassProgress) -> Self {
        Self {
            user_id: progress.user_id.value(),
            season: progress.season.clone(),
            current_level: progress.current_level,
            current_xp: progress.current_xp,
        }
    }
}
