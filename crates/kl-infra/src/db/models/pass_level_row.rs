use diesel::prelude::*;

use kl_core::battlepass::PassLevel;

use crate::db::schema::t_pass_level;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_pass_level)]
pub struct PassLevelRow {
    pub id: i64,
    pub season: String,
    pub level: i32,
    pub xp_required: i64,
    pub reward: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_pass_level)]
pub struct NewPassLevelRow {
    pub season: String,
    pub level: i32,
    pub xp_required: i64,
    pub reward: Option<String>,
}

impl TryFrom<PassLevelRow> for PassLevel {
    type Error = serde_json::Error;

    fn try_from(row: PassLevelRow) -> Result<Self, Self::Error> {
        let reward = row
            .reward
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;
        Ok(PassLevel {
            season: row.season,
            level: row.level,
            xp_required: row.xp_required,
            reward,
        })
    }
}

impl From<PassLevel> for NewPassLevelRow {
    fn from(level: PassLevel) -> Self {
        Self {
            season: level.season,
            level: level.level,
            xp_required: level.xp_required,
            reward: level.reward.map(|value| value.to_string()),
        }
    }
}
