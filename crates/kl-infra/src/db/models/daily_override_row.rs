use diesel::prelude::*;

use crate::db::schema::t_daily_override;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_daily_override)]
pub struct DailyOverrideRow {
    pub id: i64,
    pub day_key: String,
    pub word_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_daily_override)]
pub struct NewDailyOverrideRow<'a> {
    pub day_key: &'a str,
    pub word_id: i64,
}
