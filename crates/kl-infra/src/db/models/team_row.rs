use diesel::prelude::*;

use kl_core::ids::TeamId;
use kl_core::team::Team;

use crate::db::schema::t_team;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_team)]
pub struct TeamRow {
    pub id: i64,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_team)]
pub struct NewTeamRow<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team {
            id: TeamId::new(row.id),
            code: row.code,
            name: row.name,
        }
    }
}
