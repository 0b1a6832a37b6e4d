use diesel::prelude::*;

use kl_core::ids::{TeamId, UserId};
use kl_core::user::User;

use crate::db::schema::t_user;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_user)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
    pub google_sub: Option<String>,
    pub team_id: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_user)]
pub struct NewUserRow {
    pub email: String,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
    pub google_sub: Option<String>,
    pub team_id: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            email: row.email,
            password_hash: row.password_hash,
            display_name: row.display_name,
            google_sub: row.google_sub,
            team_id: row.team_id.map(TeamId::new),
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}
