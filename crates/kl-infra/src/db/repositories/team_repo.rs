use async_trait::async_trait;
use diesel::prelude::*;

use kl_core::ids::TeamId;
use kl_core::ports::{TeamRepositoryError, TeamRepositoryPort};
use kl_core::team::Team;

use crate::db::{
    models::{NewTeamRow, TeamRow},
    pool::DbPool,
    schema::t_team::dsl::*,
};

pub struct DieselTeamRepository {
    pool: DbPool,
}

impl DieselTeamRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepositoryPort for DieselTeamRepository {
    async fn list_all(&self) -> Result<Vec<Team>, TeamRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        let rows = t_team
            .order(code.asc())
            .load::<TeamRow>(&mut conn)
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_by_id(&self, team_id: &TeamId) -> Result<Option<Team>, TeamRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        let row = t_team
            .filter(id.eq(team_id.value()))
            .first::<TeamRow>(&mut conn)
            .optional()
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        Ok(row.map(Team::from))
    }

    async fn find_by_code(&self, team_code: &str) -> Result<Option<Team>, TeamRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        let row = t_team
            .filter(code.eq(team_code))
            .first::<TeamRow>(&mut conn)
            .optional()
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        Ok(row.map(Team::from))
    }

    async fn insert_if_absent(
        &self,
        team_code: &str,
        team_name: &str,
    ) -> Result<bool, TeamRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        let row = NewTeamRow {
            code: team_code,
            name: team_name,
        };

        let inserted = diesel::insert_into(t_team)
            .values(&row)
            .on_conflict(code)
            .do_nothing()
            .execute(&mut conn)
            .map_err(|e| TeamRepositoryError::Storage(e.to_string()))?;

        Ok(inserted > 0)
    }
}
