use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use kl_core::ids::{TeamId, UserId};
use kl_core::ports::{UserRepositoryError, UserRepositoryPort};
use kl_core::user::{NewUser, User};

use crate::db::{
    models::{NewUserRow, UserRow},
    pool::DbPool,
    schema::t_user::dsl::*,
};

pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepositoryPort for DieselUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        let row = t_user
            .filter(id.eq(user_id.value()))
            .first::<UserRow>(&mut conn)
            .optional()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        let row = t_user
            .filter(email.eq(user_email))
            .first::<UserRow>(&mut conn)
            .optional()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn find_by_google_sub(&self, sub: &str) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        let row = t_user
            .filter(google_sub.eq(sub))
            .first::<UserRow>(&mut conn)
            .optional()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        let row = NewUserRow {
            email: user.email,
            password_hash: user.password_hash,
            display_name: user.display_name,
            google_sub: user.google_sub,
            team_id: user.team_id.map(|t| t.value()),
            is_active: true,
            created_at: Utc::now().timestamp(),
        };

        let inserted = diesel::insert_into(t_user)
            .values(&row)
            .get_result::<UserRow>(&mut conn)
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        Ok(User::from(inserted))
    }

    async fn set_team(
        &self,
        user_id: &UserId,
        new_team: &TeamId,
    ) -> Result<(), UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        let updated = diesel::update(t_user.filter(id.eq(user_id.value())))
            .set(team_id.eq(new_team.value()))
            .execute(&mut conn)
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        if updated == 0 {
            return Err(UserRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn link_google(
        &self,
        user_id: &UserId,
        sub: &str,
        name: Option<&str>,
    ) -> Result<(), UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        let updated = diesel::update(
            t_user.filter(id.eq(user_id.value())),
        )
        .set(google_sub.eq(sub))
        .execute(&mut conn)
        .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;

        if updated == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        // Fill the display name only when the account has none.
        if let Some(name) = name {
            diesel::update(
                t_user
                    .filter(id.eq(user_id.value()))
                    .filter(display_name.is_null()),
            )
            .set(display_name.eq(name))
            .execute(&mut conn)
            .map_err(|e| UserRepositoryError::Storage(e.to_string()))?;
        }

        Ok(())
    }
}
