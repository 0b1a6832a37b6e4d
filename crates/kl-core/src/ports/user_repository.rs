use async_trait::async_trait;

use crate::ids::{TeamId, UserId};
use crate::ports::errors::UserRepositoryError;
use crate::user::{NewUser, User};

#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_google_sub(&self, sub: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a new account and return it with its assigned id.
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn set_team(&self, id: &UserId, team_id: &TeamId) -> Result<(), UserRepositoryError>;

    /// Attach a Google subject to an existing account, keeping any display
    /// name already set.
    async fn link_google(
        &self,
        id: &UserId,
        sub: &str,
        display_name: Option<&str>,
    ) -> Result<(), UserRepositoryError>;
}
