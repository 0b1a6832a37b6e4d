use async_trait::async_trait;

use crate::ids::TeamId;
use crate::ports::errors::TeamRepositoryError;
use crate::team::Team;

#[async_trait]
pub trait TeamRepositoryPort: Send + Sync {
    /// All teams, ordered by code.
    async fn list_all(&self) -> Result<Vec<Team>, TeamRepositoryError>;

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, TeamRepositoryError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Team>, TeamRepositoryError>;

    /// Seed helper; existing codes are left untouched. Returns whether a row
    /// was inserted.
    async fn insert_if_absent(&self, code: &str, name: &str) -> Result<bool, TeamRepositoryError>;
}
