use async_trait::async_trait;

use crate::battlepass::{PassLevel, PassProgress};
use crate::ids::UserId;
use crate::ports::errors::PassRepositoryError;

#[async_trait]
pub trait PassRepositoryPort: Send + Sync {
    async fn find_progress(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PassProgress>, PassRepositoryError>;

    /// Insert a fresh progress row; fails if one already exists for the user.
    async fn insert_progress(
        &self,
        progress: PassProgress,
    ) -> Result<PassProgress, PassRepositoryError>;

    /// Persist updated level/XP for an existing row.
    async fn save_progress(&self, progress: &PassProgress) -> Result<(), PassRepositoryError>;

    async fn find_level(
        &self,
        season: &str,
        level: i32,
    ) -> Result<Option<PassLevel>, PassRepositoryError>;

    /// Seed helper for a season ladder. Returns the inserted count.
    async fn insert_levels(&self, levels: Vec<PassLevel>) -> Result<usize, PassRepositoryError>;
}
