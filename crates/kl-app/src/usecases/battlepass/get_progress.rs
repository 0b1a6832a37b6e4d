//! Use case reading (and lazily opening) a player's battle-pass progress.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, info_span, Instrument};

use kl_core::battlepass::PassProgress;
use kl_core::ids::UserId;
use kl_core::ports::errors::PassRepositoryError;
use kl_core::ports::PassRepositoryPort;

/// Progress view returned to the boundary layer. `next_level_xp` is 0 at the
/// top of the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    pub season: String,
    pub current_level: i32,
    pub current_xp: i64,
    pub next_level_xp: i64,
}

pub struct GetPassProgress {
    passes: Arc<dyn PassRepositoryPort>,
    default_season: String,
}

impl GetPassProgress {
    pub fn new(passes: Arc<dyn PassRepositoryPort>, default_season: impl Into<String>) -> Self {
        Self {
            passes,
            default_season: default_season.into(),
        }
    }

    /// First access creates a level-1 row in the default season.
    pub async fn execute(&self, user_id: &UserId) -> Result<ProgressView, PassRepositoryError> {
        let span = info_span!("usecase.get_pass_progress.execute");

        async {
            let progress = self.load_or_open(user_id).await?;
            self.view_of(progress).await
        }
        .instrument(span)
        .await
    }

    pub(crate) async fn load_or_open(
        &self,
        user_id: &UserId,
    ) -> Result<PassProgress, PassRepositoryError> {
        if let Some(progress) = self.passes.find_progress(user_id).await? {
            return Ok(progress);
        }
        let fresh = PassProgress::fresh(*user_id, self.default_season.clone());
        let progress = self.passes.insert_progress(fresh).await?;
        info!(user_id = %user_id, season = %progress.season, "battle pass opened");
        Ok(progress)
    }

    pub(crate) async fn view_of(
        &self,
        progress: PassProgress,
    ) -> Result<ProgressView, PassRepositoryError> {
        let next_level_xp = self
            .passes
            .find_level(&progress.season, progress.current_level + 1)
            .await?
            .map(|level| level.xp_required)
            .unwrap_or(0);

        Ok(ProgressView {
            season: progress.season,
            current_level: progress.current_level,
            current_xp: progress.current_xp,
            next_level_xp,
        })
    }
}
