//! Use case granting XP and climbing the season ladder.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use kl_core::ids::UserId;
use kl_core::ports::errors::PassRepositoryError;
use kl_core::ports::PassRepositoryPort;

use crate::usecases::battlepass::get_progress::{GetPassProgress, ProgressView};

pub struct GrantPassXp {
    passes: Arc<dyn PassRepositoryPort>,
    progress: GetPassProgress,
}

impl GrantPassXp {
    pub fn new(passes: Arc<dyn PassRepositoryPort>, default_season: impl Into<String>) -> Self {
        let progress = GetPassProgress::new(Arc::clone(&passes), default_season);
        Self { passes, progress }
    }

    /// Add `amount` XP, then take every adjacent level whose cumulative
    /// requirement the new total meets. The loop ends at the first unmet
    /// requirement or at the ladder top.
    pub async fn execute(
        &self,
        user_id: &UserId,
        amount: i64,
    ) -> Result<ProgressView, PassRepositoryError> {
        let span = info_span!("usecase.grant_pass_xp.execute", amount);

        async {
            let mut progress = self.progress.load_or_open(user_id).await?;
            progress.add_xp(amount);

            let mut levels_gained = 0u32;
            while let Some(next) = self
                .passes
                .find_level(&progress.season, progress.current_level + 1)
                .await?
            {
                if !progress.try_level_up(&next) {
                    break;
                }
                levels_gained += 1;
            }

            self.passes.save_progress(&progress).await?;
            info!(
                user_id = %user_id,
                amount,
                levels_gained,
                level = progress.current_level,
                "xp granted"
            );
            self.progress.view_of(progress).await
        }
        .instrument(span)
        .await
    }
}
