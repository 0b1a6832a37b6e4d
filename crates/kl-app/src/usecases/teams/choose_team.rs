//! Use case affiliating a player with a team.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use kl_core::ids::UserId;
use kl_core::ports::{TeamRepositoryPort, UserRepositoryPort};
use kl_core::team::{Team, TeamError};

pub struct ChooseTeam {
    users: Arc<dyn UserRepositoryPort>,
    teams: Arc<dyn TeamRepositoryPort>,
}

impl ChooseTeam {
    pub fn new(users: Arc<dyn UserRepositoryPort>, teams: Arc<dyn TeamRepositoryPort>) -> Self {
        Self { users, teams }
    }

    /// Affiliate `user_id` with the team identified by `code`. Switching
    /// teams is allowed; the previous affiliation is simply replaced.
    pub async fn execute(&self, user_id: &UserId, code: &str) -> Result<Team, TeamError> {
        let span = info_span!("usecase.choose_team.execute");

        async {
            let team = self
                .teams
                .find_by_code(code)
                .await?
                .ok_or_else(|| TeamError::UnknownCode(code.to_string()))?;

            self.users.set_team(user_id, &team.id).await?;
            info!(user_id = %user_id, team_code = %team.code, "team chosen");
            Ok(team)
        }
        .instrument(span)
        .await
    }
}
