//! Use case resolving a player's own profile.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info_span, Instrument};

use kl_core::ids::UserId;
use kl_core::ports::{TeamRepositoryPort, UserRepositoryPort};
use kl_core::team::TeamError;

/// Profile view returned to the boundary layer.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub team_code: Option<String>,
}

pub struct GetProfile {
    users: Arc<dyn UserRepositoryPort>,
    teams: Arc<dyn TeamRepositoryPort>,
}

impl GetProfile {
    pub fn new(users: Arc<dyn UserRepositoryPort>, teams: Arc<dyn TeamRepositoryPort>) -> Self {
        Self { users, teams }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<Profile, TeamError> {
        let span = info_span!("usecase.get_profile.execute");

        async {
            let user = self
                .users
                .find_by_id(user_id)
                .await?
                .ok_or(kl_core::ports::errors::UserRepositoryError::NotFound)?;

            let team_code = match user.team_id {
                Some(team_id) => self
                    .teams
                    .find_by_id(&team_id)
                    .await?
                    .map(|team| team.code),
                None => None,
            };

            Ok(Profile {
                id: user.id,
                email: user.email,
                display_name: user.display_name,
                team_code,
            })
        }
        .instrument(span)
        .await
    }
}
