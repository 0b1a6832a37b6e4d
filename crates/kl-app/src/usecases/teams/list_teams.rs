//! Use case listing the teams players can join.

use std::sync::Arc;

use tracing::{info_span, Instrument};

use kl_core::ports::errors::TeamRepositoryError;
use kl_core::ports::TeamRepositoryPort;
use kl_core::team::Team;

pub struct ListTeams {
    teams: Arc<dyn TeamRepositoryPort>,
}

impl ListTeams {
    pub fn new(teams: Arc<dyn TeamRepositoryPort>) -> Self {
        Self { teams }
    }

    pub async fn execute(&self) -> Result<Vec<Team>, TeamRepositoryError> {
        let span = info_span!("usecase.list_teams.execute");
        async { self.teams.list_all().await }.instrument(span).await
    }
}
