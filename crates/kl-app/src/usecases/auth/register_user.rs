//! Use case for email/password registration.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use kl_core::auth::password;
use kl_core::ports::{ClockPort, TeamRepositoryPort, UserRepositoryPort};
use kl_core::user::NewUser;

use crate::usecases::auth::error::AuthError;
use crate::usecases::auth::token::TokenSigner;
use crate::usecases::auth::AuthOutcome;

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    /// Optional at registration; affiliation can be chosen later.
    pub team_code: Option<String>,
}

/// Use case creating an email/password account.
///
/// ## Behavior
/// - Rejects an email that is already registered
/// - Resolves the optional team code before creating the account
/// - Stores an Argon2id hash, never the password
/// - Mints an access token for the fresh account
pub struct RegisterUser {
    users: Arc<dyn UserRepositoryPort>,
    teams: Arc<dyn TeamRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    signer: Arc<TokenSigner>,
}

impl RegisterUser {
    pub fn new(
        users: Arc<dyn UserRepositoryPort>,
        teams: Arc<dyn TeamRepositoryPort>,
        clock: Arc<dyn ClockPort>,
        signer: Arc<TokenSigner>,
    ) -> Self {
        Self {
            users,
            teams,
            clock,
            signer,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> Result<AuthOutcome, AuthError> {
        let span = info_span!("usecase.register_user.execute");

        async {
            if self.users.find_by_email(&input.email).await?.is_some() {
                return Err(AuthError::EmailTaken);
            }

            let team_id = match &input.team_code {
                Some(code) => Some(
                    self.teams
                        .find_by_code(code)
                        .await?
                        .ok_or_else(|| AuthError::UnknownTeamCode(code.clone()))?
                        .id,
                ),
                None => None,
            };

            let password_hash = password::hash_password(&input.password)?;
            let user = self
                .users
                .insert(NewUser {
                    email: input.email,
                    password_hash: Some(password_hash),
                    display_name: input.display_name,
                    google_sub: None,
                    team_id,
                })
                .await?;

            let token = self.signer.mint(&user.id, self.clock.now_utc())?;
            info!(user_id = %user.id, "account registered");
            Ok(AuthOutcome { token, user })
        }
        .instrument(span)
        .await
    }
}
