//! Use case consuming a verified Google identity.
//!
//! The OAuth handshake itself happens at the boundary; by the time this use
//! case runs, the identity has already been verified against Google. The job
//! here is the account bookkeeping: find by subject, else link by email,
//! else create an OAuth-only account.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use kl_core::ports::{ClockPort, UserRepositoryPort};
use kl_core::user::{NewUser, User};

use crate::usecases::auth::error::AuthError;
use crate::usecases::auth::token::TokenSigner;
use crate::usecases::auth::AuthOutcome;

/// A Google identity the boundary layer has already verified.
#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    pub sub: String,
    pub email: String,
    pub display_name: Option<String>,
}

pub struct LinkGoogleAccount {
    users: Arc<dyn UserRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    signer: Arc<TokenSigner>,
}

impl LinkGoogleAccount {
    pub fn new(
        users: Arc<dyn UserRepositoryPort>,
        clock: Arc<dyn ClockPort>,
        signer: Arc<TokenSigner>,
    ) -> Self {
        Self {
            users,
            clock,
            signer,
        }
    }

    pub async fn execute(&self, identity: GoogleIdentity) -> Result<AuthOutcome, AuthError> {
        let span = info_span!("usecase.link_google_account.execute");

        async {
            let user = self.resolve_account(&identity).await?;
            let token = self.signer.mint(&user.id, self.clock.now_utc())?;
            info!(user_id = %user.id, "google sign-in resolved");
            Ok(AuthOutcome { token, user })
        }
        .instrument(span)
        .await
    }

    async fn resolve_account(&self, identity: &GoogleIdentity) -> Result<User, AuthError> {
        if let Some(user) = self.users.find_by_google_sub(&identity.sub).await? {
            return Ok(user);
        }

        // Same email already registered with a password: attach the subject.
        if let Some(user) = self.users.find_by_email(&identity.email).await? {
            self.users
                .link_google(&user.id, &identity.sub, identity.display_name.as_deref())
                .await?;
            let linked = self
                .users
                .find_by_id(&user.id)
                .await?
                .ok_or(kl_core::ports::errors::UserRepositoryError::NotFound)?;
            return Ok(linked);
        }

        let created = self
            .users
            .insert(NewUser {
                email: identity.email.clone(),
                password_hash: None,
                display_name: identity.display_name.clone(),
                google_sub: Some(identity.sub.clone()),
                team_id: None,
            })
            .await?;
        Ok(created)
    }
}
