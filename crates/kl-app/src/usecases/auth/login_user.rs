//! Use case for email/password login.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use kl_core::auth::password;
use kl_core::ports::{ClockPort, UserRepositoryPort};

use crate::usecases::auth::error::AuthError;
use crate::usecases::auth::token::TokenSigner;
use crate::usecases::auth::AuthOutcome;

/// Use case verifying credentials and minting an access token.
///
/// Unknown email, OAuth-only account, and wrong password all collapse into
/// the same `InvalidCredentials` answer so the response does not leak which
/// part failed.
pub struct LoginUser {
    users: Arc<dyn UserRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    signer: Arc<TokenSigner>,
}

impl LoginUser {
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

    pub async fn execute(&self, email: &str, password_input: &str) -> Result<AuthOutcome, AuthError> {
        let span = info_span!("usecase.login_user.execute");

        async {
            let user = self
                .users
                .find_by_email(email)
                .await?
                .ok_or(AuthError::InvalidCredentials)?;

            let stored_hash = user
                .password_hash
                .as_deref()
                .ok_or(AuthError::InvalidCredentials)?;
            if !password::verify_password(password_input, stored_hash)? {
                return Err(AuthError::InvalidCredentials);
            }

            let token = self.signer.mint(&user.id, self.clock.now_utc())?;
            info!(user_id = %user.id, "login succeeded");
            Ok(AuthOutcome { token, user })
        }
        .instrument(span)
        .await
    }
}
