//! Account and credential use cases.

pub mod error;
pub mod link_google_account;
pub mod login_user;
pub mod register_user;
pub mod token;

pub use error::AuthError;
pub use link_google_account::{GoogleIdentity, LinkGoogleAccount};
pub use login_user::LoginUser;
pub use register_user::{RegisterInput, RegisterUser};
pub use token::{TokenClaims, TokenSigner};

use kl_core::user::User;

/// Outcome of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub token: String,
    pub user: User,
}
