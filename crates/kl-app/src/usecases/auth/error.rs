use thiserror::Error;

use kl_core::ports::errors::{TeamRepositoryError, UserRepositoryError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email already registered")]
    EmailTaken,

    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("unknown team code: {0}")]
    UnknownTeamCode(String),

    #[error("invalid admin key")]
    InvalidAdminKey,

    #[error("malformed access token")]
    InvalidToken,

    #[error("access token expired")]
    ExpiredToken,

    #[error(transparent)]
    Users(#[from] UserRepositoryError),

    #[error(transparent)]
    Teams(#[from] TeamRepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
