//! Team affiliation domain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TeamId;
use crate::ports::errors::{TeamRepositoryError, UserRepositoryError};

/// A team players can affiliate with. Codes are short, unique join keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum TeamError {
    #[error("unknown team code: {0}")]
    UnknownCode(String),

    #[error(transparent)]
    Teams(#[from] TeamRepositoryError),

    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}
