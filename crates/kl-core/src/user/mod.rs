//! Player account domain.

use serde::{Deserialize, Serialize};

use crate::ids::{TeamId, UserId};

/// A registered player. `password_hash` is `None` for OAuth-only accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
    pub google_sub: Option<String>,
    pub team_id: Option<TeamId>,
    pub is_active: bool,
    /// Unix seconds.
    pub created_at: i64,
}

/// Account data for a user being created; the storage layer assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
    pub google_sub: Option<String>,
    pub team_id: Option<TeamId>,
}
