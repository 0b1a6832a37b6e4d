use serde::{Deserialize, Serialize};

/// Identifier of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

super::id_macro::impl_db_id!(TeamId);
