use serde::{Deserialize, Serialize};

/// Identifier of a registered player account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

super::id_macro::impl_db_id!(UserId);
