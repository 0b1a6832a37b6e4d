use serde::{Deserialize, Serialize};

/// Identifier of a catalog word. Assigned by the storage layer and stable for
/// the lifetime of the entry; rotation order is defined by ascending `WordId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(i64);

super::id_macro::impl_db_id!(WordId);
