use async_trait::async_trait;

use crate::ids::WordId;
use crate::ports::errors::CatalogError;
use crate::words::{NewWordEntry, WordEntry};

/// Read/bulk-load access to the primary word catalog.
#[async_trait]
pub trait WordCatalogPort: Send + Sync {
    /// All word ids in ascending order.
    ///
    /// The ordering contract matters: rotation indexes into this list, so the
    /// order must be stable across calls, restarts and replicas regardless of
    /// insertion order.
    async fn list_ids(&self) -> Result<Vec<WordId>, CatalogError>;

    async fn find_by_id(&self, id: &WordId) -> Result<Option<WordEntry>, CatalogError>;

    /// Bulk-load entries (administrative). Returns the inserted count.
    async fn insert_many(&self, entries: Vec<NewWordEntry>) -> Result<usize, CatalogError>;
}
