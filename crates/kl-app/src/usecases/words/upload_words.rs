//! Administrative bulk upload into the word catalog.

use std::sync::Arc;

use subtle::ConstantTimeEq;
use tracing::{info, info_span, Instrument};

use kl_core::ports::WordCatalogPort;
use kl_core::words::NewWordEntry;

use crate::usecases::auth::error::AuthError;

/// Use case bulk-loading words.
///
/// ## Behavior
/// - Requires the configured admin upload key
/// - Validates every entry (non-empty word and definition) before inserting
///   any of them, so a bad file never half-loads
pub struct UploadWords {
    catalog: Arc<dyn WordCatalogPort>,
    admin_key: String,
}

impl UploadWords {
    pub fn new(catalog: Arc<dyn WordCatalogPort>, admin_key: impl Into<String>) -> Self {
        Self {
            catalog,
            admin_key: admin_key.into(),
        }
    }

    pub async fn execute(
        &self,
        provided_key: &str,
        entries: Vec<NewWordEntry>,
    ) -> Result<usize, AuthError> {
        let span = info_span!("usecase.upload_words.execute", count = entries.len());

        async {
            let key_matches: bool = provided_key
                .as_bytes()
                .ct_eq(self.admin_key.as_bytes())
                .into();
            if self.admin_key.is_empty() || !key_matches {
                return Err(AuthError::InvalidAdminKey);
            }

            for (position, entry) in entries.iter().enumerate() {
                entry
                    .validate()
                    .map_err(|e| AuthError::Other(e.context(format!("entry {position}"))))?;
            }

            let inserted = self
                .catalog
                .insert_many(entries)
                .await
                .map_err(|e| AuthError::Other(e.into()))?;
            info!(inserted, "word upload accepted");
            Ok(inserted)
        }
        .instrument(span)
        .await
    }
}
