//! Content service: the boundary between the document store and its
//! consumers (HTTP handlers, the admin editing surface).
//!
//! Pass-through only. The service neither validates nor reshapes documents.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use folio_core::ProfileDocument;
use folio_core::error::{FolioError, Result};
use folio_core::store::ProfileStore;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch website data";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update website data";

/// Result of a successful update, serialized as `{"success": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub success: bool,
}

#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ProfileStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Returns the full document, seeding defaults on first run.
    pub async fn get_website_data(&self) -> Result<ProfileDocument> {
        self.store.load().await.inspect_err(|e| {
            tracing::error!("Error fetching website data: {}", e);
        })
    }

    /// Persists `data` as the complete new document.
    ///
    /// Any store failure comes back as [`FolioError::UpdateFailed`] with a
    /// generic message; the cause is only logged.
    pub async fn update_website_data(&self, data: ProfileDocument) -> Result<UpdateOutcome> {
        match self.store.save(&data).await {
            Ok(true) => Ok(UpdateOutcome { success: true }),
            Ok(false) => {
                tracing::error!("Error updating website data: store rejected the write");
                Err(FolioError::UpdateFailed(UPDATE_FAILED_MESSAGE.to_string()))
            }
            Err(e) => {
                tracing::error!("Error updating website data: {}", e);
                Err(FolioError::UpdateFailed(UPDATE_FAILED_MESSAGE.to_string()))
            }
        }
    }
}
