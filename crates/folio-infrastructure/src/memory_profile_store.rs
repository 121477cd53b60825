//! In-memory profile store.
//!
//! Keeps the serialized bytes rather than a parsed value so that corrupt
//! storage can be simulated, and can be told to fail writes.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use folio_core::ProfileDocument;
use folio_core::error::{FolioError, Result};
use folio_core::store::ProfileStore;

#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    bytes: RwLock<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl InMemoryProfileStore {
    /// Empty store: the first load seeds it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a serialized document.
    pub fn with_document(doc: &ProfileDocument) -> Result<Self> {
        Ok(Self::with_raw_bytes(doc.to_pretty_json()?.into_bytes()))
    }

    /// Store pre-populated with arbitrary bytes, valid JSON or not.
    pub fn with_raw_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: RwLock::new(Some(bytes.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The currently stored bytes.
    pub async fn raw_bytes(&self) -> Option<Vec<u8>> {
        self.bytes.read().await.clone()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn ensure_location(&self) -> Result<()> {
        Ok(())
    }

    async fn exists(&self) -> Result<bool> {
        Ok(self.bytes.read().await.is_some())
    }

    async fn read(&self) -> Result<ProfileDocument> {
        let bytes = self.bytes.read().await;
        match bytes.as_deref() {
            Some(bytes) => ProfileDocument::from_slice(bytes),
            None => Err(FolioError::io("No document stored")),
        }
    }

    async fn write(&self, doc: &ProfileDocument) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FolioError::io("Simulated write failure"));
        }
        let serialized = doc.to_pretty_json()?.into_bytes();
        *self.bytes.write().await = Some(serialized);
        Ok(())
    }
}
