//! Document store trait.
//!
//! Backends implement the storage primitives; the load/save contract itself
//! (seeding, read-failure fallback, write-failure signalling) lives in the
//! provided methods so every backend behaves the same way.
//!
//! There is no locking. Two concurrent `save` calls race and the last write
//! to land wins.

use async_trait::async_trait;

use crate::error::Result;
use crate::profile::{ProfileDocument, default_document};

/// Durable home of the single profile document.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Human-readable location, used in log lines.
    fn location(&self) -> String;

    /// Makes sure the containing location exists (e.g. creates the data
    /// directory and any missing parents). Must be idempotent.
    async fn ensure_location(&self) -> Result<()>;

    /// Whether a backing document exists.
    async fn exists(&self) -> Result<bool>;

    /// Reads and parses the stored document.
    async fn read(&self) -> Result<ProfileDocument>;

    /// Replaces the stored document entirely. A failed write must leave the
    /// previous contents in place.
    async fn write(&self, doc: &ProfileDocument) -> Result<()>;

    /// Writes the seed document if, and only if, nothing is stored yet.
    ///
    /// Returns the seeded document when a write happened.
    async fn seed_if_absent(&self) -> Result<Option<ProfileDocument>> {
        if self.exists().await? {
            return Ok(None);
        }
        let seed = default_document();
        self.write(&seed).await?;
        tracing::info!("Seeded default profile document at {}", self.location());
        Ok(Some(seed))
    }

    /// Loads the document, seeding defaults on first run.
    ///
    /// Read and parse failures are logged and answered with the seed
    /// defaults; the stored bytes are left untouched. Only a failure to
    /// prepare the location is returned as an error.
    async fn load(&self) -> Result<ProfileDocument> {
        self.ensure_location().await?;

        let loaded = match self.seed_if_absent().await {
            Ok(Some(seeded)) => Ok(seeded),
            Ok(None) => self.read().await,
            Err(e) => Err(e),
        };

        match loaded {
            Ok(doc) => {
                tracing::debug!("Loaded profile document from {}", self.location());
                Ok(doc)
            }
            Err(e) => {
                tracing::error!(
                    "Error reading website data from {}: {}",
                    self.location(),
                    e
                );
                Ok(default_document())
            }
        }
    }

    /// Overwrites the stored document.
    ///
    /// Returns `Ok(false)` when the write itself failed (already logged).
    /// Only a failure to prepare the location is returned as an error.
    async fn save(&self, doc: &ProfileDocument) -> Result<bool> {
        self.ensure_location().await?;

        match self.write(doc).await {
            Ok(()) => {
                tracing::debug!("Saved profile document to {}", self.location());
                Ok(true)
            }
            Err(e) => {
                tracing::error!("Error saving website data to {}: {}", self.location(), e);
                Ok(false)
            }
        }
    }
}
