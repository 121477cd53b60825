//! File-backed profile store.
//!
//! File location: `{project_root}/data/website-data.json` unless a custom path
//! is given.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use folio_core::ProfileDocument;
use folio_core::error::{FolioError, Result};
use folio_core::store::ProfileStore;

use crate::paths::FolioPaths;
use crate::storage::AtomicJsonFile;

/// Stores the profile document as one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    file: AtomicJsonFile,
}

impl JsonFileProfileStore {
    /// Store at the standard location under `paths`.
    pub fn new(paths: &FolioPaths) -> Self {
        Self::with_path(paths.website_data_file())
    }

    /// Store at an explicit file path (for testing and custom deployments).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl ProfileStore for JsonFileProfileStore {
    fn location(&self) -> String {
        self.file.path().display().to_string()
    }

    async fn ensure_location(&self) -> Result<()> {
        if let Some(parent) = self.file.path().parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                FolioError::io(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    async fn exists(&self) -> Result<bool> {
        self.file.exists().await
    }

    async fn read(&self) -> Result<ProfileDocument> {
        self.file.load().await
    }

    async fn write(&self, doc: &ProfileDocument) -> Result<()> {
        self.file.save(doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::default_document;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_creates_data_directory_and_seed() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProfileStore::new(&FolioPaths::new(temp_dir.path()));

        let doc = store.load().await.unwrap();

        assert_eq!(doc, default_document());
        assert!(temp_dir.path().join("data").is_dir());
        let written = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(written, default_document().to_pretty_json().unwrap());
    }

    #[tokio::test]
    async fn test_ensure_location_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store =
            JsonFileProfileStore::with_path(temp_dir.path().join("a/b/c/website-data.json"));

        store.ensure_location().await.unwrap();
        store.ensure_location().await.unwrap();

        assert!(temp_dir.path().join("a/b/c").is_dir());
    }
}
