//! Atomic JSON file writes.
//!
//! Each write stages into its own hidden temp file next to the target, which
//! is fsynced and then renamed over it, so readers see either the old
//! document or the new one. No file lock is taken: concurrent writers race
//! and the last rename wins.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tokio::fs;
use tokio::task;

use folio_core::ProfileDocument;
use folio_core::error::{FolioError, Result};

/// A handle to a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct AtomicJsonFile {
    path: PathBuf,
}

impl AtomicJsonFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the target file exists.
    pub async fn exists(&self) -> Result<bool> {
        Ok(fs::try_exists(&self.path).await?)
    }

    /// Reads and parses the file.
    pub async fn load(&self) -> Result<ProfileDocument> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| FolioError::io(format!("Failed to read {}: {}", self.path.display(), e)))?;
        ProfileDocument::from_slice(&bytes)
    }

    /// Serializes `doc` and replaces the file contents atomically.
    pub async fn save(&self, doc: &ProfileDocument) -> Result<()> {
        let json = doc.to_pretty_json()?;
        let path = self.path.clone();

        task::spawn_blocking(move || Self::write_replace(&path, json.as_bytes()))
            .await
            .map_err(|e| FolioError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    /// Stages `bytes` in a uniquely named sibling, e.g.
    /// `data/.website-data.json.a1B2c3.tmp`, then renames it into place.
    /// The temp file is removed on any failure.
    fn write_replace(path: &Path, bytes: &[u8]) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            Some(_) => Path::new("."),
            None => return Err(FolioError::io("Path has no parent directory")),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| FolioError::io("Path has no file name"))?;

        let mut tmp = Builder::new()
            .prefix(&format!(".{}.", file_name.to_string_lossy()))
            .suffix(".tmp")
            .tempfile_in(parent)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;

        tmp.persist(path).map_err(|e| {
            FolioError::io(format!("Failed to replace {}: {}", path.display(), e.error))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::new(temp_dir.path().join("doc.json"));

        let doc = ProfileDocument::new(json!({"name": "Ada", "count": 42}));
        file.save(&doc).await.unwrap();

        assert!(file.exists().await.unwrap());
        assert_eq!(file.load().await.unwrap(), doc);
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::new(temp_dir.path().join("doc.json"));

        file.save(&ProfileDocument::new(json!({}))).await.unwrap();
        file.save(&ProfileDocument::new(json!({"v": 2}))).await.unwrap();

        assert_eq!(dir_entries(temp_dir.path()), vec!["doc.json"]);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::new(temp_dir.path().join("missing.json"));

        assert!(!file.exists().await.unwrap());
        assert!(file.load().await.unwrap_err().is_io());
    }

    #[tokio::test]
    async fn test_failed_replace_cleans_up_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        // A non-empty directory at the target cannot be renamed over.
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();
        let file = AtomicJsonFile::new(path.clone());

        let err = file.save(&ProfileDocument::new(json!({"v": 2}))).await.unwrap_err();

        assert!(err.is_io());
        assert_eq!(dir_entries(temp_dir.path()), vec!["doc.json"]);
        assert!(path.join("keep").exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_never_tear_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = std::sync::Arc::new(AtomicJsonFile::new(temp_dir.path().join("doc.json")));
        let docs: Vec<_> = (0..8)
            .map(|i| ProfileDocument::new(json!({"writer": i, "body": "x".repeat(4096 * (i + 1))})))
            .collect();

        for _ in 0..20 {
            let handles: Vec<_> = docs
                .iter()
                .cloned()
                .map(|doc| {
                    let file = file.clone();
                    tokio::spawn(async move { file.save(&doc).await })
                })
                .collect();
            for handle in handles {
                handle.await.unwrap().unwrap();
            }

            let stored = file.load().await.unwrap();
            assert!(docs.contains(&stored));
        }
        assert_eq!(dir_entries(temp_dir.path()), vec!["doc.json"]);
    }
}
