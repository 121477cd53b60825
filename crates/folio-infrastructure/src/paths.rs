//! Path management for the profile document.
//!
//! # Directory Structure
//!
//! ```text
//! <project-root>/
//! ├── folio.toml               # Optional server configuration
//! └── data/
//!     └── website-data.json    # The profile document
//! ```

use std::path::{Path, PathBuf};

use folio_core::error::{FolioError, Result};

/// Resolves Folio's well-known locations under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioPaths {
    project_root: PathBuf,
}

impl FolioPaths {
    pub const DATA_DIR: &'static str = "data";
    pub const DATA_FILE: &'static str = "website-data.json";
    pub const CONFIG_FILE: &'static str = "folio.toml";

    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Uses the process working directory as project root.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| FolioError::config(format!("Cannot determine working directory: {}", e)))?;
        Ok(Self::new(cwd))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// `<project-root>/data`
    pub fn data_dir(&self) -> PathBuf {
        self.project_root.join(Self::DATA_DIR)
    }

    /// `<project-root>/data/website-data.json`
    pub fn website_data_file(&self) -> PathBuf {
        self.data_dir().join(Self::DATA_FILE)
    }

    /// `<project-root>/folio.toml`
    pub fn config_file(&self) -> PathBuf {
        self.project_root.join(Self::CONFIG_FILE)
    }
}
