//! Server configuration loaded from `folio.toml`.
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! project_root = "/srv/portfolio"
//! # data_file = "/var/lib/portfolio/website-data.json"
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use folio_core::error::{FolioError, Result};

use crate::json_profile_store::JsonFileProfileStore;
use crate::paths::FolioPaths;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Socket address the HTTP server listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Root under which `data/website-data.json` lives. Defaults to the
    /// working directory.
    pub project_root: Option<PathBuf>,
    /// Overrides the document location entirely.
    pub data_file: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            project_root: None,
            data_file: None,
        }
    }
}

impl FolioConfig {
    /// Reads `path`, or returns defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            FolioError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| FolioError::config(format!("Invalid {}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Paths rooted at `project_root`, or at the working directory.
    pub fn paths(&self) -> Result<FolioPaths> {
        match &self.project_root {
            Some(root) => Ok(FolioPaths::new(root.clone())),
            None => FolioPaths::from_current_dir(),
        }
    }

    /// Where the profile document is stored.
    pub fn data_file(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(file) => Ok(file.clone()),
            None => Ok(self.paths()?.website_data_file()),
        }
    }

    /// The file store this configuration points at.
    pub fn profile_store(&self) -> Result<JsonFileProfileStore> {
        Ok(JsonFileProfileStore::with_path(self.data_file()?))
    }
}
