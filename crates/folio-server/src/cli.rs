//! Command-line flags. Flags override values from `folio.toml`.

use std::path::PathBuf;

use clap::Parser;

use folio_core::error::Result;
use folio_infrastructure::{FolioConfig, FolioPaths};

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Folio - academic portfolio content server", long_about = None)]
pub struct Cli {
    /// Path to the configuration file [default: <project-root>/folio.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub bind: Option<String>,

    /// Directory holding `data/website-data.json`
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Explicit location of the profile document
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Loads the config file and applies flag overrides.
    pub fn resolve_config(&self) -> Result<FolioConfig> {
        let config_path = match (&self.config, &self.project_root) {
            (Some(path), _) => path.clone(),
            (None, Some(root)) => FolioPaths::new(root.clone()).config_file(),
            (None, None) => FolioPaths::from_current_dir()?.config_file(),
        };

        let mut config = FolioConfig::load(&config_path)?;
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(root) = &self.project_root {
            config.project_root = Some(root.clone());
        }
        if let Some(file) = &self.data_file {
            config.data_file = Some(file.clone());
        }
        Ok(config)
    }
}
