//! Infrastructure layer for Folio: storage backends, paths and configuration.

pub mod config;
pub mod json_profile_store;
pub mod memory_profile_store;
pub mod paths;
pub mod storage;

pub use crate::config::FolioConfig;
pub use crate::json_profile_store::JsonFileProfileStore;
pub use crate::memory_profile_store::InMemoryProfileStore;
pub use crate::paths::FolioPaths;
