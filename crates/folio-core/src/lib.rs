//! Domain layer for Folio.
//!
//! Holds the profile document model, the section types the admin surface
//! edits, and the [`ProfileStore`](store::ProfileStore) contract. Nothing in
//! this crate touches the file system.

pub mod error;
pub mod profile;
pub mod section;
pub mod store;

// Re-export common types
pub use error::FolioError;
pub use profile::{Profile, ProfileDocument, default_document};
pub use section::{PersonalInfo, Section, SectionUpdate, list_entries};
pub use store::ProfileStore;
