//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: typed view of the profile (personal info plus the three lists)
//! - `document`: the untyped JSON document the store persists
//! - `defaults`: the seed document used for first runs and read failures

mod defaults;
mod document;
mod model;

pub use defaults::default_document;
pub use document::ProfileDocument;
pub use model::{Education, Profile, Publication, RECENT_PUBLICATIONS, ResearchInterest};
