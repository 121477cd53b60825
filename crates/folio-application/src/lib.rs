//! Application layer for Folio.
//!
//! Coordinates the domain and infrastructure layers: the content service that
//! fronts the document store, and the admin editing session built on it.

pub mod content_service;
pub mod editor;
pub mod validation;

pub use content_service::{ContentService, UpdateOutcome};
pub use editor::{EditSession, Notification};
