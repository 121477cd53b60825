//! Input rules enforced by the editing surface before a section save.
//!
//! The content service trusts whatever it is given; these checks are the only
//! validation a document passes through.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use folio_core::PersonalInfo;
use folio_core::error::{FolioError, Result};
use folio_core::profile::{Education, Publication, ResearchInterest};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Field-level checks for one form or list entry.
pub trait Validate {
    /// Checks the value; `path` prefixes field names in errors
    /// (e.g. `publications[2]`).
    fn validate_at(&self, path: &str) -> Result<()>;

    fn validate(&self) -> Result<()> {
        self.validate_at("")
    }
}

fn field_path(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", path, field)
    }
}

fn min_chars(path: &str, field: &str, label: &str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(FolioError::validation(
            field_path(path, field),
            format!("{} must be at least {} characters.", label, min),
        ));
    }
    Ok(())
}

impl Validate for PersonalInfo {
    fn validate_at(&self, path: &str) -> Result<()> {
        min_chars(path, "name", "Name", &self.name, 2)?;
        min_chars(path, "title", "Title", &self.title, 2)?;
        min_chars(path, "location", "Location", &self.location, 2)?;
        if !EMAIL_RE.is_match(&self.email) {
            return Err(FolioError::validation(
                field_path(path, "email"),
                "Please enter a valid email address.",
            ));
        }
        min_chars(path, "bio", "Bio", &self.bio, 10)?;
        min_chars(path, "about", "About section", &self.about, 10)
    }
}

impl Validate for ResearchInterest {
    fn validate_at(&self, path: &str) -> Result<()> {
        min_chars(path, "title", "Title", &self.title, 2)?;
        min_chars(path, "description", "Description", &self.description, 10)
    }
}

impl Validate for Publication {
    fn validate_at(&self, path: &str) -> Result<()> {
        min_chars(path, "title", "Title", &self.title, 2)?;
        min_chars(path, "authors", "Authors", &self.authors, 2)?;
        min_chars(path, "journal", "Journal", &self.journal, 2)?;
        min_chars(path, "year", "Year", &self.year, 4)
    }
}

impl Validate for Education {
    fn validate_at(&self, path: &str) -> Result<()> {
        min_chars(path, "degree", "Degree", &self.degree, 2)?;
        min_chars(path, "institution", "Institution", &self.institution, 2)?;
        min_chars(path, "year", "Year", &self.year, 4)
    }
}

/// Validates every raw entry of a list section as a `T`, reporting the first
/// failure. An entry that does not have the shape of `T` is itself invalid.
pub fn validate_list<T>(key: &str, items: &[Value]) -> Result<()>
where
    T: Validate + DeserializeOwned,
{
    items.iter().enumerate().try_for_each(|(index, item)| {
        let path = format!("{}[{}]", key, index);
        let entry = T::deserialize(item)
            .map_err(|e| FolioError::validation(path.clone(), format!("Malformed entry: {}", e)))?;
        entry.validate_at(&path)
    })
}
