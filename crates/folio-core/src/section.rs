//! Sections: the independently saved groups of profile fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FolioError, Result};

/// One of the four groups the admin surface saves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PersonalInfo,
    ResearchInterests,
    Publications,
    Education,
}

impl Section {
    /// Top-level document keys owned by this section.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Section::PersonalInfo => &PersonalInfo::KEYS,
            Section::ResearchInterests => &["researchInterests"],
            Section::Publications => &["publications"],
            Section::Education => &["education"],
        }
    }

    /// Human label, as used in notifications ("Research interests updated ...").
    pub fn label(self) -> &'static str {
        match self {
            Section::PersonalInfo => "Personal information",
            Section::ResearchInterests => "Research interests",
            Section::Publications => "Publications",
            Section::Education => "Education information",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The personal-info form: every scalar field of the profile.
///
/// Optional URL fields are plain strings here; an empty string means unset,
/// which is also how the seed document stores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub bio: String,
    pub about: String,
    pub profile_image: String,
    pub personal_photo: String,
    pub cv_link: String,
}

impl PersonalInfo {
    pub const KEYS: [&'static str; 9] = [
        "name",
        "title",
        "location",
        "email",
        "bio",
        "about",
        "profileImage",
        "personalPhoto",
        "cvLink",
    ];
}

/// Replacement value for exactly one section.
///
/// List sections carry their entries as raw JSON, so entries that do not fit
/// the typed model (a numeric year, an extra key) are written back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionUpdate {
    PersonalInfo(PersonalInfo),
    ResearchInterests(Vec<Value>),
    Publications(Vec<Value>),
    Education(Vec<Value>),
}

impl SectionUpdate {
    pub fn section(&self) -> Section {
        match self {
            SectionUpdate::PersonalInfo(_) => Section::PersonalInfo,
            SectionUpdate::ResearchInterests(_) => Section::ResearchInterests,
            SectionUpdate::Publications(_) => Section::Publications,
            SectionUpdate::Education(_) => Section::Education,
        }
    }

    /// The top-level `(key, value)` pairs this update writes.
    pub fn entries(&self) -> Result<Vec<(&'static str, Value)>> {
        let entries = match self {
            SectionUpdate::PersonalInfo(info) => {
                let value = serde_json::to_value(info)?;
                PersonalInfo::KEYS
                    .iter()
                    .map(|key| (*key, value.get(*key).cloned().unwrap_or_default()))
                    .collect()
            }
            SectionUpdate::ResearchInterests(items) => {
                vec![("researchInterests", Value::Array(items.clone()))]
            }
            SectionUpdate::Publications(items) => {
                vec![("publications", Value::Array(items.clone()))]
            }
            SectionUpdate::Education(items) => vec![("education", Value::Array(items.clone()))],
        };
        Ok(entries)
    }
}

/// Serializes typed list entries for a [`SectionUpdate`].
pub fn list_entries<T: Serialize>(items: &[T]) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(FolioError::from))
        .collect()
}
