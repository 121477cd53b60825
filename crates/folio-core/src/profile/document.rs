//! The persisted profile document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::model::Profile;
use crate::error::Result;
use crate::section::SectionUpdate;

/// The single JSON document holding all editable site content.
///
/// The store treats it as opaque JSON: whatever was parsed from disk is handed
/// back unmodified, including keys the typed [`Profile`] does not know about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileDocument(Value);

impl ProfileDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Builds a document from the typed view, keeping the field order of
    /// [`Profile`].
    pub fn from_profile(profile: &Profile) -> Self {
        // Plain strings and vectors always serialize.
        Self(serde_json::to_value(profile).unwrap_or_default())
    }

    /// Parses stored bytes without any schema check.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(serde_json::from_slice(bytes)?))
    }

    /// Serializes with 2-space indentation, matching the seed file layout.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Typed view of the document. Absent fields take their defaults; a field
    /// of the wrong JSON type is an error.
    pub fn to_profile(&self) -> Result<Profile> {
        Ok(Profile::deserialize(&self.0)?)
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// Top-level field lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Shallow merge of one section over this document.
    ///
    /// Keys carried by the update replace the same top-level keys in place;
    /// all other keys are kept as they are. A document that is not a JSON
    /// object is treated as an empty one.
    pub fn merged_with(&self, update: &SectionUpdate) -> Result<Self> {
        let mut object = self.as_object().cloned().unwrap_or_default();
        for (key, value) in update.entries()? {
            object.insert(key.to_string(), value);
        }
        Ok(Self(Value::Object(object)))
    }
}

impl From<Value> for ProfileDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<ProfileDocument> for Value {
    fn from(doc: ProfileDocument) -> Self {
        doc.into_value()
    }
}
