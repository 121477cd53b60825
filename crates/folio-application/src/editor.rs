//! Admin editing session.
//!
//! Holds the document as loaded plus working copies of the three list
//! sections. List entries are kept as the raw JSON found in the document, so
//! keys and values the form does not know about are written back unchanged.
//! Entries are addressed by position only: if another session saves in
//! between, a stale session's "entry N" may no longer be the entry the user
//! sees, and its next save overwrites the other session's changes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use folio_core::error::{FolioError, Result};
use folio_core::profile::{Education, Publication, ResearchInterest};
use folio_core::{PersonalInfo, ProfileDocument, Section, SectionUpdate};

use crate::content_service::{ContentService, UpdateOutcome};
use crate::validation::{Validate, validate_list};

/// Toast-style message shown to the editor after a load or save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Notification {
    pub fn saved(section: Section) -> Self {
        Self {
            title: "Success".to_string(),
            description: format!("{} updated successfully.", section.label()),
            destructive: false,
        }
    }

    pub fn failed(section: Section) -> Self {
        Self {
            title: "Error".to_string(),
            description: format!(
                "Failed to update {}. Please try again.",
                section.label().to_lowercase()
            ),
            destructive: true,
        }
    }

    pub fn load_failed() -> Self {
        Self {
            title: "Error".to_string(),
            description: "Failed to load website data. Please try again.".to_string(),
            destructive: true,
        }
    }

    /// Notification for opening a session; a successful open shows none.
    pub fn for_open<T>(result: &Result<T>) -> Option<Self> {
        result.as_ref().err().map(|_| Self::load_failed())
    }

    /// Notification for the outcome of a section save.
    pub fn for_save<T>(section: Section, result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::saved(section),
            Err(_) => Self::failed(section),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchInterestField {
    Title,
    Description,
}

impl ResearchInterestField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationField {
    Title,
    Authors,
    Journal,
    Year,
    Link,
}

impl PublicationField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Authors => "authors",
            Self::Journal => "journal",
            Self::Year => "year",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    Year,
    Description,
}

impl EducationField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Institution => "institution",
            Self::Year => "year",
            Self::Description => "description",
        }
    }
}

/// Reads one list section verbatim. A missing key or a value that is not an
/// array reads as an empty list.
fn list_section(doc: &ProfileDocument, key: &str) -> Vec<Value> {
    doc.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Reads the personal-info fields, treating absent or non-string values as "".
fn personal_info_section(doc: &ProfileDocument) -> PersonalInfo {
    let field = |key: &str| {
        doc.get(key)
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string()
    };
    PersonalInfo {
        name: field("name"),
        title: field("title"),
        location: field("location"),
        email: field("email"),
        bio: field("bio"),
        about: field("about"),
        profile_image: field("profileImage"),
        personal_photo: field("personalPhoto"),
        cv_link: field("cvLink"),
    }
}

/// Sets one key on the entry at `index`, leaving its other keys alone.
/// An entry that is not a JSON object is replaced by one holding just `key`.
fn set_entry_field(
    items: &mut [Value],
    section: Section,
    index: usize,
    key: &str,
    value: String,
) -> Result<()> {
    let len = items.len();
    let entry = items.get_mut(index).ok_or_else(|| {
        FolioError::validation(
            section.keys()[0],
            format!("No entry at position {} (have {})", index, len),
        )
    })?;
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(fields) = entry {
        fields.insert(key.to_string(), Value::String(value));
    }
    Ok(())
}

fn remove_at(items: &mut Vec<Value>, section: Section, index: usize) -> Result<Value> {
    if index >= items.len() {
        return Err(FolioError::validation(
            section.keys()[0],
            format!("No entry at position {} (have {})", index, items.len()),
        ));
    }
    Ok(items.remove(index))
}

pub struct EditSession {
    service: ContentService,
    document: ProfileDocument,
    research_interests: Vec<Value>,
    publications: Vec<Value>,
    education: Vec<Value>,
}

impl EditSession {
    /// Loads the current document and prepares working copies of its lists.
    pub async fn open(service: ContentService) -> Result<Self> {
        let document = service.get_website_data().await?;
        Ok(Self::from_document(service, document))
    }

    pub fn from_document(service: ContentService, document: ProfileDocument) -> Self {
        Self {
            research_interests: list_section(&document, "researchInterests"),
            publications: list_section(&document, "publications"),
            education: list_section(&document, "education"),
            service,
            document,
        }
    }

    /// The document the next save will be merged onto.
    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }

    /// Initial values for the personal-info form.
    pub fn personal_info(&self) -> PersonalInfo {
        personal_info_section(&self.document)
    }

    pub fn research_interests(&self) -> &[Value] {
        &self.research_interests
    }

    pub fn publications(&self) -> &[Value] {
        &self.publications
    }

    pub fn education(&self) -> &[Value] {
        &self.education
    }

    // ============================================================================
    // Positional list editing (in memory until the section is saved)
    // ============================================================================

    pub fn add_research_interest(&mut self) {
        self.research_interests.push(json!({"title": "", "description": ""}));
    }

    pub fn update_research_interest(
        &mut self,
        index: usize,
        field: ResearchInterestField,
        value: impl Into<String>,
    ) -> Result<()> {
        set_entry_field(
            &mut self.research_interests,
            Section::ResearchInterests,
            index,
            field.key(),
            value.into(),
        )
    }

    pub fn remove_research_interest(&mut self, index: usize) -> Result<Value> {
        remove_at(&mut self.research_interests, Section::ResearchInterests, index)
    }

    pub fn add_publication(&mut self) {
        self.publications.push(json!({
            "title": "",
            "authors": "",
            "journal": "",
            "year": "",
            "link": ""
        }));
    }

    pub fn update_publication(
        &mut self,
        index: usize,
        field: PublicationField,
        value: impl Into<String>,
    ) -> Result<()> {
        set_entry_field(
            &mut self.publications,
            Section::Publications,
            index,
            field.key(),
            value.into(),
        )
    }

    pub fn remove_publication(&mut self, index: usize) -> Result<Value> {
        remove_at(&mut self.publications, Section::Publications, index)
    }

    pub fn add_education(&mut self) {
        self.education.push(json!({
            "degree": "",
            "institution": "",
            "year": "",
            "description": ""
        }));
    }

    pub fn update_education(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<()> {
        set_entry_field(
            &mut self.education,
            Section::Education,
            index,
            field.key(),
            value.into(),
        )
    }

    pub fn remove_education(&mut self, index: usize) -> Result<Value> {
        remove_at(&mut self.education, Section::Education, index)
    }

    // ============================================================================
    // Section saves
    // ============================================================================

    /// Checks a list section's working copy against the entry rules.
    ///
    /// List saves do not call this themselves; personal info is always
    /// checked on save.
    pub fn validate_section(&self, section: Section) -> Result<()> {
        match section {
            Section::PersonalInfo => self.personal_info().validate(),
            Section::ResearchInterests => {
                validate_list::<ResearchInterest>("researchInterests", &self.research_interests)
            }
            Section::Publications => {
                validate_list::<Publication>("publications", &self.publications)
            }
            Section::Education => validate_list::<Education>("education", &self.education),
        }
    }

    /// Saves the personal-info form together with all three working lists.
    pub async fn save_personal_info(&mut self, info: PersonalInfo) -> Result<UpdateOutcome> {
        info.validate()?;

        let candidate = self
            .document
            .merged_with(&SectionUpdate::PersonalInfo(info))?
            .merged_with(&SectionUpdate::ResearchInterests(
                self.research_interests.clone(),
            ))?
            .merged_with(&SectionUpdate::Publications(self.publications.clone()))?
            .merged_with(&SectionUpdate::Education(self.education.clone()))?;

        self.commit(Section::PersonalInfo, candidate).await
    }

    pub async fn save_research_interests(&mut self) -> Result<UpdateOutcome> {
        let update = SectionUpdate::ResearchInterests(self.research_interests.clone());
        self.save_section(update).await
    }

    pub async fn save_publications(&mut self) -> Result<UpdateOutcome> {
        let update = SectionUpdate::Publications(self.publications.clone());
        self.save_section(update).await
    }

    pub async fn save_education(&mut self) -> Result<UpdateOutcome> {
        let update = SectionUpdate::Education(self.education.clone());
        self.save_section(update).await
    }

    async fn save_section(&mut self, update: SectionUpdate) -> Result<UpdateOutcome> {
        let candidate = self.document.merged_with(&update)?;
        self.commit(update.section(), candidate).await
    }

    /// Sends the full candidate document; on success it becomes the base for
    /// later saves in this session.
    async fn commit(
        &mut self,
        section: Section,
        candidate: ProfileDocument,
    ) -> Result<UpdateOutcome> {
        let outcome = self
            .service
            .update_website_data(candidate.clone())
            .await
            .inspect_err(|e| tracing::warn!("Saving {} failed: {}", section, e))?;
        self.document = candidate;
        tracing::info!("{} saved", section);
        Ok(outcome)
    }
}
