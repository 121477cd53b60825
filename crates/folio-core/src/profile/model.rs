//! Typed view of the profile document.
//!
//! Every field defaults when absent so that a hand-edited or partially
//! written document still yields a usable view. List order is display order.

use serde::{Deserialize, Serialize};

/// Number of publications shown in the "recent" block of the public page.
pub const RECENT_PUBLICATIONS: usize = 3;

/// A research area shown on the public page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResearchInterest {
    pub title: String,
    pub description: String,
}

/// A publication entry. `year` is free text, as entered in the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A degree in the education timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The whole editable site content.
///
/// Field order here is the key order of the persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub bio: String,
    pub about: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_link: Option<String>,
    pub research_interests: Vec<ResearchInterest>,
    pub publications: Vec<Publication>,
    pub education: Vec<Education>,
}

impl Profile {
    /// Publications for the "recent" block: the first few in display order.
    pub fn recent_publications(&self) -> &[Publication] {
        let end = self.publications.len().min(RECENT_PUBLICATIONS);
        &self.publications[..end]
    }
}
