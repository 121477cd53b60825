//! Seed defaults.
//!
//! Written to storage the first time the document is read and no backing
//! file exists, and returned in memory whenever the stored document cannot be
//! read or parsed.

use super::document::ProfileDocument;
use super::model::{Education, Profile, Publication, ResearchInterest};

fn interest(title: &str, description: &str) -> ResearchInterest {
    ResearchInterest {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn publication(title: &str, authors: &str, journal: &str, year: &str) -> Publication {
    Publication {
        title: title.to_string(),
        authors: authors.to_string(),
        journal: journal.to_string(),
        year: year.to_string(),
        link: Some(String::new()),
    }
}

fn degree(degree: &str, institution: &str, year: &str, description: &str) -> Education {
    Education {
        degree: degree.to_string(),
        institution: institution.to_string(),
        year: year.to_string(),
        description: Some(description.to_string()),
    }
}

impl Profile {
    /// The seed profile.
    pub fn seed() -> Self {
        Self {
            name: "Dr. Jane Smith".to_string(),
            title: "Associate Professor of Biology".to_string(),
            location: "University of Science, New York".to_string(),
            email: "jane.smith@university.edu".to_string(),
            bio: "Dedicated researcher with over 10 years of experience in molecular biology and genetics. My work focuses on understanding genetic mechanisms in disease progression.".to_string(),
            about: "I am a passionate scientist with a focus on molecular biology and genetics. My research aims to uncover the fundamental mechanisms of genetic diseases and develop novel therapeutic approaches. I lead a diverse team of researchers and collaborate with institutions worldwide.".to_string(),
            profile_image: Some(String::new()),
            personal_photo: Some(String::new()),
            cv_link: Some(String::new()),
            research_interests: vec![
                interest(
                    "Molecular Biology",
                    "Studying the molecular basis of genetic diseases and developing targeted therapies.",
                ),
                interest(
                    "Genomics",
                    "Using advanced sequencing technologies to understand genetic variations and their impact on health.",
                ),
                interest(
                    "Bioinformatics",
                    "Developing computational tools to analyze large-scale biological data and identify patterns.",
                ),
            ],
            publications: vec![
                publication(
                    "Novel Approaches to Gene Therapy in Rare Genetic Disorders",
                    "Smith, J., Johnson, A., Williams, B.",
                    "Nature Biotechnology",
                    "2023",
                ),
                publication(
                    "Genomic Analysis of Mutation Patterns in Cancer Progression",
                    "Smith, J., Chen, L., Davis, R.",
                    "Cancer Research",
                    "2022",
                ),
                publication(
                    "Computational Methods for Predicting Protein Interactions",
                    "Williams, B., Smith, J., Taylor, M.",
                    "Bioinformatics",
                    "2021",
                ),
            ],
            education: vec![
                degree(
                    "Ph.D. in Molecular Biology",
                    "Harvard University",
                    "2015",
                    "Thesis: Genetic Mechanisms of Disease Progression",
                ),
                degree(
                    "M.S. in Genetics",
                    "Stanford University",
                    "2011",
                    "Focus on Human Genetics and Genomics",
                ),
                degree(
                    "B.S. in Biology",
                    "MIT",
                    "2009",
                    "Graduated with honors, minor in Computer Science",
                ),
            ],
        }
    }
}

/// The seed document in its persisted (untyped) form.
pub fn default_document() -> ProfileDocument {
    ProfileDocument::from_profile(&Profile::seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let seed = Profile::seed();
        assert_eq!(seed.name, "Dr. Jane Smith");
        assert_eq!(seed.research_interests.len(), 3);
        assert_eq!(seed.publications.len(), 3);
        assert_eq!(seed.education.len(), 3);
        assert_eq!(seed.profile_image.as_deref(), Some(""));
        assert_eq!(seed.personal_photo.as_deref(), Some(""));
        assert_eq!(seed.cv_link.as_deref(), Some(""));
        assert!(
            seed.publications
                .iter()
                .all(|p| p.link.as_deref() == Some(""))
        );
    }

    #[test]
    fn test_default_document_key_order() {
        let doc = default_document();
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "title",
                "location",
                "email",
                "bio",
                "about",
                "profileImage",
                "personalPhoto",
                "cvLink",
                "researchInterests",
                "publications",
                "education",
            ]
        );
    }
}
