use std::sync::Arc;

use folio_application::editor::{EducationField, PublicationField};
use folio_application::{ContentService, EditSession};
use folio_core::{ProfileDocument, ProfileStore};
use folio_infrastructure::{FolioPaths, InMemoryProfileStore, JsonFileProfileStore};
use serde_json::json;
use tempfile::TempDir;

fn file_service(temp_dir: &TempDir) -> ContentService {
    let store = JsonFileProfileStore::new(&FolioPaths::new(temp_dir.path()));
    ContentService::new(Arc::new(store))
}

#[tokio::test]
async fn test_list_save_changes_only_that_list() {
    let temp_dir = TempDir::new().unwrap();
    let service = file_service(&temp_dir);
    let d0 = service.get_website_data().await.unwrap().to_profile().unwrap();

    let mut session = EditSession::open(service.clone()).await.unwrap();
    session
        .update_education(0, EducationField::Institution, "Oxford University")
        .unwrap();
    session.remove_education(2).unwrap();
    session.save_education().await.unwrap();

    let reloaded = service.get_website_data().await.unwrap().to_profile().unwrap();
    let mut expected = d0.clone();
    expected.education[0].institution = "Oxford University".to_string();
    expected.education.remove(2);
    assert_eq!(reloaded, expected);
}

#[tokio::test]
async fn test_appended_publication_lands_last() {
    let temp_dir = TempDir::new().unwrap();
    let service = file_service(&temp_dir);
    let mut session = EditSession::open(service.clone()).await.unwrap();

    session.add_publication();
    session
        .update_publication(3, PublicationField::Title, "Field Notes on Tardigrades")
        .unwrap();
    session.save_publications().await.unwrap();

    let profile = service.get_website_data().await.unwrap().to_profile().unwrap();
    assert_eq!(profile.publications.len(), 4);
    assert_eq!(profile.publications[3].title, "Field Notes on Tardigrades");
    // The "recent" view still shows the first three.
    assert!(
        profile
            .recent_publications()
            .iter()
            .all(|p| p.title != "Field Notes on Tardigrades")
    );
}

#[tokio::test]
async fn test_remove_middle_entry_preserves_relative_order() {
    let temp_dir = TempDir::new().unwrap();
    let service = file_service(&temp_dir);
    let mut session = EditSession::open(service.clone()).await.unwrap();
    let before: Vec<_> = session
        .research_interests()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect();

    session.remove_research_interest(1).unwrap();
    session.save_research_interests().await.unwrap();

    let profile = service.get_website_data().await.unwrap().to_profile().unwrap();
    let after: Vec<_> = profile
        .research_interests
        .iter()
        .map(|r| r.title.clone())
        .collect();
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
}

#[tokio::test]
async fn test_write_failure_surfaces_and_keeps_stored_document() {
    let store = Arc::new(InMemoryProfileStore::new());
    let service = ContentService::new(store.clone());
    let mut session = EditSession::open(service.clone()).await.unwrap();
    let before = store.load().await.unwrap();

    store.set_fail_writes(true);
    session.remove_publication(0).unwrap();
    let err = session.save_publications().await.unwrap_err();

    assert!(err.is_update_failed());
    assert_eq!(service.get_website_data().await.unwrap(), before);
}

#[tokio::test]
async fn test_stale_session_overwrites_newer_save() {
    // Positional, last-writer-wins behaviour: nothing detects the conflict.
    let temp_dir = TempDir::new().unwrap();
    let service = file_service(&temp_dir);
    let mut first = EditSession::open(service.clone()).await.unwrap();
    let mut second = EditSession::open(service.clone()).await.unwrap();

    first.remove_publication(0).unwrap();
    first.save_publications().await.unwrap();

    second
        .update_publication(0, PublicationField::Year, "2024")
        .unwrap();
    second.save_publications().await.unwrap();

    let profile = service.get_website_data().await.unwrap().to_profile().unwrap();
    assert_eq!(profile.publications.len(), 3);
    assert_eq!(profile.publications[0].year, "2024");
}

#[tokio::test]
async fn test_entries_outside_the_form_schema_survive_saves() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileProfileStore::new(&FolioPaths::new(temp_dir.path()));
    let doc = ProfileDocument::new(json!({
        "name": "Dr. Jane Smith",
        "researchInterests": [
            {"title": "Genomics", "description": "Reading whole genomes.", "icon": "dna"}
        ],
        "publications": [
            {
                "title": "Gene Networks",
                "authors": "Smith, J.",
                "journal": "Nature",
                "year": 2023
            }
        ],
        "education": [
            {"degree": "Ph.D.", "institution": "MIT", "year": "2015", "honors": ["summa"]}
        ]
    }));
    assert!(store.save(&doc).await.unwrap());
    let service = ContentService::new(Arc::new(store));

    let mut session = EditSession::open(service.clone()).await.unwrap();
    session
        .update_education(0, EducationField::Institution, "Oxford University")
        .unwrap();
    session.save_education().await.unwrap();
    session.save_publications().await.unwrap();

    let stored = service.get_website_data().await.unwrap();
    assert_eq!(stored.get("researchInterests"), doc.get("researchInterests"));
    assert_eq!(stored.get("publications"), doc.get("publications"));
    assert_eq!(
        stored.get("education"),
        Some(&json!([{
            "degree": "Ph.D.",
            "institution": "Oxford University",
            "year": "2015",
            "honors": ["summa"]
        }]))
    );
}
