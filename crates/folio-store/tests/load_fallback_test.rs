//! Startup behavior: skeleton fallback on missing or bad persisted state.

use std::sync::Arc;

use folio_core::defaults::{SKELETON_PROFILE_NAME, SKELETON_PROFILE_ROLE};
use folio_core::DocumentMutation;
use folio_store::{DocumentStore, FilesystemBackend};

#[tokio::test]
async fn test_missing_file_yields_skeleton() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::load(
        Arc::new(FilesystemBackend::new()),
        dir.path().join("does-not-exist.json"),
    )
    .await;

    let read = store.current();
    assert_eq!(read.version, 0);
    assert_eq!(read.document.profile.name, SKELETON_PROFILE_NAME);
    assert_eq!(read.document.profile.role, SKELETON_PROFILE_ROLE);
    assert!(read.document.experience.is_empty());
    assert!(read.document.projects.is_empty());
}

#[tokio::test]
async fn test_garbage_bytes_yield_skeleton() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, b"\x00\xffnot even close to json").unwrap();

    let store = DocumentStore::load(Arc::new(FilesystemBackend::new()), &path).await;
    assert_eq!(store.current().version, 0);
    assert_eq!(store.current().document.profile.name, SKELETON_PROFILE_NAME);
}

#[tokio::test]
async fn test_truncated_json_yields_skeleton() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, br#"{"profile": {"name": "Asha"#).unwrap();

    let store = DocumentStore::load(Arc::new(FilesystemBackend::new()), &path).await;
    assert_eq!(store.current().version, 0);
}

#[tokio::test]
async fn test_semantically_invalid_document_yields_skeleton() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(
        &path,
        br#"{"profile": {"name": "Asha", "role": "Engineer"}, "skills": {"X": 150}}"#,
    )
    .unwrap();

    let store = DocumentStore::load(Arc::new(FilesystemBackend::new()), &path).await;
    assert_eq!(store.current().document.profile.name, SKELETON_PROFILE_NAME);
}

#[tokio::test]
async fn test_commit_then_reload_restores_document_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    let backend = Arc::new(FilesystemBackend::new());

    let store = DocumentStore::load(backend.clone(), &path).await;
    let mut profile = store.current().document.profile.clone();
    profile.name = "Asha Rao".to_string();
    store
        .commit(DocumentMutation::UpdateProfile { profile }, 0)
        .await
        .unwrap();
    store
        .commit(
            DocumentMutation::SetSkill {
                name: "Rust".to_string(),
                level: 90,
            },
            1,
        )
        .await
        .unwrap();

    // Simulated restart.
    let reloaded = DocumentStore::load(backend, &path).await;
    let read = reloaded.current();
    assert_eq!(read.version, 2);
    assert_eq!(read.document.profile.name, "Asha Rao");
    assert_eq!(read.document.skills["Rust"], 90);
}
