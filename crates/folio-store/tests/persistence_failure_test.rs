//! Atomicity under persistence failure: a write that does not land durably
//! must never be reported as success or become visible to readers.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::{DocumentMutation, Error, Result};
use folio_store::{DocumentStore, FilesystemBackend, PersistenceBackend};

/// Wraps the real filesystem backend and fails writes on demand,
/// simulating a disk-full or killed-mid-write condition.
struct FlakyBackend {
    inner: FilesystemBackend,
    fail_writes: AtomicBool,
}

impl FlakyBackend {
    fn new() -> Self {
        Self {
            inner: FilesystemBackend::new(),
            fail_writes: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl PersistenceBackend for FlakyBackend {
    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        self.inner.read(path).await
    }

    async fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into());
        }
        self.inner.write_atomic(path, data).await
    }
}

#[tokio::test]
async fn test_failed_persist_leaves_memory_and_disk_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    let backend = Arc::new(FlakyBackend::new());
    let store = DocumentStore::load(backend.clone(), &path).await;

    // One good commit so there is real on-disk state to protect.
    let mut profile = store.current().document.profile.clone();
    profile.name = "Asha Rao".to_string();
    store
        .commit(DocumentMutation::UpdateProfile { profile }, 0)
        .await
        .unwrap();
    let committed = store.current();
    let disk_before = std::fs::read(&path).unwrap();

    // Now the disk "fills up".
    backend.fail_writes.store(true, Ordering::SeqCst);
    let err = store
        .commit(
            DocumentMutation::SetSkill {
                name: "Rust".to_string(),
                level: 90,
            },
            1,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Persistence(_)));

    // In-memory document and version: untouched.
    let after = store.current();
    assert_eq!(after.version, committed.version);
    assert_eq!(*after.document, *committed.document);

    // On-disk bytes: untouched.
    assert_eq!(std::fs::read(&path).unwrap(), disk_before);
}

#[tokio::test]
async fn test_store_recovers_once_writes_succeed_again() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    let backend = Arc::new(FlakyBackend::new());
    let store = DocumentStore::load(backend.clone(), &path).await;

    backend.fail_writes.store(true, Ordering::SeqCst);
    let mutation = DocumentMutation::SetMetric {
        key: "dashboards".to_string(),
        value: "8+".to_string(),
    };
    assert!(store.commit(mutation.clone(), 0).await.is_err());

    // Same base version is still valid: the failed commit consumed nothing.
    backend.fail_writes.store(false, Ordering::SeqCst);
    let version = store.commit(mutation, 0).await.unwrap();
    assert_eq!(version, 1);
    assert_eq!(store.current().document.metrics["dashboards"], "8+");

    // And it reloads after a restart.
    let reloaded = DocumentStore::load(backend, &path).await;
    assert_eq!(reloaded.current().version, 1);
}

#[tokio::test]
async fn test_interrupted_temp_write_never_corrupts_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    let backend = FilesystemBackend::new();

    backend.write_atomic(&path, b"{\"good\": true}").await.unwrap();

    // An orphaned temp file from a crashed writer must not affect reads.
    std::fs::write(dir.path().join(".portfolio.json.tmp-dead"), b"{\"par").unwrap();
    let got = backend.read(&path).await.unwrap().unwrap();
    assert_eq!(got, b"{\"good\": true}");
}
