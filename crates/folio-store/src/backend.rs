//! Persistence backend abstraction for the document store.
//!
//! The store reads and writes whole-document byte blobs through
//! [`PersistenceBackend`], which keeps the commit path testable (a failing
//! backend simulates a mid-persist crash) and leaves room for non-filesystem
//! storage later.
//!
//! [`FilesystemBackend`] is the production implementation: atomic replace
//! via write-to-temp-then-rename, so a process killed mid-write can never
//! leave a truncated document behind.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use folio_core::Result;

/// Storage backend trait for whole-document persistence.
#[async_trait]
pub trait PersistenceBackend: Send + Sync {
    /// Read the persisted document bytes. `None` when nothing has been
    /// persisted yet (a fresh deployment).
    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Durably replace the persisted document with `data`, atomically:
    /// after this returns Ok the file contains exactly `data`; on any error
    /// the previous contents are still intact.
    async fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()>;
}

/// Filesystem storage backend.
///
/// Writes go to a uniquely-named sibling temp file which is fsynced and then
/// renamed over the target. Rename within one directory is atomic on POSIX
/// filesystems.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemBackend;

impl FilesystemBackend {
    pub fn new() -> Self {
        Self
    }

    /// Validate that the backend can write, read, and remove files next to
    /// the document path. Run at startup to catch permission errors and
    /// overlayfs quirks early, before the first commit fails.
    pub async fn validate(&self, path: &Path) -> std::result::Result<(), String> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .await
            .map_err(|e| format!("create_dir_all({:?}): {}", dir, e))?;

        let probe = dir.join(".folio-health-check");
        let data = b"storage-health-check";
        fs::write(&probe, data)
            .await
            .map_err(|e| format!("write({:?}): {}", probe, e))?;
        let read_back = fs::read(&probe)
            .await
            .map_err(|e| format!("read({:?}): {}", probe, e))?;
        if read_back != data {
            return Err("read-back mismatch".to_string());
        }
        fs::remove_file(&probe)
            .await
            .map_err(|e| format!("remove_file({:?}): {}", probe, e))?;
        Ok(())
    }
}

#[async_trait]
impl PersistenceBackend for FilesystemBackend {
    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(bytes) => {
                debug!(data_path = %path.display(), size = bytes.len(), "backend: read");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Unique temp name: concurrent writers (other processes) cannot
        // step on each other's temp file, only race the final rename.
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let tmp_path = path.with_file_name(format!(".{file_name}.tmp-{}", Uuid::new_v4()));

        let result = async {
            let mut file = fs::File::create(&tmp_path).await?;
            file.write_all(data).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&tmp_path, path).await
        }
        .await;

        if result.is_err() {
            // Leave the target untouched, clean up the orphaned temp file.
            let _ = fs::remove_file(&tmp_path).await;
        }
        debug!(data_path = %path.display(), size = data.len(), ok = result.is_ok(), "backend: write_atomic");
        result.map_err(Into::into)
    }
}
