//! The document store: canonical in-memory document, versioned commits,
//! atomic persistence.
//!
//! One `DocumentStore` owns the single live [`PortfolioDocument`]. Readers
//! take a cheap `Arc` clone via [`DocumentStore::current`] and never block
//! on a commit in flight. Commits are serialized by an internal mutex and
//! follow a strict order: conflict check → apply mutation to a clone →
//! validate the merged document → persist atomically → swap the live `Arc`.
//! Any failure along the way leaves both memory and disk exactly as they
//! were, and the caller gets a typed error.
//!
//! The persisted file is not protected against concurrent *external*
//! processes; single-process ownership is a documented precondition, as is
//! the caller authenticating the operator before invoking [`commit`].
//!
//! Structured log fields emitted here follow the schema in
//! [`folio_core::logging`].
//!
//! [`commit`]: DocumentStore::commit

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use folio_core::{validate_document, DocumentMutation, Error, PortfolioDocument, Result};

use crate::backend::{FilesystemBackend, PersistenceBackend};
use crate::config::StoreConfig;
use crate::snapshot;

/// A document together with the version tag it was read at.
///
/// Callers keep `version` and pass it back as `base_version` when they
/// commit the edit they built against this read.
#[derive(Debug, Clone)]
pub struct Versioned {
    pub version: u64,
    pub document: Arc<PortfolioDocument>,
}

/// Owner of the canonical portfolio document.
pub struct DocumentStore {
    backend: Arc<dyn PersistenceBackend>,
    path: PathBuf,
    /// The live document. Swapped whole after a durable write; never
    /// mutated in place, so readers cannot observe a partial commit.
    live: RwLock<Arc<PortfolioDocument>>,
    /// Serializes the validate → persist → swap sequence.
    commit_lock: Mutex<()>,
}

impl DocumentStore {
    /// Open the store at the configured path with the filesystem backend.
    pub async fn open(config: &StoreConfig) -> Self {
        Self::load(Arc::new(FilesystemBackend::new()), config.data_path.clone()).await
    }

    /// Load the persisted document, falling back to the default skeleton.
    ///
    /// Missing storage is the normal first run; unreadable or invalid bytes
    /// are logged and recovered the same way. A bad persisted file must
    /// never prevent the service from starting.
    pub async fn load(backend: Arc<dyn PersistenceBackend>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = match backend.read(&path).await {
            Ok(Some(bytes)) => match snapshot::decode_document(&bytes) {
                Ok(doc) => {
                    info!(
                        subsystem = "store",
                        op = "load",
                        data_path = %path.display(),
                        doc_version = doc.version,
                        "loaded persisted document"
                    );
                    doc
                }
                Err(e) => {
                    warn!(
                        subsystem = "store",
                        op = "load",
                        data_path = %path.display(),
                        error = %e,
                        "persisted document is malformed, starting from skeleton"
                    );
                    PortfolioDocument::skeleton()
                }
            },
            Ok(None) => {
                info!(
                    subsystem = "store",
                    op = "load",
                    data_path = %path.display(),
                    "no persisted document, starting from skeleton"
                );
                PortfolioDocument::skeleton()
            }
            Err(e) => {
                warn!(
                    subsystem = "store",
                    op = "load",
                    data_path = %path.display(),
                    error = %e,
                    "persisted document is unreadable, starting from skeleton"
                );
                PortfolioDocument::skeleton()
            }
        };

        Self {
            backend,
            path,
            live: RwLock::new(Arc::new(document)),
            commit_lock: Mutex::new(()),
        }
    }

    /// The latest committed document and its version. No I/O, never blocks
    /// on a commit in flight.
    pub fn current(&self) -> Versioned {
        // Held only for the Arc clone; poisoning is unreachable because no
        // holder panics while the lock is taken.
        let doc = self
            .live
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        Versioned {
            version: doc.version,
            document: doc,
        }
    }

    /// Apply one mutation against `base_version` and persist the result.
    ///
    /// Returns the new version on success. On [`Error::Conflict`] the
    /// caller re-reads [`current`](Self::current), rebuilds its delta
    /// against the fresh document, and retries; nothing is auto-merged.
    /// Validation, not-found, and persistence failures likewise leave the
    /// store unchanged.
    pub async fn commit(&self, mutation: DocumentMutation, base_version: u64) -> Result<u64> {
        let _guard = self.commit_lock.lock().await;

        let current = self.current();
        if base_version != current.version {
            warn!(
                subsystem = "store",
                op = "commit",
                mutation_kind = mutation.kind(),
                base_version,
                doc_version = current.version,
                "stale base version, rejecting commit"
            );
            return Err(Error::Conflict {
                base: base_version,
                current: current.version,
            });
        }

        let kind = mutation.kind();
        let mut candidate = (*current.document).clone();
        mutation.apply(&mut candidate)?;
        candidate.version = current.version + 1;
        candidate.updated_at_utc = Utc::now();

        let report = validate_document(&candidate);
        if !report.is_valid() {
            return Err(Error::Validation(report));
        }
        if !report.warnings.is_empty() {
            warn!(
                subsystem = "store",
                op = "commit",
                mutation_kind = kind,
                warning_count = report.warnings.len(),
                warnings = %report
                    .warnings
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
                "document has data-quality warnings"
            );
        }

        let bytes = snapshot::encode_document(&candidate)?;
        self.backend.write_atomic(&self.path, &bytes).await?;

        // The write is durable; only now does the commit become visible.
        let new_version = candidate.version;
        *self
            .live
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(candidate);

        info!(
            subsystem = "store",
            op = "commit",
            mutation_kind = kind,
            doc_version = new_version,
            "committed"
        );
        Ok(new_version)
    }

    /// Pretty-printed export of the latest committed document, suitable for
    /// download and later re-upload. Pure serialization, no side effects.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        snapshot::encode_document(&self.current().document)
    }

    /// Path of the persisted document file.
    pub fn data_path(&self) -> &Path {
        &self.path
    }
}
