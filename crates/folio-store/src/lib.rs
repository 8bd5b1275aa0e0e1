//! # folio-store
//!
//! JSON-backed document store for the folio portfolio site.
//!
//! This crate provides:
//! - [`DocumentStore`]: the single canonical document, optimistic-concurrency
//!   commits, and atomic file persistence
//! - [`PersistenceBackend`] / [`FilesystemBackend`]: the storage seam
//! - [`snapshot`]: the stable export encoding (also the on-disk format)
//! - [`StoreConfig`]: environment configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_core::DocumentMutation;
//! use folio_store::{DocumentStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DocumentStore::open(&StoreConfig::from_env()).await;
//!
//!     let read = store.current();
//!     let mut profile = read.document.profile.clone();
//!     profile.name = "Asha Rao".to_string();
//!
//!     let new_version = store
//!         .commit(DocumentMutation::UpdateProfile { profile }, read.version)
//!         .await?;
//!     println!("committed version {new_version}");
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod snapshot;
pub mod store;

pub use backend::{FilesystemBackend, PersistenceBackend};
pub use config::StoreConfig;
pub use snapshot::{decode_document, encode_document};
pub use store::{DocumentStore, Versioned};
