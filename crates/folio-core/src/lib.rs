//! # folio-core
//!
//! Core types, validation, and error taxonomy for the folio portfolio
//! document store.
//!
//! This crate provides the foundational data structures the store crate
//! depends on: the `PortfolioDocument` aggregate, the mutation vocabulary,
//! and a pure schema validator.

pub mod defaults;
pub mod error;
pub mod ids;
pub mod logging;
pub mod models;
pub mod mutation;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use ids::new_record_id;
pub use models::{ContactEntry, ExperienceEntry, PortfolioDocument, Profile, Project};
pub use mutation::DocumentMutation;
pub use validate::{validate_document, FieldError, ValidationReport};
