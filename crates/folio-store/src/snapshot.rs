//! Snapshot encoding: the downloadable export and the on-disk format.
//!
//! One encoding serves both purposes, so the operator's downloaded snapshot
//! is byte-identical to what the store persists and can be re-uploaded (or
//! committed to version control) and loaded back without loss. `version` is
//! part of the encoding and round-trips exactly.

use folio_core::{validate_document, Error, PortfolioDocument, Result};

/// Serialize a document to stable, pretty-printed UTF-8 JSON with a
/// trailing newline. Map-valued fields are ordered, so the same document
/// always produces the same bytes (snapshots diff cleanly in git).
pub fn encode_document(doc: &PortfolioDocument) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(doc)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode and validate persisted or re-uploaded bytes.
///
/// Shape problems surface as [`Error::Serialization`], semantic problems as
/// [`Error::Validation`] with the full field-level report.
pub fn decode_document(bytes: &[u8]) -> Result<PortfolioDocument> {
    let doc: PortfolioDocument = serde_json::from_slice(bytes)?;
    let report = validate_document(&doc);
    if !report.is_valid() {
        return Err(Error::Validation(report));
    }
    Ok(doc)
}
