//! Canonical hashing of texture documents.
//!
//! Document hashes identify persisted content independent of field order
//! or whitespace:
//!
//! ```text
//! document_hash = hex(BLAKE3(canonical_json(document)))
//! ```
//!
//! Canonical form relies on `serde_json::Value` storing object keys in a
//! sorted map (the `preserve_order` feature is not enabled anywhere in
//! this workspace), so serializing through a `Value` yields sorted keys
//! and no whitespace.

use crate::document::TextureDocument;
use crate::error::DocumentError;

/// Computes the canonical BLAKE3 hash of a document.
///
/// Returns a 64-character lowercase hexadecimal string, stable across
/// calls and across documents that differ only in field order.
pub fn canonical_document_hash(doc: &TextureDocument) -> Result<String, DocumentError> {
    canonical_value_hash(&doc.to_value()?)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, DocumentError> {
    let canonical = serde_json::to_string(value)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}
