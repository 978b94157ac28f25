//! proctex Texture Document Library
//!
//! This crate provides the persistence format shared by all procedural
//! texture variants. A texture document is a flat JSON object carrying a
//! `custom_type` tag, the base texture fields (name, size, mipmap flag,
//! refresh rate, optional fallback texture), and whatever variant-specific
//! parameters the tagged type defines.
//!
//! # Example
//!
//! ```
//! use proctex_spec::{TextureDocument, canonical_document_hash};
//!
//! let doc = TextureDocument::new("texture.brick_v1", "wall", 256)
//!     .with_generate_mip_maps(true)
//!     .with_param("number_of_bricks_height", 15.0);
//!
//! assert!(doc.validate().is_ok());
//!
//! let json = doc.to_json_pretty().unwrap();
//! let parsed = TextureDocument::from_json(&json).unwrap();
//! assert_eq!(doc, parsed);
//!
//! let hash = canonical_document_hash(&doc).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`document`]: The tagged texture document type
//! - [`error`]: Error types for document parsing and validation
//! - [`hash`]: Canonical BLAKE3 hashing of documents

pub mod document;
pub mod error;
pub mod hash;

pub use document::TextureDocument;
pub use error::DocumentError;
pub use hash::{canonical_document_hash, canonical_value_hash};
