//! Custom-type registry for parse dispatch.
//!
//! Serialized textures carry a `custom_type` tag; the registry maps tags
//! to parse functions so scene loaders can reconstruct variants without
//! knowing their concrete types.

use std::collections::HashMap;

use proctex_spec::{DocumentError, TextureDocument};

use crate::brick::{BrickProceduralTexture, BRICK_CUSTOM_TYPE};
use crate::error::TextureError;
use crate::fragment::FragmentProgram;
use crate::texture::ProceduralTexture;

/// Object-safe surface of a procedural texture variant.
pub trait ProceduralTextureKind: std::fmt::Debug {
    /// The variant's document tag.
    fn custom_type(&self) -> &'static str;

    /// The underlying procedural texture state.
    fn texture(&self) -> &ProceduralTexture;

    /// Re-upload all variant parameters to the uniform store.
    fn update_shader_uniforms(&mut self);

    /// The fragment program this variant renders with.
    fn fragment_program(&self) -> Box<dyn FragmentProgram>;

    /// Serialize into a tagged document.
    fn serialize(&self) -> Result<TextureDocument, TextureError>;
}

type ParseFn = fn(&TextureDocument) -> Result<Box<dyn ProceduralTextureKind>, TextureError>;

/// Maps `custom_type` tags to variant parse functions.
pub struct TextureRegistry {
    parsers: HashMap<&'static str, ParseFn>,
}

impl TextureRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register a parse function under a tag, replacing any previous one.
    pub fn register(&mut self, custom_type: &'static str, parse: ParseFn) {
        self.parsers.insert(custom_type, parse);
    }

    /// Whether a tag is registered.
    pub fn contains(&self, custom_type: &str) -> bool {
        self.parsers.contains_key(custom_type)
    }

    /// Parse a document by dispatching on its tag.
    pub fn parse(
        &self,
        doc: &TextureDocument,
    ) -> Result<Box<dyn ProceduralTextureKind>, TextureError> {
        let parse = self
            .parsers
            .get(doc.custom_type.as_str())
            .ok_or_else(|| DocumentError::UnknownCustomType(doc.custom_type.clone()))?;
        parse(doc)
    }
}

impl Default for TextureRegistry {
    /// Registry with all built-in variants registered.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(BRICK_CUSTOM_TYPE, |doc| {
            Ok(Box::new(BrickProceduralTexture::parse(doc)?))
        });
        registry
    }
}
