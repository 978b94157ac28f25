//! Base procedural texture type.

use proctex_spec::TextureDocument;

use crate::uniforms::UniformStore;

/// Common state shared by every procedural texture variant.
///
/// A procedural texture is square, named, tied to one fragment program,
/// and owns the uniform slots that program reads. Variants hold one of
/// these and push their parameters into `uniforms`.
#[derive(Debug, Clone)]
pub struct ProceduralTexture {
    name: String,
    size: u32,
    fragment_key: String,
    generate_mip_maps: bool,
    refresh_rate: u32,
    fallback_texture: Option<String>,
    /// Uniform slots read by the fragment program.
    pub uniforms: UniformStore,
}

impl ProceduralTexture {
    /// Create a new procedural texture bound to a fragment program.
    pub fn new(name: impl Into<String>, size: u32, fragment_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            fragment_key: fragment_key.into(),
            generate_mip_maps: false,
            refresh_rate: 0,
            fallback_texture: None,
            uniforms: UniformStore::new(),
        }
    }

    /// Enable or disable the mipmap chain.
    pub fn with_generate_mip_maps(mut self, generate: bool) -> Self {
        self.generate_mip_maps = generate;
        self
    }

    /// Set the re-render cadence (0 = once, n = every n-th frame).
    pub fn with_refresh_rate(mut self, rate: u32) -> Self {
        self.refresh_rate = rate;
        self
    }

    /// Set the fallback texture name.
    pub fn with_fallback_texture(mut self, name: impl Into<String>) -> Self {
        self.fallback_texture = Some(name.into());
        self
    }

    /// Texture name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Square size in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Identifier of the fragment program this texture renders with.
    pub fn fragment_key(&self) -> &str {
        &self.fragment_key
    }

    /// Whether a mipmap chain is rendered.
    pub fn generate_mip_maps(&self) -> bool {
        self.generate_mip_maps
    }

    /// Re-render cadence.
    pub fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }

    /// Fallback texture name, if any.
    pub fn fallback_texture(&self) -> Option<&str> {
        self.fallback_texture.as_deref()
    }

    /// Whether the texture should re-render on the given frame.
    ///
    /// Rate 0 renders only once (frame 0), rate 1 renders every frame,
    /// rate n renders every n-th frame.
    pub fn should_render(&self, frame: u64) -> bool {
        match self.refresh_rate {
            0 => frame == 0,
            rate => frame % rate as u64 == 0,
        }
    }

    /// Start a document carrying this texture's base fields, tagged with
    /// the given custom type. Variants append their params to the result.
    pub fn serialize_base(&self, custom_type: &str) -> TextureDocument {
        let mut doc = TextureDocument::new(custom_type, &self.name, self.size)
            .with_generate_mip_maps(self.generate_mip_maps)
            .with_refresh_rate(self.refresh_rate);
        if let Some(fallback) = &self.fallback_texture {
            doc = doc.with_fallback_texture(fallback);
        }
        doc
    }

    /// Rebuild base texture state from a document's base fields.
    pub fn from_document(doc: &TextureDocument, fragment_key: impl Into<String>) -> Self {
        let mut texture = Self::new(&doc.name, doc.size, fragment_key)
            .with_generate_mip_maps(doc.generate_mip_maps)
            .with_refresh_rate(doc.refresh_rate);
        if let Some(fallback) = &doc.fallback_texture {
            texture = texture.with_fallback_texture(fallback);
        }
        texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_defaults() {
        let texture = ProceduralTexture::new("wall", 256, "brick");
        assert_eq!(texture.name(), "wall");
        assert_eq!(texture.size(), 256);
        assert_eq!(texture.fragment_key(), "brick");
        assert!(!texture.generate_mip_maps());
        assert_eq!(texture.refresh_rate(), 0);
        assert!(texture.fallback_texture().is_none());
        assert!(texture.uniforms.is_empty());
    }

    #[test]
    fn test_should_render_rates() {
        let once = ProceduralTexture::new("t", 64, "brick");
        assert!(once.should_render(0));
        assert!(!once.should_render(1));
        assert!(!once.should_render(100));

        let every_frame = ProceduralTexture::new("t", 64, "brick").with_refresh_rate(1);
        assert!(every_frame.should_render(0));
        assert!(every_frame.should_render(7));

        let every_third = ProceduralTexture::new("t", 64, "brick").with_refresh_rate(3);
        assert!(every_third.should_render(0));
        assert!(!every_third.should_render(1));
        assert!(every_third.should_render(3));
        assert!(every_third.should_render(6));
    }

    #[test]
    fn test_base_fields_round_trip_through_document() {
        let texture = ProceduralTexture::new("wall", 512, "brick")
            .with_generate_mip_maps(true)
            .with_refresh_rate(2)
            .with_fallback_texture("flat_gray");

        let doc = texture.serialize_base("texture.brick_v1");
        assert_eq!(doc.custom_type, "texture.brick_v1");

        let restored = ProceduralTexture::from_document(&doc, "brick");
        assert_eq!(restored.name(), "wall");
        assert_eq!(restored.size(), 512);
        assert!(restored.generate_mip_maps());
        assert_eq!(restored.refresh_rate(), 2);
        assert_eq!(restored.fallback_texture(), Some("flat_gray"));
    }
}
