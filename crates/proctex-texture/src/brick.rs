//! The brick procedural texture variant.

use serde::{Deserialize, Serialize};

use proctex_spec::{DocumentError, TextureDocument};

use crate::color::Color3;
use crate::error::TextureError;
use crate::fragment::{brick_uniforms, BrickFragment, FragmentProgram, BRICK_FRAGMENT_KEY};
use crate::registry::ProceduralTextureKind;
use crate::texture::ProceduralTexture;

/// Document tag for the brick variant.
pub const BRICK_CUSTOM_TYPE: &str = "texture.brick_v1";

/// A parametrized brick-wall texture.
///
/// Holds the brick grid counts and the two colors, and keeps the shader
/// uniform slots consistent with them: construction and every setter
/// re-upload all four uniforms, so the fragment program can never observe
/// a half-updated parameter set.
#[derive(Debug, Clone)]
pub struct BrickProceduralTexture {
    texture: ProceduralTexture,
    number_of_bricks_height: f64,
    number_of_bricks_width: f64,
    joint_color: Color3,
    brick_color: Color3,
}

/// Persisted brick parameters. Missing fields fall back to the
/// construction defaults, matching the parse flow of "construct with
/// defaults, then apply saved fields".
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BrickParams {
    #[serde(default = "default_bricks_height")]
    number_of_bricks_height: f64,
    #[serde(default = "default_bricks_width")]
    number_of_bricks_width: f64,
    #[serde(default = "default_joint_color")]
    joint_color: Color3,
    #[serde(default = "default_brick_color")]
    brick_color: Color3,
}

fn default_bricks_height() -> f64 {
    15.0
}

fn default_bricks_width() -> f64 {
    5.0
}

fn default_joint_color() -> Color3 {
    Color3::gray(0.72)
}

fn default_brick_color() -> Color3 {
    Color3::new(0.77, 0.47, 0.4)
}

impl BrickProceduralTexture {
    /// Create a brick texture with default parameters and upload them.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        let mut brick = Self {
            texture: ProceduralTexture::new(name, size, BRICK_FRAGMENT_KEY),
            number_of_bricks_height: default_bricks_height(),
            number_of_bricks_width: default_bricks_width(),
            joint_color: default_joint_color(),
            brick_color: default_brick_color(),
        };
        brick.update_shader_uniforms();
        brick
    }

    /// Enable or disable the mipmap chain.
    pub fn with_generate_mip_maps(mut self, generate: bool) -> Self {
        self.texture = self.texture.with_generate_mip_maps(generate);
        self
    }

    /// Set the re-render cadence.
    pub fn with_refresh_rate(mut self, rate: u32) -> Self {
        self.texture = self.texture.with_refresh_rate(rate);
        self
    }

    /// Set the fallback texture name.
    pub fn with_fallback_texture(mut self, name: impl Into<String>) -> Self {
        self.texture = self.texture.with_fallback_texture(name);
        self
    }

    /// The underlying procedural texture state.
    pub fn texture(&self) -> &ProceduralTexture {
        &self.texture
    }

    /// Mutable access to the underlying texture, for host-side wiring
    /// such as uploading extra uniforms.
    pub fn texture_mut(&mut self) -> &mut ProceduralTexture {
        &mut self.texture
    }

    /// Upload all four parameters to their uniform slots.
    pub fn update_shader_uniforms(&mut self) {
        let uniforms = &mut self.texture.uniforms;
        uniforms.set_float(
            brick_uniforms::NUMBER_OF_BRICKS_HEIGHT,
            self.number_of_bricks_height,
        );
        uniforms.set_float(
            brick_uniforms::NUMBER_OF_BRICKS_WIDTH,
            self.number_of_bricks_width,
        );
        uniforms.set_color3(brick_uniforms::BRICK_COLOR, self.brick_color);
        uniforms.set_color3(brick_uniforms::JOINT_COLOR, self.joint_color);
    }

    /// Number of brick rows.
    pub fn number_of_bricks_height(&self) -> f64 {
        self.number_of_bricks_height
    }

    /// Set the number of brick rows and refresh the uniforms.
    pub fn set_number_of_bricks_height(&mut self, value: f64) {
        self.number_of_bricks_height = value;
        self.update_shader_uniforms();
    }

    /// Number of brick columns.
    pub fn number_of_bricks_width(&self) -> f64 {
        self.number_of_bricks_width
    }

    /// Set the number of brick columns and refresh the uniforms.
    pub fn set_number_of_bricks_width(&mut self, value: f64) {
        self.number_of_bricks_width = value;
        self.update_shader_uniforms();
    }

    /// Mortar joint color.
    pub fn joint_color(&self) -> Color3 {
        self.joint_color
    }

    /// Set the mortar joint color and refresh the uniforms.
    pub fn set_joint_color(&mut self, value: Color3) {
        self.joint_color = value;
        self.update_shader_uniforms();
    }

    /// Brick face color.
    pub fn brick_color(&self) -> Color3 {
        self.brick_color
    }

    /// Set the brick face color and refresh the uniforms.
    pub fn set_brick_color(&mut self, value: Color3) {
        self.brick_color = value;
        self.update_shader_uniforms();
    }

    /// Serialize into a tagged texture document.
    pub fn serialize(&self) -> Result<TextureDocument, TextureError> {
        let params = BrickParams {
            number_of_bricks_height: self.number_of_bricks_height,
            number_of_bricks_width: self.number_of_bricks_width,
            joint_color: self.joint_color,
            brick_color: self.brick_color,
        };

        let mut doc = self.texture.serialize_base(BRICK_CUSTOM_TYPE);
        let value = serde_json::to_value(&params).map_err(DocumentError::Json)?;
        if let serde_json::Value::Object(map) = value {
            doc.params = map;
        }
        Ok(doc)
    }

    /// Reconstruct a brick texture from a parsed document.
    ///
    /// The document must carry the brick tag; saved parameters override
    /// the construction defaults and the uniforms are re-uploaded.
    pub fn parse(doc: &TextureDocument) -> Result<Self, TextureError> {
        if doc.custom_type != BRICK_CUSTOM_TYPE {
            return Err(DocumentError::CustomTypeMismatch {
                expected: BRICK_CUSTOM_TYPE,
                actual: doc.custom_type.clone(),
            }
            .into());
        }
        doc.validate()?;

        let params: BrickParams = doc.parse_params()?;

        let mut brick = Self {
            texture: ProceduralTexture::from_document(doc, BRICK_FRAGMENT_KEY),
            number_of_bricks_height: params.number_of_bricks_height,
            number_of_bricks_width: params.number_of_bricks_width,
            joint_color: params.joint_color,
            brick_color: params.brick_color,
        };
        brick.update_shader_uniforms();
        Ok(brick)
    }
}

impl ProceduralTextureKind for BrickProceduralTexture {
    fn custom_type(&self) -> &'static str {
        BRICK_CUSTOM_TYPE
    }

    fn texture(&self) -> &ProceduralTexture {
        &self.texture
    }

    fn update_shader_uniforms(&mut self) {
        BrickProceduralTexture::update_shader_uniforms(self);
    }

    fn fragment_program(&self) -> Box<dyn FragmentProgram> {
        Box::new(BrickFragment)
    }

    fn serialize(&self) -> Result<TextureDocument, TextureError> {
        BrickProceduralTexture::serialize(self)
    }
}
