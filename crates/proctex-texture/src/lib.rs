//! proctex Procedural Texture Runtime
//!
//! This crate provides the procedural texture runtime: a uniform store, a
//! base texture type, the brick variant, CPU fragment evaluation, and
//! deterministic PNG export. Variants keep their shader uniform slots
//! consistent with their parameter fields at all times, and serialize to
//! the tagged document format defined in `proctex-spec`.
//!
//! # Example
//!
//! ```no_run
//! use proctex_texture::{BrickProceduralTexture, BrickFragment, Color3};
//! use proctex_texture::render::render;
//! use proctex_texture::png::{write_rgb, PngConfig};
//! use std::path::Path;
//!
//! let mut brick = BrickProceduralTexture::new("wall", 256);
//! brick.set_number_of_bricks_width(8.0);
//! brick.set_brick_color(Color3::new(0.6, 0.25, 0.2));
//!
//! let buffer = render(brick.texture(), &BrickFragment).unwrap();
//! write_rgb(&buffer, Path::new("wall.png"), &PngConfig::default()).unwrap();
//!
//! let doc = brick.serialize().unwrap();
//! println!("{}", doc.to_json_pretty().unwrap());
//! ```
//!
//! # Determinism
//!
//! Fragment evaluation is pure arithmetic over the uniform values, and the
//! PNG writer pins its compression settings, so the same parameters always
//! produce byte-identical output.

pub mod brick;
pub mod buffer;
pub mod color;
pub mod error;
pub mod fragment;
pub mod png;
pub mod registry;
pub mod render;
pub mod texture;
pub mod uniforms;

// Re-export main types for convenience
pub use brick::{BrickProceduralTexture, BRICK_CUSTOM_TYPE};
pub use buffer::TextureBuffer;
pub use color::Color3;
pub use error::TextureError;
pub use fragment::{BrickFragment, FragmentProgram, BRICK_FRAGMENT_KEY};
pub use png::{PngConfig, PngError};
pub use registry::{ProceduralTextureKind, TextureRegistry};
pub use render::{render, render_with_mip_maps};
pub use texture::ProceduralTexture;
pub use uniforms::{UniformStore, UniformValue};
