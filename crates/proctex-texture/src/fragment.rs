//! CPU fragment program evaluation.
//!
//! The host renderer runs fragment programs on the GPU; this module runs
//! the same math per-pixel on the CPU so textures can be rendered and
//! inspected without a graphics device. Programs read their inputs from
//! the texture's uniform store by name, exactly as the GPU path binds
//! them.

use crate::color::Color3;
use crate::error::TextureError;
use crate::uniforms::UniformStore;

/// Fragment key for the brick program.
pub const BRICK_FRAGMENT_KEY: &str = "brick";

/// Uniform names read by the brick fragment program.
pub mod brick_uniforms {
    pub const NUMBER_OF_BRICKS_HEIGHT: &str = "numberOfBricksHeight";
    pub const NUMBER_OF_BRICKS_WIDTH: &str = "numberOfBricksWidth";
    pub const BRICK_COLOR: &str = "brickColor";
    pub const JOINT_COLOR: &str = "jointColor";
}

/// A fragment program evaluated per pixel.
pub trait FragmentProgram {
    /// Shade one pixel at normalized coordinates (u, v) in [0, 1).
    fn shade(&self, u: f64, v: f64, uniforms: &UniformStore) -> Result<Color3, TextureError>;
}

/// The brick fragment program.
///
/// UV space is divided into a grid of `numberOfBricksWidth` by
/// `numberOfBricksHeight` bricks with odd rows offset by half a brick.
/// Horizontal joints span 5% of a brick's height, vertical joints 1% of
/// a brick's width; both shade the joint color toward a fixed darkening
/// tint. Brick interiors are darkened by a (row + column) mod 3 switch,
/// so every wall shows three repeating brick shades.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrickFragment;

/// GLSL-style mix: linear interpolation without clamping `t`.
fn mix(a: Color3, b: Color3, t: f64) -> Color3 {
    Color3::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
    )
}

/// GLSL-style round: half away from zero.
fn round_half_away(value: f64) -> f64 {
    value.signum() * (value.abs() + 0.5).floor()
}

impl FragmentProgram for BrickFragment {
    fn shade(&self, u: f64, v: f64, uniforms: &UniformStore) -> Result<Color3, TextureError> {
        let bricks_height = uniforms.float(brick_uniforms::NUMBER_OF_BRICKS_HEIGHT)?;
        let bricks_width = uniforms.float(brick_uniforms::NUMBER_OF_BRICKS_WIDTH)?;
        let brick_color = uniforms.color3(brick_uniforms::BRICK_COLOR)?;
        let joint_color = uniforms.color3(brick_uniforms::JOINT_COLOR)?;

        let brick_w = 1.0 / bricks_width;
        let brick_h = 1.0 / bricks_height;
        let joint_w_percentage = 0.01;
        let joint_h_percentage = 0.05;

        let yi = v / brick_h;
        let nyi = round_half_away(yi);

        let mut xi = u / brick_w;
        // Odd rows shift by half a brick for the running bond layout.
        if (yi.floor().rem_euclid(2.0)) == 0.0 {
            xi -= 0.5;
        }
        let nxi = round_half_away(xi);

        let color = if yi < nyi + joint_h_percentage && yi > nyi - joint_h_percentage {
            mix(
                joint_color,
                Color3::new(0.37, 0.25, 0.25),
                (yi - nyi) / joint_h_percentage + 0.2,
            )
        } else if xi < nxi + joint_w_percentage && xi > nxi - joint_w_percentage {
            mix(
                joint_color,
                Color3::new(0.44, 0.44, 0.44),
                (xi - nxi) / joint_w_percentage + 0.2,
            )
        } else {
            let brick_switch = (yi.floor() + xi.floor()).rem_euclid(3.0);
            if brick_switch == 0.0 {
                mix(brick_color, Color3::gray(0.33), 0.3)
            } else if brick_switch == 2.0 {
                mix(brick_color, Color3::gray(0.11), 0.3)
            } else {
                brick_color
            }
        };

        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_brick_uniforms() -> UniformStore {
        let mut store = UniformStore::new();
        store.set_float(brick_uniforms::NUMBER_OF_BRICKS_HEIGHT, 15.0);
        store.set_float(brick_uniforms::NUMBER_OF_BRICKS_WIDTH, 5.0);
        store.set_color3(brick_uniforms::BRICK_COLOR, Color3::new(0.77, 0.47, 0.4));
        store.set_color3(brick_uniforms::JOINT_COLOR, Color3::gray(0.72));
        store
    }

    #[test]
    fn test_shade_is_deterministic() {
        let uniforms = default_brick_uniforms();
        let fragment = BrickFragment;

        let a = fragment.shade(0.2, 0.0333, &uniforms).unwrap();
        let b = fragment.shade(0.2, 0.0333, &uniforms).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_boundary_is_joint() {
        let uniforms = default_brick_uniforms();
        let fragment = BrickFragment;

        // v on a row boundary sits inside the horizontal joint band, so the
        // brick color must not influence the pixel there.
        let joint_pixel = fragment.shade(0.2, 1.0 / 15.0, &uniforms).unwrap();

        let mut red_bricks = default_brick_uniforms();
        red_bricks.set_color3(brick_uniforms::BRICK_COLOR, Color3::new(1.0, 0.0, 0.0));
        let joint_pixel_red = fragment.shade(0.2, 1.0 / 15.0, &red_bricks).unwrap();

        assert_eq!(joint_pixel, joint_pixel_red);
    }

    #[test]
    fn test_brick_interior_follows_brick_color() {
        let uniforms = default_brick_uniforms();
        let fragment = BrickFragment;

        // Center of a brick: yi = 0.5 (v = 0.5/15), xi = 0.5 after the
        // even-row half-brick shift (u = 0.2).
        let interior = fragment.shade(0.2, 0.5 / 15.0, &uniforms).unwrap();

        let mut red_bricks = default_brick_uniforms();
        red_bricks.set_color3(brick_uniforms::BRICK_COLOR, Color3::new(1.0, 0.0, 0.0));
        let interior_red = fragment.shade(0.2, 0.5 / 15.0, &red_bricks).unwrap();

        assert_ne!(interior, interior_red);
    }

    #[test]
    fn test_interior_shades_vary_per_brick() {
        let uniforms = default_brick_uniforms();
        let fragment = BrickFragment;

        // Adjacent bricks in the same row land on different mod-3 shades.
        let v = 0.5 / 15.0;
        let a = fragment.shade(0.2, v, &uniforms).unwrap();
        let b = fragment.shade(0.4, v, &uniforms).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_missing_uniform_fails() {
        let fragment = BrickFragment;
        let empty = UniformStore::new();

        let err = fragment.shade(0.5, 0.5, &empty).unwrap_err();
        assert!(matches!(err, TextureError::MissingUniform(_)));
    }
}
