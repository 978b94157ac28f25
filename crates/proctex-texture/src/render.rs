//! CPU rendering of procedural textures.

use crate::buffer::TextureBuffer;
use crate::error::TextureError;
use crate::fragment::FragmentProgram;
use crate::texture::ProceduralTexture;

/// Render a texture by evaluating a fragment program at every pixel.
///
/// UVs are sampled at pixel centers, so a size-n texture covers
/// (0.5/n .. (n-0.5)/n) in both axes.
pub fn render(
    texture: &ProceduralTexture,
    program: &dyn FragmentProgram,
) -> Result<TextureBuffer, TextureError> {
    let size = texture.size();
    let mut buffer = TextureBuffer::new_black(size, size);

    for y in 0..size {
        let v = (y as f64 + 0.5) / size as f64;
        for x in 0..size {
            let u = (x as f64 + 0.5) / size as f64;
            buffer.set(x, y, program.shade(u, v, &texture.uniforms)?);
        }
    }

    Ok(buffer)
}

/// Render a texture and, when its mipmap flag is set, the box-filtered
/// mip chain down to 1x1. Level 0 is always the full-resolution image.
pub fn render_with_mip_maps(
    texture: &ProceduralTexture,
    program: &dyn FragmentProgram,
) -> Result<Vec<TextureBuffer>, TextureError> {
    let base = render(texture, program)?;

    let mut levels = vec![base];
    if texture.generate_mip_maps() {
        loop {
            let next = match levels.last() {
                Some(level) if level.width > 1 || level.height > 1 => downsample(level),
                _ => break,
            };
            levels.push(next);
        }
    }

    Ok(levels)
}

/// Halve a buffer with a 2x2 box filter, clamping at the edges for odd
/// dimensions.
fn downsample(src: &TextureBuffer) -> TextureBuffer {
    let width = (src.width / 2).max(1);
    let height = (src.height / 2).max(1);
    let mut dst = TextureBuffer::new_black(width, height);

    for y in 0..height {
        for x in 0..width {
            let x0 = (x * 2).min(src.width - 1);
            let x1 = (x * 2 + 1).min(src.width - 1);
            let y0 = (y * 2).min(src.height - 1);
            let y1 = (y * 2 + 1).min(src.height - 1);

            let sum = src
                .get(x0, y0)
                .add(&src.get(x1, y0))
                .add(&src.get(x0, y1))
                .add(&src.get(x1, y1));
            dst.set(x, y, sum.scale(0.25));
        }
    }

    dst
}
