//! Debug slice rendering: sample a kernel over a horizontal slice and write PNGs.

use std::path::Path;

use glam::{Vec2, Vec3};
use strata_config::SliceConfig;
use strata_math::saturate;

/// Errors from writing debug images.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to create the output directory or file.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoder rejected the image.
    #[error("failed to encode png: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// A 2D debug image stored as row-major RGBA pixels.
#[derive(Clone, Debug)]
pub struct DebugImage {
    pub width: u32,
    pub height: u32,
    /// Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a new black (all-zero) image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; rgba_len(width, height)],
        }
    }

    /// Set one pixel. Panics if out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Encode as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut png_buf = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(std::io::Cursor::new(&mut png_buf), self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(png_buf)
    }

    /// Encode and write to `path`, creating parent directories.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.encode_png()?)?;
        Ok(())
    }
}

/// Byte length of an RGBA buffer, computed in `usize` so large slices do not
/// overflow `u32`.
fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

/// World position of pixel `(px, py)` on the configured slice.
pub fn pixel_to_world(slice: &SliceConfig, px: u32, py: u32) -> Vec3 {
    Vec3::new(
        slice.origin_x + px as f32 * slice.scale,
        slice.height,
        slice.origin_z + py as f32 * slice.scale,
    )
}

/// Render a scalar kernel as grayscale, mapping `[lo, hi]` to black..white.
pub fn render_scalar(
    slice: &SliceConfig,
    lo: f32,
    hi: f32,
    sample: impl Fn(Vec3) -> f32,
) -> DebugImage {
    let mut image = DebugImage::new(slice.size, slice.size);
    let span = hi - lo;
    for py in 0..slice.size {
        for px in 0..slice.size {
            let v = sample(pixel_to_world(slice, px, py));
            let t = if span > 0.0 { saturate((v - lo) / span) } else { 0.5 };
            let g = (t * 255.0) as u8;
            image.set_pixel(px, py, [g, g, g, 255]);
        }
    }
    image
}

/// Render a solid/empty mask: tan for solid, dark blue for air.
pub fn render_solid(slice: &SliceConfig, is_solid: impl Fn(Vec3) -> bool) -> DebugImage {
    let mut image = DebugImage::new(slice.size, slice.size);
    for py in 0..slice.size {
        for px in 0..slice.size {
            let rgba = if is_solid(pixel_to_world(slice, px, py)) {
                [196, 164, 120, 255]
            } else {
                [16, 24, 48, 255]
            };
            image.set_pixel(px, py, rgba);
        }
    }
    image
}

/// Render a 2D Voronoi kernel: hue from the cell id, darkened near borders.
pub fn render_cells(slice: &SliceConfig, cells: impl Fn(Vec2) -> Vec2) -> DebugImage {
    let mut image = DebugImage::new(slice.size, slice.size);
    for py in 0..slice.size {
        for px in 0..slice.size {
            let p = pixel_to_world(slice, px, py);
            let v = cells(Vec2::new(p.x, p.z));
            let shade = saturate(v.x * 4.0);
            let (r, g, b) = id_to_color(v.y);
            image.set_pixel(
                px,
                py,
                [
                    (r as f32 * shade) as u8,
                    (g as f32 * shade) as u8,
                    (b as f32 * shade) as u8,
                    255,
                ],
            );
        }
    }
    image
}

/// Map a cell id in `[0, 1)` to a saturated color around the hue wheel.
pub fn id_to_color(id: f32) -> (u8, u8, u8) {
    let h = (id.rem_euclid(1.0)) * 6.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
