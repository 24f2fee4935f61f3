use std::fmt::Write as _;
use std::path::Path;

use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::error::AppError;
use crate::level::Layer;

const OPEN_COLOUR: Rgb<u8> = Rgb([18, 18, 24]);

// Text view: each layer under a header, top row first
pub fn render_ascii(layers: &[Layer]) -> String {
    let mut out = String::new();
    for layer in layers {
        // Writing into a String cannot fail
        let _ = writeln!(out, "== {} ({}, seed {}) ==", layer.name, layer.algorithm, layer.seed);
        let _ = write!(out, "{}", layer.grid);
    }
    out
}

// Solid colour for layer `index` of `count`, surface-green through cave-stone
fn layer_tint(index: usize, count: usize) -> Rgb<u8> {
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.15, 0.55, 0.20)), // grass
        (0.50, LinSrgb::new(0.45, 0.32, 0.20)), // dirt
        (1.00, LinSrgb::new(0.40, 0.40, 0.45)), // stone
    ]);
    let t = if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    };
    let col: LinSrgb = gradient.get(t);
    let rgb = col.into_format::<u8>();
    Rgb([rgb.red, rgb.green, rgb.blue])
}

// Pixel size of the stacked image, None when it does not fit in u32
fn image_size(layers: &[Layer], scale: u32) -> Option<(u32, u32)> {
    let width = layers.iter().map(|l| l.grid.width()).max().unwrap_or(0);
    let height = layers
        .iter()
        .try_fold(0usize, |acc, l| acc.checked_add(l.grid.height()))?;
    let width = u32::try_from(width).ok()?.checked_mul(scale)?;
    let height = u32::try_from(height).ok()?.checked_mul(scale)?;
    Some((width, height))
}

// Layers stacked top to bottom, `scale` pixels per tile
pub fn render_image(layers: &[Layer], scale: u32) -> Result<RgbImage, AppError> {
    let scale = scale.max(1);
    let (width, height) = image_size(layers, scale).ok_or(AppError::ImageTooLarge { scale })?;
    let mut img = RgbImage::from_pixel(width, height, OPEN_COLOUR);

    let mut top = 0u32;
    for (index, layer) in layers.iter().enumerate() {
        let tint = layer_tint(index, layers.len());
        let grid = &layer.grid;
        for y in 0..grid.height() {
            // Grid row 0 is the bottom of the layer
            let row = top + (grid.height() - 1 - y) as u32;
            for x in 0..grid.width() {
                if !grid.is_solid(x, y) {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(x as u32 * scale + dx, row * scale + dy, tint);
                    }
                }
            }
        }
        top += grid.height() as u32;
    }
    Ok(img)
}

pub fn save_png(layers: &[Layer], scale: u32, path: &Path) -> Result<(), AppError> {
    let img = render_image(layers, scale)?;
    img.save(path)?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "image written");
    Ok(())
}
