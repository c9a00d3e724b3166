//! PNG rendering of the constant tables and curve

use crate::io::configuration::{PALETTE_MAP_SIZE, PALETTE_SIZE};
use crate::io::error::{PaletteError, Result, file_system_error};
use crate::spatial::pealbert::{PEALBERT_SIDE, pealbert_distance};
use image::{GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

// ln of the largest multiplier, so the full range fits in one byte
const LOG_MULTIPLIER_RANGE: f32 = 1.443;

// Slices per row when tiling the 32 z-slices of the curve
const SLICES_PER_ROW: u32 = 8;

fn save<P, C>(img: &ImageBuffer<P, C>, path: &Path) -> Result<()>
where
    P: image::PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
    C: std::ops::Deref<Target = [P::Subpixel]>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(path).map_err(|e| PaletteError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Grey level for a multiplier: 128 is 1.0, darker below, lighter above
pub fn multiplier_shade(value: f32) -> u8 {
    let normalized = (value.ln() / LOG_MULTIPLIER_RANGE).clamp(-1.0, 1.0);
    ((normalized + 1.0) * 127.5).round() as u8
}

/// Render one multiplier grid as a greyscale image in log scale
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved
pub fn export_multipliers_png(table: &Array2<f32>, path: &Path) -> Result<()> {
    let (rows, cols) = table.dim();
    let img = GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        let value = table
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(1.0);
        Luma([multiplier_shade(value)])
    });
    save(&img, path)
}

/// Render a palette map as a 1024×32 strip
///
/// Columns run over red (blocks of 32) then blue; rows run over green.
/// Each pixel shows the palette colour the map chose.
///
/// # Errors
///
/// Returns an error if the map has the wrong size, the parent directory
/// cannot be created or the image cannot be saved
pub fn export_palette_map_png(
    map: &[u8],
    palette: &[u32; PALETTE_SIZE],
    path: &Path,
) -> Result<()> {
    if map.len() != PALETTE_MAP_SIZE {
        return Err(PaletteError::PaletteLength {
            expected: PALETTE_MAP_SIZE,
            actual: map.len(),
        });
    }

    let img = RgbaImage::from_fn(1024, 32, |x, y| {
        let (r, b, g) = ((x >> 5) as usize, (x & 31) as usize, y as usize);
        let index = map.get(r << 10 | g << 5 | b).copied().unwrap_or(0);
        let color = palette.get(usize::from(index)).copied().unwrap_or(0);
        Rgba(color.to_be_bytes())
    });
    save(&img, path)
}

/// Render the 32 z-slices of the Pealbert curve, shaded by distance
///
/// Slices are tiled eight to a row, giving a 256×128 image.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved
pub fn export_curve_png(path: &Path) -> Result<()> {
    let width = PEALBERT_SIDE * SLICES_PER_ROW;
    let height = PEALBERT_SIDE * (PEALBERT_SIDE / SLICES_PER_ROW);
    let img = GrayImage::from_fn(width, height, |px, py| {
        let z = (py / PEALBERT_SIDE) * SLICES_PER_ROW + px / PEALBERT_SIDE;
        let distance = pealbert_distance(px % PEALBERT_SIDE, py % PEALBERT_SIDE, z);
        Luma([(distance >> 7) as u8])
    });
    save(&img, path)
}
