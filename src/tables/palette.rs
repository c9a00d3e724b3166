//! Nearest-palette-index lookup for every RGB555 colour
//!
//! The table is embedded as base64 text and decoded on first use. Indices
//! are `r << 10 | g << 5 | b` with 5-bit channels; each byte names the
//! closest opaque entry of [`DEFAULT_PALETTE`].

use crate::io::configuration::{PALETTE_MAP_SIZE, PALETTE_SIZE};
use crate::io::error::{PaletteError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Base64 text of the precomputed mapping for [`DEFAULT_PALETTE`]
pub const EMBEDDED_PALETTE_MAP: &str = include_str!("../../data/palette_map.b64");

const GREEN_LEVELS: [u32; 7] = [0, 42, 85, 127, 170, 212, 255];

const fn rgba(r: u32, g: u32, b: u32, a: u32) -> u32 {
    (r << 24) | (g << 16) | (b << 8) | a
}

const fn build_default_palette() -> [u32; PALETTE_SIZE] {
    let mut palette = [0_u32; PALETTE_SIZE];
    let mut j = 0;
    while j < 252 {
        let r = (j / 42) as u32 * 51;
        let g = GREEN_LEVELS[(j / 6) % 7];
        let b = (j % 6) as u32 * 51;
        palette[j + 1] = rgba(r, g, b, 255);
        j += 1;
    }
    palette[253] = rgba(0x40, 0x40, 0x40, 255);
    palette[254] = rgba(0x80, 0x80, 0x80, 255);
    palette[255] = rgba(0xC0, 0xC0, 0xC0, 255);
    palette
}

/// RGBA8888 palette the embedded table was built for
///
/// Index 0 is fully transparent. Indices 1 to 252 form a 6×7×6 colour cube
/// (red, green, blue levels) and 253 to 255 are extra greys.
pub const DEFAULT_PALETTE: [u32; PALETTE_SIZE] = build_default_palette();

/// Decode a base64 palette map, insisting on exactly [`PALETTE_MAP_SIZE`] bytes
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid base64
/// - The decoded table has the wrong length
pub fn decode_palette_map(encoded: &str) -> Result<Vec<u8>> {
    let bytes = STANDARD.decode(encoded.trim())?;
    if bytes.len() != PALETTE_MAP_SIZE {
        return Err(PaletteError::PaletteLength {
            expected: PALETTE_MAP_SIZE,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Decode a palette map, substituting an all-zero table on any failure
///
/// The failure is logged and swallowed; callers always get
/// [`PALETTE_MAP_SIZE`] bytes back.
pub fn palette_map_or_zeroed(encoded: &str) -> Vec<u8> {
    match decode_palette_map(encoded) {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(%error, "palette map unreadable, using a zeroed table");
            vec![0; PALETTE_MAP_SIZE]
        }
    }
}

static PALETTE_MAP: LazyLock<Vec<u8>> = LazyLock::new(|| {
    debug!(bytes = PALETTE_MAP_SIZE, "decoding embedded palette map");
    palette_map_or_zeroed(EMBEDDED_PALETTE_MAP)
});

/// The process-wide palette map for [`DEFAULT_PALETTE`]
pub fn palette_map() -> &'static [u8] {
    &PALETTE_MAP
}

/// Index into a palette map for an 8-bit colour (low 3 bits of each channel dropped)
pub const fn rgb555_index(r: u8, g: u8, b: u8) -> usize {
    (((r as usize) << 7) & 0x7C00) | (((g as usize) << 2) & 0x3E0) | ((b as usize) >> 3)
}

/// Look up the palette index for an 8-bit colour in the process-wide map
pub fn palette_index(r: u8, g: u8, b: u8) -> u8 {
    palette_map()
        .get(rgb555_index(r, g, b))
        .copied()
        .unwrap_or(0)
}

// 5-bit channel widened so that 0 maps to 0 and 31 maps to 255
const fn expand5(channel: usize) -> i32 {
    ((channel << 3) | (channel >> 2)) as i32
}

const fn channel(color: u32, shift: u32) -> i32 {
    ((color >> shift) & 0xFF) as i32
}

/// Closest opaque palette entry to `(r, g, b)` by squared RGB distance
///
/// Index 0 is reserved for transparency and never returned; ties go to the
/// lower index.
pub fn nearest_palette_index(palette: &[u32; PALETTE_SIZE], r: i32, g: i32, b: i32) -> u8 {
    let mut best = 1_u8;
    let mut best_distance = i32::MAX;
    for (index, &color) in palette.iter().enumerate().skip(1) {
        let dr = r - channel(color, 24);
        let dg = g - channel(color, 16);
        let db = b - channel(color, 8);
        let distance = dr * dr + dg * dg + db * db;
        if distance < best_distance {
            best_distance = distance;
            best = index as u8;
        }
    }
    best
}

/// Build a palette map for any 256-entry palette
pub fn compute_palette_map(palette: &[u32; PALETTE_SIZE]) -> Vec<u8> {
    (0..PALETTE_MAP_SIZE)
        .map(|index| {
            nearest_palette_index(
                palette,
                expand5((index >> 10) & 31),
                expand5((index >> 5) & 31),
                expand5(index & 31),
            )
        })
        .collect()
}
