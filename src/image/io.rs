//! I/O helpers for grayscale images, masks and JSON.
//!
//! - `load_grayscale_image`: decode PNG/JPEG/etc. into an owned 8-bit gray buffer
//!   using Rec.601 luma weights.
//! - `save_mask_png`: write a binary `Mask` as a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, Mask};
use image::{GrayImage, ImageBuffer, Luma, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert it to 8-bit luma.
///
/// Alpha is dropped. Luma uses the Rec.601 weights in 14-bit fixed point
/// (`0.299 R + 0.587 G + 0.114 B`, rounded), so gray input passes through
/// unchanged.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let rgb = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    Ok(GrayImageU8::new(width, height, rgb_to_luma_bt601(&rgb)))
}

const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

fn rgb_to_luma_bt601(rgb: &RgbImage) -> Vec<u8> {
    let round = 1 << (LUMA_SHIFT - 1);
    rgb.pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            let y = u32::from(r) * LUMA_R + u32::from(g) * LUMA_G + u32::from(b) * LUMA_B;
            ((y + round) >> LUMA_SHIFT) as u8
        })
        .collect()
}

/// Save a binary mask to a grayscale PNG (set pixels white).
pub fn save_mask_png(mask: &Mask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: GrayImage =
        ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(mask.w as u32, mask.h as u32, mask.data.clone())
            .ok_or_else(|| format!("Mask buffer does not match {}x{}", mask.w, mask.h))?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
