// Pixel comparison library for rasterdraw output.
//
// Provides buffer comparison, image I/O, and diff image generation.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

// ============================================================================
// Pixel Buffer
// ============================================================================

/// An RGBA pixel buffer with dimensions.
#[derive(Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, row-major, top-to-bottom. Length = width * height * 4.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width * height * 4) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

impl From<&rasterdraw::PixmapRgba32> for PixelBuffer {
    fn from(pm: &rasterdraw::PixmapRgba32) -> Self {
        use rasterdraw::Surface;
        Self {
            width: pm.width(),
            height: pm.height(),
            data: pm.data().to_vec(),
        }
    }
}

// ============================================================================
// Comparison Result
// ============================================================================

/// Information about a single pixel difference.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    pub x: u32,
    pub y: u32,
    pub pixel_a: [u8; 4],
    pub pixel_b: [u8; 4],
}

/// Result of comparing two pixel buffers.
#[derive(Debug, Clone)]
pub struct CompareResult {
    /// True if every pixel in both buffers is identical.
    pub identical: bool,
    pub total_pixels: u64,
    /// Number of pixels that differ by at least 1 in any channel.
    pub different_pixels: u64,
    /// Maximum absolute difference across any single channel of any pixel.
    pub max_channel_diff: u8,
    /// Mean absolute difference across all differing channels.
    pub mean_channel_diff: f64,
    /// The first differing pixel found, scanning row by row.
    pub first_diff: Option<DiffInfo>,
}

impl std::fmt::Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.identical {
            write!(f, "IDENTICAL: {} pixels match perfectly", self.total_pixels)
        } else {
            write!(
                f,
                "DIFFERENT: {}/{} pixels differ ({:.2}%), max_diff={}, mean_diff={:.4}",
                self.different_pixels,
                self.total_pixels,
                self.different_pixels as f64 / self.total_pixels as f64 * 100.0,
                self.max_channel_diff,
                self.mean_channel_diff,
            )?;
            if let Some(ref d) = self.first_diff {
                write!(
                    f,
                    "\n  First diff at ({}, {}): A={:?} B={:?}",
                    d.x, d.y, d.pixel_a, d.pixel_b
                )?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// Buffer Comparison
// ============================================================================

fn check_same_size(a: &PixelBuffer, b: &PixelBuffer) -> Result<()> {
    if a.width != b.width || a.height != b.height {
        bail!(
            "size mismatch: {}x{} vs {}x{}",
            a.width,
            a.height,
            b.width,
            b.height
        );
    }
    Ok(())
}

/// Compare two RGBA pixel buffers channel by channel.
pub fn compare_buffers(a: &PixelBuffer, b: &PixelBuffer) -> Result<CompareResult> {
    check_same_size(a, b)?;

    let total_pixels = (a.width as u64) * (a.height as u64);
    let mut different_pixels = 0u64;
    let mut max_channel_diff = 0u8;
    let mut total_diff_sum = 0u64;
    let mut total_diff_channels = 0u64;
    let mut first_diff: Option<DiffInfo> = None;

    for y in 0..a.height {
        for x in 0..a.width {
            let pa = a.pixel(x, y);
            let pb = b.pixel(x, y);

            let mut pixel_differs = false;
            for c in 0..4 {
                let diff = pa[c].abs_diff(pb[c]);
                if diff > 0 {
                    pixel_differs = true;
                    max_channel_diff = max_channel_diff.max(diff);
                    total_diff_sum += diff as u64;
                    total_diff_channels += 1;
                }
            }

            if pixel_differs {
                different_pixels += 1;
                if first_diff.is_none() {
                    first_diff = Some(DiffInfo {
                        x,
                        y,
                        pixel_a: pa,
                        pixel_b: pb,
                    });
                }
            }
        }
    }

    let mean_channel_diff = if total_diff_channels > 0 {
        total_diff_sum as f64 / total_diff_channels as f64
    } else {
        0.0
    };
    debug!("compared {} pixels, {} differ", total_pixels, different_pixels);

    Ok(CompareResult {
        identical: different_pixels == 0,
        total_pixels,
        different_pixels,
        max_channel_diff,
        mean_channel_diff,
        first_diff,
    })
}

/// Generate a visual diff image highlighting pixel differences.
///
/// Identical pixels are dark gray. Different pixels are red, brighter for
/// larger differences (amplified 10x).
pub fn generate_diff_image(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    check_same_size(a, b)?;

    let mut diff = PixelBuffer::new(a.width, a.height);
    for (i, out) in diff.data.chunks_exact_mut(4).enumerate() {
        let o = i * 4;
        let max_diff = (0..4)
            .map(|c| a.data[o + c].abs_diff(b.data[o + c]))
            .max()
            .unwrap_or(0);
        if max_diff == 0 {
            out.copy_from_slice(&[40, 40, 40, 255]);
        } else {
            let v = (max_diff as u16 * 10).min(255) as u8;
            out.copy_from_slice(&[v, 0, 0, 255]);
        }
    }
    Ok(diff)
}

/// Generate a side-by-side comparison image: [A | Diff | B]
pub fn generate_sidebyside(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    let diff = generate_diff_image(a, b)?;
    let total_width = a.width * 3;
    let mut out = PixelBuffer::new(total_width, a.height);

    for y in 0..a.height {
        for (panel, src) in [a, &diff, b].into_iter().enumerate() {
            let row = (y * a.width * 4) as usize..((y + 1) * a.width * 4) as usize;
            let dst = ((y * total_width + panel as u32 * a.width) * 4) as usize;
            out.data[dst..dst + row.len()].copy_from_slice(&src.data[row]);
        }
    }
    Ok(out)
}

// ============================================================================
// Image I/O
// ============================================================================

/// Load any image format the `image` crate recognizes, converted to RGBA.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .with_context(|| format!("failed to load {}", path.display()))?
        .to_rgba8();
    Ok(PixelBuffer {
        width: img.width(),
        height: img.height(),
        data: img.into_raw(),
    })
}

/// Save a buffer, picking the format from the file extension.
pub fn save_image(path: &Path, buf: &PixelBuffer) -> Result<()> {
    let img = image::RgbaImage::from_raw(buf.width, buf.height, buf.data.clone())
        .context("pixel data does not match the buffer size")?;
    img.save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    debug!("saved {}x{} image to {}", buf.width, buf.height, path.display());
    Ok(())
}

// ============================================================================
// Scene rendering
// ============================================================================

pub mod render;
