//! Surface capability trait and the 32-bit RGBA pixmap.
//!
//! Rasterizers never touch pixel bytes directly. They go through the
//! [`Surface`] trait: size, clip rectangle, read and write one pixel, and
//! map colors to and from the surface's packed native form.

use crate::basics::Rect;
use crate::color::Rgba8;
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// Surface trait
// ============================================================================

/// An addressable pixel grid that draw calls write into.
///
/// `get_pixel` and `set_pixel` are only ever called with coordinates inside
/// `clip_rect()` intersected with the surface bounds; implementations may
/// panic on anything else.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Rectangle outside of which writes are suppressed. Defaults to the
    /// whole surface.
    fn clip_rect(&self) -> Rect {
        Rect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Read pixel `(x, y)` as RGBA.
    fn get_pixel(&self, x: i32, y: i32) -> Rgba8;

    /// Write RGBA `c` to pixel `(x, y)`, converting to the native format.
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgba8);

    /// Write `len` pixels starting at `(x, y)` along the row.
    fn set_hline(&mut self, x: i32, y: i32, len: u32, c: Rgba8) {
        for i in 0..len as i32 {
            self.set_pixel(x + i, y, c);
        }
    }

    /// Pack a color in the surface's native pixel format.
    fn map_rgb(&self, c: Rgba8) -> u32;

    /// Unpack a native pixel value.
    fn unmap_rgb(&self, pixel: u32) -> Rgba8;

    /// Begin a batch of pixel accesses.
    fn lock(&mut self) {}

    /// End a batch started by `lock`.
    fn unlock(&mut self) {}
}

// ============================================================================
// PixmapRgba32: non-premultiplied RGBA, 8 bits per channel
// ============================================================================

const BPP: usize = 4; // bytes per pixel

/// Owned RGBA32 surface (4 bytes per pixel, R=0, G=1, B=2, A=3).
///
/// Packed form is `0xRRGGBBAA`.
#[derive(Debug, Clone)]
pub struct PixmapRgba32 {
    rbuf: RenderingBuffer,
    clip: Option<Rect>,
    lock_depth: u32,
    lock_count: u32,
}

impl PixmapRgba32 {
    /// Transparent-black pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            rbuf: RenderingBuffer::new(width, height, BPP),
            clip: None,
            lock_depth: 0,
            lock_count: 0,
        }
    }

    /// Clear the entire buffer to a solid color.
    pub fn fill(&mut self, c: Rgba8) {
        self.rbuf.fill(&[c.r, c.g, c.b, c.a]);
    }

    /// Restrict writes to `clip`, or lift the restriction with `None`.
    pub fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.rbuf.as_bytes()
    }

    /// Nesting depth of currently open lock scopes.
    pub fn lock_depth(&self) -> u32 {
        self.lock_depth
    }

    /// Total number of lock scopes ever opened.
    pub fn lock_count(&self) -> u32 {
        self.lock_count
    }
}

impl Surface for PixmapRgba32 {
    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn clip_rect(&self) -> Rect {
        let bounds = Rect::new(0, 0, self.width() as i32, self.height() as i32);
        match self.clip {
            Some(c) => bounds
                .intersect(&c.normalize())
                .unwrap_or(Rect::empty_at(0, 0)),
            None => bounds,
        }
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> Rgba8 {
        let p = self.rbuf.pix_slice(x as u32, y as u32);
        Rgba8::new(p[0], p[1], p[2], p[3])
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgba8) {
        let p = self.rbuf.pix_slice_mut(x as u32, y as u32);
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
        p[3] = c.a;
    }

    fn set_hline(&mut self, x: i32, y: i32, len: u32, c: Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let start = x as usize * BPP;
        for p in row[start..start + len as usize * BPP].chunks_exact_mut(BPP) {
            p.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    fn map_rgb(&self, c: Rgba8) -> u32 {
        c.to_u32()
    }

    fn unmap_rgb(&self, pixel: u32) -> Rgba8 {
        Rgba8::from_u32(pixel)
    }

    fn lock(&mut self) {
        self.lock_depth += 1;
        self.lock_count += 1;
    }

    fn unlock(&mut self) {
        self.lock_depth = self.lock_depth.saturating_sub(1);
    }
}
