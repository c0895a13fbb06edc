//! 16-bit packed RGB565 pixmap.
//!
//! The buffer stores no alpha channel, so reads always return `a = 255`
//! and channel precision is 5/6/5 bits. Pixels are stored little-endian.

use crate::basics::Rect;
use crate::color::Rgba8;
use crate::pixfmt_rgba::Surface;
use crate::rendering_buffer::RenderingBuffer;

/// Bytes per pixel for RGB565.
const BPP: usize = 2;

#[inline]
fn pack565(c: Rgba8) -> u16 {
    ((c.r as u16 >> 3) << 11) | ((c.g as u16 >> 2) << 5) | (c.b as u16 >> 3)
}

#[inline]
fn unpack565(p: u16) -> Rgba8 {
    let r = ((p >> 11) & 0x1F) as u8;
    let g = ((p >> 5) & 0x3F) as u8;
    let b = (p & 0x1F) as u8;
    // Replicate the high bits so full-scale channels read back as 255.
    Rgba8::new_opaque((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
}

/// Owned RGB565 surface.
///
/// Packed form is the native 16-bit value `rrrrrggggggbbbbb`.
#[derive(Debug, Clone)]
pub struct PixmapRgb565 {
    rbuf: RenderingBuffer,
    clip: Option<Rect>,
    lock_depth: u32,
}

impl PixmapRgb565 {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            rbuf: RenderingBuffer::new(width, height, BPP),
            clip: None,
            lock_depth: 0,
        }
    }

    pub fn fill(&mut self, c: Rgba8) {
        self.rbuf.fill(&pack565(c).to_le_bytes());
    }

    pub fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    pub fn data(&self) -> &[u8] {
        self.rbuf.as_bytes()
    }

    pub fn lock_depth(&self) -> u32 {
        self.lock_depth
    }
}

impl Surface for PixmapRgb565 {
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

    fn get_pixel(&self, x: i32, y: i32) -> Rgba8 {
        let p = self.rbuf.pix_slice(x as u32, y as u32);
        unpack565(u16::from_le_bytes([p[0], p[1]]))
    }

    fn set_pixel(&mut self, x: i32, y: i32, c: Rgba8) {
        self.rbuf
            .pix_slice_mut(x as u32, y as u32)
            .copy_from_slice(&pack565(c).to_le_bytes());
    }

    fn map_rgb(&self, c: Rgba8) -> u32 {
        pack565(c) as u32
    }

    fn unmap_rgb(&self, pixel: u32) -> Rgba8 {
        unpack565(pixel as u16)
    }

    fn lock(&mut self) {
        self.lock_depth += 1;
    }

    fn unlock(&mut self) {
        self.lock_depth = self.lock_depth.saturating_sub(1);
    }
}
