//! Base renderer with clipping.
//!
//! Wraps a borrowed [`Surface`] with a clip box (the surface's clip rect
//! intersected with its bounds) so every write made through it lands inside
//! the visible area, and records what it wrote for the bounding rect.
//!
//! The surface is locked for as long as the renderer lives.

use crate::basics::{ClipBox, Rect};
use crate::bounding_rect::DrawnArea;
use crate::color::Rgba8;
use crate::pixfmt_rgba::Surface;

// ============================================================================
// RendererBase: clipped writes with bounds tracking
// ============================================================================

/// Clipping, tracking writer over one surface for one draw call.
pub struct RendererBase<'a, S: Surface + ?Sized> {
    surf: &'a mut S,
    clip_box: ClipBox,
    drawn: DrawnArea,
}

impl<'a, S: Surface + ?Sized> RendererBase<'a, S> {
    /// Lock `surf` and compute the effective clip box.
    pub fn new(surf: &'a mut S) -> Self {
        let mut clip_box = ClipBox::from_rect(&surf.clip_rect());
        let bounds = ClipBox::new(0, 0, surf.width() as i32 - 1, surf.height() as i32 - 1);
        if !clip_box.clip(&bounds) {
            clip_box = ClipBox::new(1, 1, 0, 0);
        }
        surf.lock();
        Self {
            surf,
            clip_box,
            drawn: DrawnArea::new(),
        }
    }

    pub fn clip_box(&self) -> &ClipBox {
        &self.clip_box
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.clip_box.hit_test(x, y)
    }

    /// Pixels written so far.
    pub fn drawn(&self) -> &DrawnArea {
        &self.drawn
    }

    /// Bounding rect of everything written, anchored at `anchor` if nothing
    /// was.
    pub fn bounding_rect(&self, anchor: (i32, i32)) -> Rect {
        self.drawn.to_rect(anchor)
    }

    // ========================================================================
    // Rendering operations (clip then delegate)
    // ========================================================================

    /// Overwrite a single pixel (clipped).
    #[inline]
    pub fn copy_pixel(&mut self, x: i32, y: i32, c: Rgba8) {
        if self.inbox(x, y) {
            self.surf.set_pixel(x, y, c);
            self.drawn.add_pixel(x, y);
        }
    }

    /// Write `c` with fractional coverage `cover` (clipped).
    ///
    /// With `blend` the existing pixel is interpolated toward `c`; without
    /// it the pixel is replaced by `c` scaled by `cover`. Zero coverage
    /// writes nothing.
    pub fn blend_pixel(&mut self, x: i32, y: i32, c: Rgba8, cover: f64, blend: bool) {
        if cover <= 0.0 || !self.inbox(x, y) {
            return;
        }
        let out = if cover >= 1.0 {
            c
        } else if blend {
            self.surf.get_pixel(x, y).lerp(c, cover)
        } else {
            c.scale(cover)
        };
        self.surf.set_pixel(x, y, out);
        self.drawn.add_pixel(x, y);
    }

    /// Overwrite row `y` from `x1` to `x2` inclusive, in either order
    /// (clipped).
    pub fn copy_hline(&mut self, x1: i32, y: i32, x2: i32, c: Rgba8) {
        let (mut x1, mut x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        if y > self.clip_box.y2 || y < self.clip_box.y1 {
            return;
        }
        if x1 > self.clip_box.x2 || x2 < self.clip_box.x1 {
            return;
        }
        if x1 < self.clip_box.x1 {
            x1 = self.clip_box.x1;
        }
        if x2 > self.clip_box.x2 {
            x2 = self.clip_box.x2;
        }
        self.surf.set_hline(x1, y, (x2 - x1 + 1) as u32, c);
        self.drawn.add_hspan(x1, x2, y);
    }

    /// Overwrite column `x` from `y1` to `y2` inclusive, in either order
    /// (clipped).
    pub fn copy_vline(&mut self, x: i32, y1: i32, y2: i32, c: Rgba8) {
        let (mut y1, mut y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        if x > self.clip_box.x2 || x < self.clip_box.x1 {
            return;
        }
        if y1 > self.clip_box.y2 || y2 < self.clip_box.y1 {
            return;
        }
        if y1 < self.clip_box.y1 {
            y1 = self.clip_box.y1;
        }
        if y2 > self.clip_box.y2 {
            y2 = self.clip_box.y2;
        }
        for y in y1..=y2 {
            self.surf.set_pixel(x, y, c);
        }
        self.drawn.add_hspan(x, x, y1);
        self.drawn.add_hspan(x, x, y2);
    }
}

impl<S: Surface + ?Sized> Drop for RendererBase<'_, S> {
    fn drop(&mut self) {
        self.surf.unlock();
    }
}
