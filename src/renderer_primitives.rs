//! Solid line primitives renderer.
//!
//! Draws single-pixel and thick Bresenham lines and polylines directly into
//! a [`RendererBase`] without anti-aliasing. Both endpoints of every line
//! are drawn.

use crate::color::Rgba8;
use crate::dda_line::LineBresenhamInterpolator;
use crate::pixfmt_rgba::Surface;
use crate::renderer_base::RendererBase;

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Solid line renderer with a current color and pen position.
pub struct RendererPrimitives<'r, 'a, S: Surface + ?Sized> {
    ren: &'r mut RendererBase<'a, S>,
    color: Rgba8,
    curr_x: i32,
    curr_y: i32,
}

impl<'r, 'a, S: Surface + ?Sized> RendererPrimitives<'r, 'a, S> {
    pub fn new(ren: &'r mut RendererBase<'a, S>, color: Rgba8) -> Self {
        Self {
            ren,
            color,
            curr_x: 0,
            curr_y: 0,
        }
    }

    /// Draw a one-pixel line from (x1,y1) to (x2,y2), both ends included.
    ///
    /// Only the part of the major axis inside the clip box is stepped, but
    /// every pixel is computed from the full line.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let c = self.color;
        if y1 == y2 {
            self.ren.copy_hline(x1, y1, x2, c);
            return;
        }
        if x1 == x2 {
            self.ren.copy_vline(x1, y1, y2, c);
            return;
        }

        let li = LineBresenhamInterpolator::new(x1, y1, x2, y2);
        let cb = *self.ren.clip_box();
        let (lo, hi) = li.major_range();
        let (cmin, cmax) = if li.is_ver() {
            (cb.y1, cb.y2)
        } else {
            (cb.x1, cb.x2)
        };
        for a in lo.max(cmin)..=hi.min(cmax) {
            let (x, y) = li.pixel_at(a);
            self.ren.copy_pixel(x, y, c);
        }
    }

    /// Draw a line `width` pixels thick.
    ///
    /// The line is repeated at offsets 0, +1, -1, +2, -2, ... perpendicular
    /// to its dominant axis: along y for x-major lines, along x otherwise
    /// (45 degree and zero-length lines included). `width <= 0` draws
    /// nothing.
    pub fn thick_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: i32) {
        if width <= 0 {
            return;
        }
        self.line(x1, y1, x2, y2);
        if width == 1 {
            return;
        }

        let dx = (x2 as i64 - x1 as i64).abs();
        let dy = (y2 as i64 - y1 as i64).abs();
        let (xinc, yinc) = if dx > dy { (0, 1) } else { (1, 0) };

        for k in 1..width {
            let off = if k % 2 == 1 { (k + 1) / 2 } else { -(k / 2) };
            let (ox, oy) = (off * xinc, off * yinc);
            self.line(
                x1.saturating_add(ox),
                y1.saturating_add(oy),
                x2.saturating_add(ox),
                y2.saturating_add(oy),
            );
        }
    }

    /// Set the current pen position.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.curr_x = x;
        self.curr_y = y;
    }

    /// Draw a thick line from the pen position to (x,y) and move the pen
    /// there.
    pub fn line_to(&mut self, x: i32, y: i32, width: i32) {
        self.thick_line(self.curr_x, self.curr_y, x, y, width);
        self.curr_x = x;
        self.curr_y = y;
    }

    /// Draw consecutive segments through `points`, adding the segment from
    /// the last point back to the first when `closed`.
    pub fn polyline(&mut self, points: &[(i32, i32)], closed: bool, width: i32) {
        let Some(&(x0, y0)) = points.first() else {
            return;
        };
        self.move_to(x0, y0);
        for &(x, y) in &points[1..] {
            self.line_to(x, y, width);
        }
        if closed && points.len() > 2 {
            self.line_to(x0, y0, width);
        }
    }

    pub fn ren(&self) -> &RendererBase<'a, S> {
        &*self.ren
    }
}
