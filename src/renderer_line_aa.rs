//! Anti-aliased line renderer.
//!
//! Coverage-based, one pixel wide. The line is stepped along its dominant
//! axis; on each step the ideal minor coordinate is split between the two
//! pixels it falls between, weighted by distance. Steps at the ends get
//! partial coverage from the fractional endpoint position, and the line is
//! treated as reaching one full pixel past its end point so that an integer
//! end point is covered completely.
//!
//! The computation only depends on the unordered pair of endpoints, so
//! A to B and B to A produce the same pixels.

use crate::basics::{iceil, ifloor, Point};
use crate::color::Rgba8;
use crate::pixfmt_rgba::Surface;
use crate::renderer_base::RendererBase;
use crate::renderer_primitives::RendererPrimitives;

// ============================================================================
// RendererLineAa
// ============================================================================

/// Anti-aliased line renderer with a current color and blend mode.
pub struct RendererLineAa<'r, 'a, S: Surface + ?Sized> {
    ren: &'r mut RendererBase<'a, S>,
    color: Rgba8,
    blend: bool,
}

impl<'r, 'a, S: Surface + ?Sized> RendererLineAa<'r, 'a, S> {
    pub fn new(ren: &'r mut RendererBase<'a, S>, color: Rgba8, blend: bool) -> Self {
        Self { ren, color, blend }
    }

    /// Draw an anti-aliased line from `p1` to `p2`.
    pub fn line(&mut self, p1: Point, p2: Point) {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;

        if dx == 0.0 && dy == 0.0 {
            let (x, y) = p1.to_pixel();
            self.ren.copy_pixel(x, y, self.color);
            return;
        }

        if is_grid_aligned(p1, p2) {
            // Exact pixel runs: no coverage to distribute.
            let (x1, y1) = p1.to_pixel();
            let (x2, y2) = p2.to_pixel();
            RendererPrimitives::new(self.ren, self.color).line(x1, y1, x2, y2);
            return;
        }

        if dx.abs() >= dy.abs() {
            let (a, b) = if p1.x <= p2.x { (p1, p2) } else { (p2, p1) };
            self.run(a.x, a.y, b.x, dy / dx, false);
        } else {
            let (a, b) = if p1.y <= p2.y { (p1, p2) } else { (p2, p1) };
            self.run(a.y, a.x, b.y, dx / dy, true);
        }
    }

    /// Draw connected anti-aliased segments through `points`.
    pub fn polyline(&mut self, points: &[Point], closed: bool) {
        for w in points.windows(2) {
            self.line(w[0], w[1]);
        }
        if closed && points.len() > 2 {
            if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
                self.line(last, first);
            }
        }
    }

    // Step the major axis from `a0` to `a1` (a0 <= a1); `m0` is the minor
    // coordinate at `a0` and `slope` the minor change per major unit.
    fn run(&mut self, a0: f64, m0: f64, a1: f64, slope: f64, ver: bool) {
        let cb = *self.ren.clip_box();
        let (cmin, cmax) = if ver { (cb.y1, cb.y2) } else { (cb.x1, cb.x2) };
        let first = ifloor(a0).max(cmin);
        let last = iceil(a1).min(cmax);
        let end = a1 + 1.0;

        for a in first..=last {
            let af = a as f64;
            let cover = (af + 1.0).min(end) - af.max(a0);
            if cover <= 0.0 {
                continue;
            }
            let cover = cover.min(1.0);
            let m = m0 + slope * (af - a0);
            let m_lo = m.floor();
            let frac = m - m_lo;
            let m_lo = m_lo as i32;
            self.plot(a, m_lo, cover * (1.0 - frac), ver);
            self.plot(a, m_lo.saturating_add(1), cover * frac, ver);
        }
    }

    #[inline]
    fn plot(&mut self, a: i32, m: i32, cover: f64, ver: bool) {
        let (x, y) = if ver { (m, a) } else { (a, m) };
        self.ren.blend_pixel(x, y, self.color, cover, self.blend);
    }
}

/// Integer endpoints on a horizontal, vertical or 45 degree line.
fn is_grid_aligned(p1: Point, p2: Point) -> bool {
    let integral = [p1.x, p1.y, p2.x, p2.y].iter().all(|v| v.fract() == 0.0);
    if !integral {
        return false;
    }
    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();
    dx == 0.0 || dy == 0.0 || dx == dy
}
