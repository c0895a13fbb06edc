//! Ellipse, circle and arc renderer.
//!
//! Shapes are inscribed in an integer rect. The outer boundary comes from
//! [`EllipseSpans`]; for outlines an inner ellipse with both radii reduced
//! by the width is solved the same way and only the ring between the two
//! is filled per row. Rows are worked out on demand, so only the rows
//! inside the clip box cost anything. Arcs emit the ring pixel by pixel,
//! keeping those whose parametric angle lies in the sweep.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4, TAU};

use crate::basics::{clamp_i32, Rect};
use crate::color::Rgba8;
use crate::ellipse_bresenham::EllipseSpans;
use crate::pixfmt_rgba::Surface;
use crate::renderer_base::RendererBase;

// ============================================================================
// EllipseRows
// ============================================================================

/// Row-by-row layout of an ellipse (or ring) inscribed in a rect.
///
/// The center column is `x + w/2`; for even widths the right half is one
/// column shorter (`xoff`), and likewise for rows. Coordinates are kept in
/// `i64` since the center of a rect near the edge of the `i32` range lies
/// outside it.
#[derive(Debug, Clone)]
struct EllipseRows {
    top: i64,
    height: i64,
    cx: i64,
    cy: i64,
    xoff: i64,
    yoff: i64,
    // Twice the vertical center, to split rows into upper and lower halves.
    center2: i64,
    outer: EllipseSpans,
    inner: Option<EllipseSpans>,
}

impl EllipseRows {
    fn new(r: &Rect, width: i32) -> Self {
        let rx = r.w / 2;
        let ry = r.h / 2;
        let inner = if width > 0 && width < rx.min(ry) {
            Some(EllipseSpans::new(rx - width, ry - width))
        } else {
            None
        };
        Self {
            top: r.y as i64,
            height: r.h.max(0) as i64,
            cx: r.x as i64 + rx as i64,
            cy: r.y as i64 + ry as i64,
            xoff: i64::from(r.w % 2 == 0),
            yoff: i64::from(r.h % 2 == 0),
            center2: 2 * r.y as i64 + r.h as i64 - 1,
            outer: EllipseSpans::new(rx, ry),
            inner,
        }
    }

    /// Half-width of `spans` on rect row `row`, `-1` where it has none.
    fn half_at(&self, spans: &EllipseSpans, row: i64) -> i64 {
        if row < 0 || row >= self.height {
            return -1;
        }
        let y = self.top + row;
        [self.cy - y, y - self.cy + self.yoff]
            .into_iter()
            .filter_map(|dy| spans.half_width(dy))
            .map(i64::from)
            .max()
            .unwrap_or(-1)
    }

    fn outer_at(&self, row: i64) -> i64 {
        let h = self.half_at(&self.outer, row);
        // Even widths have two center columns; a row never gets narrower.
        if h >= 0 {
            h.max(self.xoff)
        } else {
            h
        }
    }

    fn inner_at(&self, row: i64) -> i64 {
        match &self.inner {
            Some(spans) => self.half_at(spans, row),
            None => -1,
        }
    }

    /// Emit the spans of every row in `y1..=y2`, at most two per row.
    fn for_each_span(&self, y1: i32, y2: i32, mut emit: impl FnMut(i32, i32, i32)) {
        let first = (y1 as i64 - self.top).max(0);
        let last = (y2 as i64 - self.top).min(self.height - 1);
        for row in first..=last {
            let ho = self.outer_at(row);
            if ho < 0 {
                continue;
            }
            let y = clamp_i32(self.top + row);
            let left = self.cx - ho;
            let right = self.cx + ho - self.xoff;
            if right < left {
                continue;
            }

            let hi = self.inner_at(row);
            if hi < 0 {
                emit(y, clamp_i32(left), clamp_i32(right));
                continue;
            }

            // Keep the ring 8-connected: the hole on this row may not reach
            // past the outer edge of the next row outward.
            let dir = 2 * (self.top + row) - self.center2;
            let ho_out = if dir < 0 {
                self.outer_at(row - 1)
            } else if dir > 0 {
                self.outer_at(row + 1)
            } else {
                self.outer_at(row - 1).min(self.outer_at(row + 1))
            };
            let e = hi.min(ho_out).min(ho - 1);
            let il = self.cx - e;
            let ir = self.cx + e - self.xoff;
            if il > ir {
                emit(y, clamp_i32(left), clamp_i32(right));
            } else {
                emit(y, clamp_i32(left), clamp_i32(il - 1));
                emit(y, clamp_i32(ir + 1), clamp_i32(right));
            }
        }
    }

    /// The four pixels where the ellipse crosses its diagonals, with their
    /// angles, when they sit just outside the outer spans.
    ///
    /// When a side of the rect is even, the stepped boundary can cut the
    /// diagonal one pixel short of where the traced curve passes; only then
    /// are these pixels added.
    fn diagonal_pixels(&self) -> Option<[(i64, i64, f64); 4]> {
        let dx = (self.outer.rx() as f64 * FRAC_1_SQRT_2) as i64;
        let dy = (self.outer.ry() as f64 * FRAC_1_SQRT_2) as i64;
        let (x, y) = (self.cx + dx, self.cy + dy);
        let ho = self.outer_at(y - self.top);
        if ho < 0 || dx != ho - self.xoff + 1 {
            return None;
        }
        let mx = 2 * self.cx - self.xoff - x;
        let my = 2 * self.cy - self.yoff - y;
        Some([
            (x, y, -FRAC_PI_4),
            (x, my, FRAC_PI_4),
            (mx, my, 3.0 * FRAC_PI_4),
            (mx, y, -3.0 * FRAC_PI_4),
        ])
    }
}

// ============================================================================
// ArcSweep
// ============================================================================

/// A counter-clockwise angular range (y axis pointing up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    start: f64,
    sweep: f64,
}

impl ArcSweep {
    /// Sweep from `start` to `stop` radians. A stop below the start is
    /// moved up by whole turns; a sweep of a full turn or more covers
    /// everything.
    pub fn new(start: f64, stop: f64) -> Self {
        let sweep = if stop >= start {
            stop - start
        } else {
            (stop - start).rem_euclid(TAU)
        };
        Self { start, sweep }
    }

    pub fn is_full(&self) -> bool {
        self.sweep >= TAU
    }

    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    pub fn contains(&self, angle: f64) -> bool {
        if self.is_full() {
            return true;
        }
        let rel = (angle - self.start).rem_euclid(TAU);
        rel <= self.sweep + 1e-9 || rel >= TAU - 1e-9
    }
}

// ============================================================================
// RendererEllipse
// ============================================================================

/// Solid ellipse and arc renderer.
pub struct RendererEllipse<'r, 'a, S: Surface + ?Sized> {
    ren: &'r mut RendererBase<'a, S>,
    color: Rgba8,
}

impl<'r, 'a, S: Surface + ?Sized> RendererEllipse<'r, 'a, S> {
    pub fn new(ren: &'r mut RendererBase<'a, S>, color: Rgba8) -> Self {
        Self { ren, color }
    }

    /// Draw the ellipse inscribed in `r`: filled when `width == 0`, a ring
    /// `width` pixels thick otherwise. A width that reaches either radius
    /// fills. Negative widths draw nothing.
    ///
    /// A rect one pixel wide or high draws a straight line from its origin
    /// to the far edge, end included.
    pub fn ellipse(&mut self, r: Rect, width: i32) {
        if width < 0 || r.w <= 0 || r.h <= 0 {
            return;
        }
        let c = self.color;
        match (r.w, r.h) {
            (1, 1) => self.ren.copy_pixel(r.x, r.y, c),
            (1, _) => self.ren.copy_vline(r.x, r.y, r.y.saturating_add(r.h), c),
            (_, 1) => self.ren.copy_hline(r.x, r.y, r.x.saturating_add(r.w), c),
            _ => {
                let rows = EllipseRows::new(&r, width);
                let cb = *self.ren.clip_box();
                let ren = &mut *self.ren;
                rows.for_each_span(cb.y1, cb.y2, |y, x1, x2| ren.copy_hline(x1, y, x2, c));
            }
        }
    }

    /// Draw the part of the ring inscribed in `r` whose parametric angle
    /// lies in `sweep`. `width <= 0` draws nothing; a width reaching the
    /// radii fills the sector.
    pub fn arc(&mut self, r: Rect, sweep: ArcSweep, width: i32) {
        if width <= 0 || r.w <= 0 || r.h <= 0 {
            return;
        }
        let c = self.color;
        let rows = EllipseRows::new(&r, width);
        let cb = *self.ren.clip_box();
        let ren = &mut *self.ren;

        if let Some(corners) = rows.diagonal_pixels() {
            for (x, y, angle) in corners {
                if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                    if sweep.contains(angle) {
                        ren.copy_pixel(x, y, c);
                    }
                }
            }
        }

        if sweep.is_full() {
            rows.for_each_span(cb.y1, cb.y2, |y, x1, x2| ren.copy_hline(x1, y, x2, c));
            return;
        }

        let fx = r.x as f64 + (r.w - 1) as f64 / 2.0;
        let fy = r.y as f64 + (r.h - 1) as f64 / 2.0;
        let sx = ((r.w - 1) as f64 / 2.0).max(0.5);
        let sy = ((r.h - 1) as f64 / 2.0).max(0.5);
        rows.for_each_span(cb.y1, cb.y2, |y, x1, x2| {
            let ny = -(y as f64 - fy) / sy;
            for x in x1.max(cb.x1)..=x2.min(cb.x2) {
                let nx = (x as f64 - fx) / sx;
                if sweep.contains(ny.atan2(nx)) {
                    ren.copy_pixel(x, y, c);
                }
            }
        });
    }
}
