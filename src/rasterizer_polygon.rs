//! Scanline polygon rasterizer.
//!
//! Non-anti-aliased, inclusive fill: for every row between the top and
//! bottom vertex, edge crossings are computed with integer arithmetic,
//! sorted, and filled pairwise including both ends. Horizontal edges are
//! drawn in a second pass so that rows lying on them are never left out.
//! The result covers exactly the pixels the polygon's closed width-1
//! outline covers for shapes made of horizontal and vertical edges.

use crate::basics::clamp_i32;
use crate::color::Rgba8;
use crate::pixfmt_rgba::Surface;
use crate::renderer_base::RendererBase;
use crate::renderer_primitives::RendererPrimitives;

// ============================================================================
// RasterizerPolygon
// ============================================================================

/// A closed polygon on the pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterizerPolygon {
    points: Vec<(i32, i32)>,
}

impl RasterizerPolygon {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    /// Fill the polygon interior including its boundary.
    pub fn fill<S: Surface + ?Sized>(&self, ren: &mut RendererBase<'_, S>, c: Rgba8) {
        let pts = &self.points;
        let Some(&(x0, y0)) = pts.first() else {
            return;
        };
        let (mut minx, mut maxx, mut miny, mut maxy) = (x0, x0, y0, y0);
        for &(x, y) in pts {
            minx = minx.min(x);
            maxx = maxx.max(x);
            miny = miny.min(y);
            maxy = maxy.max(y);
        }

        // Zero height: one span over the full horizontal extent.
        if miny == maxy {
            ren.copy_hline(minx, miny, maxx, c);
            return;
        }

        let cb = *ren.clip_box();
        let n = pts.len();
        let mut xs: Vec<i64> = Vec::with_capacity(n);
        for y in miny.max(cb.y1)..=maxy.min(cb.y2) {
            xs.clear();
            for i in 0..n {
                let prev = if i == 0 { n - 1 } else { i - 1 };
                let (xa, ya) = pts[prev];
                let (xb, yb) = pts[i];
                let ((x1, y1), (x2, y2)) = if ya < yb {
                    ((xa, ya), (xb, yb))
                } else if ya > yb {
                    ((xb, yb), (xa, ya))
                } else {
                    continue;
                };
                if (y >= y1 && y < y2) || (y == maxy && y2 == maxy) {
                    // Both factors span up to 2^32, so the product needs 128 bits.
                    let (x1, y1, x2, y2) = (x1 as i128, y1 as i128, x2 as i128, y2 as i128);
                    xs.push(((y as i128 - y1) * (x2 - x1) / (y2 - y1) + x1) as i64);
                }
            }
            xs.sort_unstable();
            for pair in xs.chunks_exact(2) {
                ren.copy_hline(clamp_i32(pair[0]), y, clamp_i32(pair[1]), c);
            }
        }

        for i in 0..n {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            let (x, y) = pts[i];
            if miny < y && y < maxy && pts[prev].1 == y {
                ren.copy_hline(x, y, pts[prev].0, c);
            }
        }
    }

    /// Trace the closed outline with lines `width` pixels thick.
    pub fn outline<S: Surface + ?Sized>(&self, ren: &mut RendererBase<'_, S>, c: Rgba8, width: i32) {
        RendererPrimitives::new(ren, c).polyline(&self.points, true, width);
    }
}
