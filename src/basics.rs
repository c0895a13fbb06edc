//! Foundation types shared by every rasterizer.
//!
//! Points carry real-valued coordinates, rects and clip boxes live on the
//! integer pixel grid. The conversion rule from one to the other is
//! truncation toward zero, except for the anti-aliased line renderer which
//! keeps the fractional part as coverage.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Floor a double to the nearest integer toward negative infinity.
#[inline]
pub fn ifloor(v: f64) -> i32 {
    v.floor() as i32
}

/// Ceiling of a double as a signed integer.
#[inline]
pub fn iceil(v: f64) -> i32 {
    v.ceil() as i32
}

/// Truncate a double toward zero, saturating at the `i32` range.
///
/// This is how every solid shape maps a real coordinate onto the grid.
#[inline]
pub fn itrunc(v: f64) -> i32 {
    v as i32
}

/// Narrow a wide intermediate back onto the `i32` grid, saturating.
#[inline]
pub fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

// ============================================================================
// Point
// ============================================================================

/// A real-valued point. Integer inputs convert losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The pixel this point falls on under the truncation rule.
    #[inline]
    pub fn to_pixel(self) -> (i32, i32) {
        (itrunc(self.x), itrunc(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An integer rectangle in origin/size form, the value every draw call
/// returns.
///
/// A rect with `w <= 0` or `h <= 0` is legal and covers no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from real-valued fields by truncation.
    pub fn from_f64(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(itrunc(x), itrunc(y), itrunc(w), itrunc(h))
    }

    /// Zero-area rect anchored at `(x, y)`.
    pub const fn empty_at(x: i32, y: i32) -> Self {
        Self::new(x, y, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Flip negative sizes so the rect covers the same area with `w, h >= 0`.
    pub fn normalize(&self) -> Self {
        let mut r = *self;
        if r.w < 0 {
            r.x = r.x.saturating_add(r.w);
            r.w = r.w.saturating_neg();
        }
        if r.h < 0 {
            r.y = r.y.saturating_add(r.h);
            r.h = r.h.saturating_neg();
        }
        r
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersection, or `None` when the rects do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1)))
        } else {
            None
        }
    }

    /// Corner pixels `(x, y)`, `(x+w-1, y)`, `(x+w-1, y+h-1)`, `(x, y+h-1)`.
    pub fn corners(&self) -> [(i32, i32); 4] {
        let r = self.right() - 1;
        let b = self.bottom() - 1;
        [(self.x, self.y), (r, self.y), (r, b), (self.x, b)]
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, w, h)
    }
}

impl From<((i32, i32), (i32, i32))> for Rect {
    fn from(((x, y), (w, h)): ((i32, i32), (i32, i32))) -> Self {
        Self::new(x, y, w, h)
    }
}

impl From<[i32; 4]> for Rect {
    fn from([x, y, w, h]: [i32; 4]) -> Self {
        Self::new(x, y, w, h)
    }
}

// ============================================================================
// ClipBox
// ============================================================================

/// An inclusive pixel box `x1..=x2`, `y1..=y2`.
///
/// Renderers test writes against this form; a box with `x2 < x1` or
/// `y2 < y1` admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl ClipBox {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Inclusive box covering a rect's pixels.
    pub fn from_rect(r: &Rect) -> Self {
        let r = r.normalize();
        Self::new(r.x, r.y, r.right() - 1, r.bottom() - 1)
    }

    /// Clip to another box. Returns false when the result is empty.
    pub fn clip(&mut self, r: &ClipBox) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}
