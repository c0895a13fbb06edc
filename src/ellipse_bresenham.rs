//! Midpoint ellipse stepping.
//!
//! The two-region midpoint algorithm walks the first quadrant of an
//! axis-aligned ellipse with integer radii, one column per step in the
//! shallow region and one row per step in the steep region. Mirroring the
//! widest column offset reached on every row offset `dy` across both axes
//! gives the whole ellipse.
//!
//! Rather than walking all `ry` rows, each decision of the walk is solved
//! for directly: the shallow region follows the midpoint test exactly, and
//! the steep region climbs at most one column per row from where the
//! regions meet. Any single row is answered in `O(log r)` without
//! allocating, so radii far larger than the target surface cost nothing.

// ============================================================================
// EllipseSpans
// ============================================================================

/// Largest radius accepted; a rect with an `i32` size never exceeds it and
/// the midpoint terms stay inside `i128`.
const MAX_RADIUS: i32 = i32::MAX / 2;

/// Per-row half-widths of a midpoint ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipseSpans {
    rx: i64,
    ry: i64,
    // First column of the steep region.
    switch_x: i64,
    // Row the steep region starts on.
    switch_y: i64,
    // Lowest row the shallow region still touches.
    shallow_end: i64,
}

impl EllipseSpans {
    /// Set up the ellipse with radii `rx`, `ry` (negative radii are treated
    /// as zero).
    pub fn new(rx: i32, ry: i32) -> Self {
        let rx = rx.clamp(0, MAX_RADIUS) as i64;
        let ry = ry.clamp(0, MAX_RADIUS) as i64;
        let mut s = Self {
            rx,
            ry,
            switch_x: 0,
            switch_y: ry,
            shallow_end: ry,
        };
        if rx == 0 || ry == 0 {
            return s;
        }

        let (a2, b2) = s.squares();
        let x1 = first_true(0, rx + 1, |x| b2 * x as i128 >= a2 * s.row_at(x) as i128);
        s.switch_x = x1;
        if x1 > 0 {
            let before = s.row_at(x1 - 1);
            s.switch_y = s.row_at(x1).max(before - 1);
            s.shallow_end = before;
        }
        s
    }

    /// Horizontal radius.
    pub fn rx(&self) -> i32 {
        self.rx as i32
    }

    /// Vertical radius.
    pub fn ry(&self) -> i32 {
        self.ry as i32
    }

    /// Half-width at row offset `dy` from the center, `None` outside the
    /// ellipse.
    pub fn half_width(&self, dy: i64) -> Option<i32> {
        if dy < 0 || dy > self.ry {
            return None;
        }
        if self.rx == 0 || self.ry == 0 || dy == 0 {
            return Some(self.rx as i32);
        }

        let x1 = self.switch_x;
        let mut h = -1;
        if x1 > 0 && dy >= self.shallow_end {
            h = self.shallow_at(dy).min(x1 - 1);
        }
        if dy <= self.switch_y {
            let steep = self.steep_at(dy).min(x1 + (self.switch_y - dy));
            h = h.max(steep.max(x1));
        }
        Some(h.max(0) as i32)
    }

    fn squares(&self) -> (i128, i128) {
        let rx = self.rx as i128;
        let ry = self.ry as i128;
        (rx * rx, ry * ry)
    }

    /// Row the shallow region sits on at column `x`, `-1` once past the
    /// ellipse.
    fn row_at(&self, x: i64) -> i64 {
        let (a2, b2) = self.squares();
        let lhs = 4 * b2 * (x as i128) * (x as i128);
        last_true(self.ry, |y| {
            let t = 2 * y as i128 - 1;
            lhs + a2 * t * t < 4 * a2 * b2
        })
    }

    /// Widest column the shallow region reaches on row `dy`.
    fn shallow_at(&self, dy: i64) -> i64 {
        let (a2, b2) = self.squares();
        let t = 2 * dy as i128 - 1;
        let rhs = 4 * a2 * b2 - a2 * t * t;
        last_true(self.rx, |x| 4 * b2 * (x as i128) * (x as i128) < rhs)
    }

    /// Widest column the steep region's midpoint test allows on row `dy`.
    fn steep_at(&self, dy: i64) -> i64 {
        let (a2, b2) = self.squares();
        let rhs = 4 * a2 * b2 - 4 * a2 * (dy as i128) * (dy as i128);
        last_true(self.rx + 1, |x| {
            let t = 2 * x as i128 - 1;
            b2 * t * t <= rhs
        })
    }
}

/// Largest `v` in `0..=hi` with `pred(v)`, for a predicate that holds up to
/// some point and fails after it; `-1` if it never holds.
fn last_true(hi: i64, pred: impl Fn(i64) -> bool) -> i64 {
    let (mut lo, mut hi) = (-1, hi);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if pred(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Smallest `v` in `lo..=hi` with `pred(v)`, for a predicate that fails up
/// to some point and holds after it; `hi` if it holds nowhere before.
fn first_true(lo: i64, hi: i64, pred: impl Fn(i64) -> bool) -> i64 {
    let (mut lo, mut hi) = (lo, hi);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
