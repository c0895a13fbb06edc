//! Bounding rectangle of the pixels a draw call touched.
//!
//! The renderer feeds every pixel or span it actually writes into a
//! [`DrawnArea`]; the draw call then turns it into the `Rect` it returns.

use crate::basics::Rect;

/// Running min/max of written pixel coordinates (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawnArea {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    touched: bool,
}

impl DrawnArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !self.touched
    }

    #[inline]
    pub fn add_pixel(&mut self, x: i32, y: i32) {
        self.add_hspan(x, x, y);
    }

    /// Record pixels `x1..=x2` on row `y`; expects `x1 <= x2`.
    #[inline]
    pub fn add_hspan(&mut self, x1: i32, x2: i32, y: i32) {
        if !self.touched {
            *self = Self {
                x1,
                y1: y,
                x2,
                y2: y,
                touched: true,
            };
            return;
        }
        if x1 < self.x1 {
            self.x1 = x1;
        }
        if x2 > self.x2 {
            self.x2 = x2;
        }
        if y < self.y1 {
            self.y1 = y;
        }
        if y > self.y2 {
            self.y2 = y;
        }
    }

    /// The enclosing rect, or a zero-area rect at `anchor` when nothing was
    /// written.
    pub fn to_rect(&self, anchor: (i32, i32)) -> Rect {
        if self.touched {
            Rect::new(
                self.x1,
                self.y1,
                self.x2 - self.x1 + 1,
                self.y2 - self.y1 + 1,
            )
        } else {
            Rect::empty_at(anchor.0, anchor.1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_anchors() {
        let a = DrawnArea::new();
        assert!(a.is_empty());
        assert_eq!(a.to_rect((7, -3)), Rect::new(7, -3, 0, 0));
    }

    #[test]
    fn test_single_pixel() {
        let mut a = DrawnArea::new();
        a.add_pixel(4, 5);
        assert_eq!(a.to_rect((0, 0)), Rect::new(4, 5, 1, 1));
    }

    #[test]
    fn test_accumulates() {
        let mut a = DrawnArea::new();
        a.add_hspan(3, 9, 2);
        a.add_pixel(1, 6);
        a.add_hspan(2, 4, 0);
        assert_eq!(a.to_rect((100, 100)), Rect::new(1, 0, 9, 7));
    }
}
