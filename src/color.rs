//! Color types and color resolution.
//!
//! Every draw call resolves its color argument exactly once into an
//! [`Rgba8`], which is what the renderers hand to the surface.

use crate::pixfmt_rgba::Surface;

// ============================================================================
// Rgba8
// ============================================================================

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u8 = 255;

    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    /// `0xRRGGBBAA`.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    pub const fn from_u32(v: u32) -> Self {
        let [r, g, b, a] = v.to_be_bytes();
        Self::new(r, g, b, a)
    }

    /// Linear interpolation toward `c` by coverage `k` in `[0, 1]`, every
    /// channel (alpha included) rounded to nearest.
    ///
    /// `result = self * (1 - k) + c * k`
    pub fn lerp(self, c: Rgba8, k: f64) -> Self {
        if k <= 0.0 {
            return self;
        }
        if k >= 1.0 {
            return c;
        }
        #[inline]
        fn mix(a: u8, b: u8, k: f64) -> u8 {
            (a as f64 * (1.0 - k) + b as f64 * k).round() as u8
        }
        Self {
            r: mix(self.r, c.r, k),
            g: mix(self.g, c.g, k),
            b: mix(self.b, c.b, k),
            a: mix(self.a, c.a, k),
        }
    }

    /// Scale the color channels by coverage `k`, leaving alpha alone.
    ///
    /// This is the result of an unblended coverage write: the color as seen
    /// against black.
    pub fn scale(self, k: f64) -> Self {
        if k >= 1.0 {
            return self;
        }
        let k = k.max(0.0);
        let s = |v: u8| (v as f64 * k).round() as u8;
        Self {
            r: s(self.r),
            g: s(self.g),
            b: s(self.b),
            a: self.a,
        }
    }
}

// ============================================================================
// ColorSpec
// ============================================================================

/// The color representations a draw call accepts.
///
/// Strings of any kind are not representable here; the dynamic argument
/// layer rejects them before a `ColorSpec` is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Opaque three-channel color.
    Rgb(u8, u8, u8),
    /// Four-channel color.
    Rgba(u8, u8, u8, u8),
    /// An integer already packed in the target surface's pixel format.
    Mapped(u32),
    /// A color value object.
    Color(Rgba8),
}

impl ColorSpec {
    /// Resolve to the canonical RGBA for `surface`.
    pub fn resolve<S: Surface + ?Sized>(&self, surface: &S) -> Rgba8 {
        match *self {
            ColorSpec::Rgb(r, g, b) => Rgba8::new_opaque(r, g, b),
            ColorSpec::Rgba(r, g, b, a) => Rgba8::new(r, g, b, a),
            ColorSpec::Mapped(p) => surface.unmap_rgb(p),
            ColorSpec::Color(c) => c,
        }
    }
}

impl From<Rgba8> for ColorSpec {
    fn from(c: Rgba8) -> Self {
        ColorSpec::Color(c)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for ColorSpec {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        ColorSpec::Rgba(r, g, b, a)
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<[u8; 4]> for ColorSpec {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        ColorSpec::Rgba(r, g, b, a)
    }
}

impl From<u32> for ColorSpec {
    fn from(p: u32) -> Self {
        ColorSpec::Mapped(p)
    }
}
