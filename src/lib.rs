//! # rasterdraw
//!
//! Immediate-mode drawing of simple shapes into pixel surfaces: lines,
//! anti-aliased lines, polylines, polygons, rects, circles, ellipses and
//! elliptical arcs.
//!
//! Every operation borrows a [`Surface`], writes pixels inside the
//! surface's clip rect, and returns the bounding [`Rect`] of the pixels it
//! actually changed.
//!
//! ## Architecture
//!
//! Drawing goes through three layers:
//!
//! 1. **Surface**: pixel storage and color mapping ([`PixmapRgba32`],
//!    [`PixmapRgb565`], or any [`Surface`] implementation)
//! 2. **Renderers**: clipped pixel and span writes with bounding-rect
//!    tracking, plus the line, polygon and ellipse rasterizers on top
//! 3. **Operations**: the typed functions in [`draw`] and the
//!    loosely-typed [`call`] that validates arguments before drawing
//!
//! ```
//! use rasterdraw::{draw, PixmapRgba32, Rect, Rgba8, Surface};
//!
//! let mut pm = PixmapRgba32::new(32, 32);
//! let r = draw::line(&mut pm, (255, 0, 0), (1, 1), (20, 1), 1);
//! assert_eq!(r, Rect::new(1, 1, 20, 1));
//! assert_eq!(pm.get_pixel(20, 1), Rgba8::new_opaque(255, 0, 0));
//! ```

// Foundation types
pub mod basics;
pub mod bounding_rect;
pub mod color;
pub mod error;

// Surfaces
pub mod pixfmt_rgb_packed;
pub mod pixfmt_rgba;
pub mod rendering_buffer;

// Renderers and rasterizers
pub mod dda_line;
pub mod ellipse_bresenham;
pub mod rasterizer_polygon;
pub mod renderer_base;
pub mod renderer_ellipse;
pub mod renderer_line_aa;
pub mod renderer_primitives;

// Operations
pub mod args;
pub mod draw;

pub use args::{call, Args, Value};
pub use basics::{Point, Rect};
pub use color::{ColorSpec, Rgba8};
pub use draw::{aaline, aalines, arc, circle, ellipse, line, lines, polygon, rect};
pub use error::{DrawError, DrawResult, ErrorKind};
pub use pixfmt_rgb_packed::PixmapRgb565;
pub use pixfmt_rgba::{PixmapRgba32, Surface};
