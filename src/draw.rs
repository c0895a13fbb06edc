//! Drawing operations.
//!
//! Each function resolves its color once, borrows the surface for the
//! duration of the call (inside one lock scope), and returns the bounding
//! rect of the pixels it actually wrote. When nothing is written the rect
//! has zero size and sits at the shape's first coordinate: the start point
//! for lines, the first point for polylines and polygons, the rect origin
//! for rects, ellipses and arcs, the center for circles.
//!
//! `rect` is the exception: it returns the rect it was given whenever that
//! rect is drawable.

use log::{debug, trace};

use crate::basics::{Point, Rect};
use crate::color::{ColorSpec, Rgba8};
use crate::error::{DrawError, DrawResult};
use crate::pixfmt_rgba::Surface;
use crate::rasterizer_polygon::RasterizerPolygon;
use crate::renderer_base::RendererBase;
use crate::renderer_ellipse::{ArcSweep, RendererEllipse};
use crate::renderer_line_aa::RendererLineAa;
use crate::renderer_primitives::RendererPrimitives;

/// Default width of `line`, `lines`.
pub const DEFAULT_LINE_WIDTH: i32 = 1;
/// Default width of closed shapes: filled.
pub const DEFAULT_FILL_WIDTH: i32 = 0;
/// Default width of `arc`.
pub const DEFAULT_ARC_WIDTH: i32 = 1;
/// Default blend mode of `aaline`, `aalines`.
pub const DEFAULT_BLEND: bool = true;

/// Draw a straight line from `start` to `end`, both ends included.
///
/// Coordinates are truncated to pixels. `width > 1` widens the line
/// perpendicular to its dominant axis; `width < 1` draws nothing.
pub fn line<S, C, P, Q>(surface: &mut S, color: C, start: P, end: Q, width: i32) -> Rect
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    P: Into<Point>,
    Q: Into<Point>,
{
    let (x1, y1) = start.into().to_pixel();
    let (x2, y2) = end.into().to_pixel();
    if width < 1 {
        debug!("line: width {} draws nothing", width);
        return Rect::empty_at(x1, y1);
    }
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    RendererPrimitives::new(&mut ren, c).thick_line(x1, y1, x2, y2, width);
    let bounds = ren.bounding_rect((x1, y1));
    trace!("line ({}, {}) -> ({}, {}) width {}: {:?}", x1, y1, x2, y2, width, bounds);
    bounds
}

/// Draw an anti-aliased line. Endpoints keep their fractional part.
///
/// With `blend` the coverage is blended into the existing pixels,
/// otherwise pixels are overwritten with the color scaled by coverage.
pub fn aaline<S, C, P, Q>(surface: &mut S, color: C, start: P, end: Q, blend: bool) -> Rect
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    P: Into<Point>,
    Q: Into<Point>,
{
    let start = start.into();
    let end = end.into();
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    RendererLineAa::new(&mut ren, c, blend).line(start, end);
    let bounds = ren.bounding_rect(start.to_pixel());
    trace!("aaline {:?} -> {:?} blend {}: {:?}", start, end, blend, bounds);
    bounds
}

/// Draw connected lines through `points` (at least two).
pub fn lines<S, C, P>(
    surface: &mut S,
    color: C,
    closed: bool,
    points: &[P],
    width: i32,
) -> DrawResult<Rect>
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    P: Into<Point> + Copy,
{
    check_count("lines", points.len(), 2)?;
    let pts: Vec<(i32, i32)> = points.iter().map(|&p| p.into().to_pixel()).collect();
    let anchor = pts[0];
    if width < 1 {
        debug!("lines: width {} draws nothing", width);
        return Ok(Rect::empty_at(anchor.0, anchor.1));
    }
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    RendererPrimitives::new(&mut ren, c).polyline(&pts, closed, width);
    let bounds = ren.bounding_rect(anchor);
    trace!("lines {} points closed {} width {}: {:?}", pts.len(), closed, width, bounds);
    Ok(bounds)
}

/// Draw connected anti-aliased lines through `points` (at least two).
pub fn aalines<S, C, P>(
    surface: &mut S,
    color: C,
    closed: bool,
    points: &[P],
    blend: bool,
) -> DrawResult<Rect>
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    P: Into<Point> + Copy,
{
    check_count("aalines", points.len(), 2)?;
    let pts: Vec<Point> = points.iter().map(|&p| p.into()).collect();
    let anchor = pts[0].to_pixel();
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    RendererLineAa::new(&mut ren, c, blend).polyline(&pts, closed);
    let bounds = ren.bounding_rect(anchor);
    trace!("aalines {} points closed {} blend {}: {:?}", pts.len(), closed, blend, bounds);
    Ok(bounds)
}

/// Draw a polygon through `points` (at least three): filled when
/// `width == 0`, outlined `width` pixels thick when positive, nothing when
/// negative.
pub fn polygon<S, C, P>(surface: &mut S, color: C, points: &[P], width: i32) -> DrawResult<Rect>
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    P: Into<Point> + Copy,
{
    check_count("polygon", points.len(), 3)?;
    let pts: Vec<(i32, i32)> = points.iter().map(|&p| p.into().to_pixel()).collect();
    let anchor = pts[0];
    if width < 0 {
        debug!("polygon: width {} draws nothing", width);
        return Ok(Rect::empty_at(anchor.0, anchor.1));
    }
    let c = color.into().resolve(surface);
    let poly = RasterizerPolygon::new(pts);
    let mut ren = RendererBase::new(surface);
    if width == 0 {
        poly.fill(&mut ren, c);
    } else {
        poly.outline(&mut ren, c, width);
    }
    let bounds = ren.bounding_rect(anchor);
    trace!("polygon {} points width {}: {:?}", poly.points().len(), width, bounds);
    Ok(bounds)
}

/// Draw a rect: filled when `width == 0`, otherwise a border `width`
/// pixels thick inside the rect. Returns `r` normalized, whatever was
/// drawn. A rect with no area draws nothing; a negative width draws nothing
/// and returns a zero-size rect at the origin.
pub fn rect<S, C, R>(surface: &mut S, color: C, r: R, width: i32) -> Rect
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    R: Into<Rect>,
{
    let r = r.into();
    if width < 0 {
        debug!("rect: {:?} width {} draws nothing", r, width);
        return Rect::empty_at(r.x, r.y);
    }
    if r.is_empty() {
        debug!("rect: {:?} has no area", r);
        return r.normalize();
    }
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    if width == 0 || width.saturating_mul(2) >= r.w.min(r.h) {
        fill_rect(&mut ren, &r, c);
    } else {
        let inner_h = r.h - 2 * width;
        let bands = [
            Rect::new(r.x, r.y, r.w, width),
            Rect::new(r.x, r.bottom() - width, r.w, width),
            Rect::new(r.x, r.y + width, width, inner_h),
            Rect::new(r.right() - width, r.y + width, width, inner_h),
        ];
        for band in &bands {
            fill_rect(&mut ren, band, c);
        }
    }
    trace!("rect {:?} width {}: drawn {:?}", r, width, ren.bounding_rect((r.x, r.y)));
    r
}

fn fill_rect<S: Surface + ?Sized>(ren: &mut RendererBase<'_, S>, r: &Rect, c: Rgba8) {
    RasterizerPolygon::new(r.corners().to_vec()).fill(ren, c);
}

/// Draw a circle of `radius` around `center` (truncated to a pixel):
/// filled when `width == 0` or `width >= radius`, a ring otherwise.
/// `radius < 1` or `width < 0` draws nothing.
pub fn circle<S, C, P>(surface: &mut S, color: C, center: P, radius: i32, width: i32) -> Rect
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    P: Into<Point>,
{
    let (cx, cy) = center.into().to_pixel();
    if radius < 1 || width < 0 {
        debug!("circle: radius {} width {} draws nothing", radius, width);
        return Rect::empty_at(cx, cy);
    }
    let d = radius.saturating_mul(2).saturating_add(1);
    let r = Rect::new(cx.saturating_sub(radius), cy.saturating_sub(radius), d, d);
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    RendererEllipse::new(&mut ren, c).ellipse(r, width);
    let bounds = ren.bounding_rect((cx, cy));
    trace!("circle ({}, {}) r {} width {}: {:?}", cx, cy, radius, width, bounds);
    bounds
}

/// Draw the ellipse inscribed in `r`: filled when `width == 0`, a ring
/// otherwise. A one-pixel-high (or wide) rect draws a line from its origin
/// to its far edge inclusive.
pub fn ellipse<S, C, R>(surface: &mut S, color: C, r: R, width: i32) -> Rect
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    R: Into<Rect>,
{
    let r = r.into();
    if width < 0 || r.is_empty() {
        debug!("ellipse: {:?} width {} draws nothing", r, width);
        return Rect::empty_at(r.x, r.y);
    }
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    RendererEllipse::new(&mut ren, c).ellipse(r, width);
    let bounds = ren.bounding_rect((r.x, r.y));
    trace!("ellipse {:?} width {}: {:?}", r, width, bounds);
    bounds
}

/// Draw the part of the ellipse ring inscribed in `r` from `start_angle`
/// counter-clockwise to `stop_angle` (radians, y axis up). A stop below
/// the start wraps around by whole turns. `width <= 0` draws nothing.
pub fn arc<S, C, R>(
    surface: &mut S,
    color: C,
    r: R,
    start_angle: f64,
    stop_angle: f64,
    width: i32,
) -> Rect
where
    S: Surface + ?Sized,
    C: Into<ColorSpec>,
    R: Into<Rect>,
{
    let r = r.into();
    if width <= 0 || r.is_empty() || !start_angle.is_finite() || !stop_angle.is_finite() {
        debug!("arc: {:?} width {} draws nothing", r, width);
        return Rect::empty_at(r.x, r.y);
    }
    let sweep = ArcSweep::new(start_angle, stop_angle);
    let c = color.into().resolve(surface);
    let mut ren = RendererBase::new(surface);
    RendererEllipse::new(&mut ren, c).arc(r, sweep, width);
    let bounds = ren.bounding_rect((r.x, r.y));
    trace!(
        "arc {:?} {}..{} width {}: {:?}",
        r,
        start_angle,
        stop_angle,
        width,
        bounds
    );
    bounds
}

fn check_count(op: &'static str, given: usize, required: usize) -> DrawResult<()> {
    if given < required {
        debug!("{}: {} points, need {}", op, given, required);
        return Err(DrawError::TooFewPoints {
            op,
            required,
            given,
        });
    }
    Ok(())
}
