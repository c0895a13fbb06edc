//! Shared harness for the integration tests: the table of surfaces every
//! behaviour is checked on, and the two ways of calling each operation.
#![allow(dead_code)]

pub mod reference;

use std::collections::HashSet;

use rasterdraw::{
    args, draw, Args, DrawResult, PixmapRgb565, PixmapRgba32, Rect, Rgba8, Surface, Value,
};

pub const BG: Rgba8 = Rgba8::new(0, 0, 0, 255);
pub const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);
pub const GREEN: Rgba8 = Rgba8::new(0, 255, 0, 255);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Targets
// ============================================================================

/// A kind of surface the suite runs against.
pub struct Target {
    pub name: &'static str,
    make: fn(u32, u32) -> Box<dyn Surface>,
}

impl Target {
    /// A `w` x `h` surface cleared to [`BG`].
    pub fn make(&self, w: u32, h: u32) -> Box<dyn Surface> {
        let mut s = (self.make)(w, h);
        clear(s.as_mut(), BG);
        s
    }
}

fn make_rgba32(w: u32, h: u32) -> Box<dyn Surface> {
    Box::new(PixmapRgba32::new(w, h))
}

fn make_rgb565(w: u32, h: u32) -> Box<dyn Surface> {
    Box::new(PixmapRgb565::new(w, h))
}

fn make_clipped(w: u32, h: u32) -> Box<dyn Surface> {
    let mut pm = PixmapRgba32::new(w, h);
    pm.set_clip(Some(Rect::new(1, 2, w as i32 - 3, h as i32 - 4)));
    Box::new(pm)
}

pub const TARGETS: &[Target] = &[
    Target {
        name: "rgba32",
        make: make_rgba32,
    },
    Target {
        name: "rgb565",
        make: make_rgb565,
    },
    Target {
        name: "rgba32-clipped",
        make: make_clipped,
    },
];

// ============================================================================
// Entry points
// ============================================================================

pub type Pt = (f64, f64);

/// The draw operations, called one way or another.
pub trait Api {
    fn name(&self) -> &'static str;
    fn line(&self, s: &mut dyn Surface, c: Rgba8, a: Pt, b: Pt, width: i32) -> DrawResult<Rect>;
    fn aaline(&self, s: &mut dyn Surface, c: Rgba8, a: Pt, b: Pt, blend: bool) -> DrawResult<Rect>;
    fn lines(&self, s: &mut dyn Surface, c: Rgba8, closed: bool, pts: &[Pt], width: i32)
        -> DrawResult<Rect>;
    fn aalines(&self, s: &mut dyn Surface, c: Rgba8, closed: bool, pts: &[Pt], blend: bool)
        -> DrawResult<Rect>;
    fn polygon(&self, s: &mut dyn Surface, c: Rgba8, pts: &[Pt], width: i32) -> DrawResult<Rect>;
    fn rect(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, width: i32) -> DrawResult<Rect>;
    fn circle(&self, s: &mut dyn Surface, c: Rgba8, center: Pt, radius: i32, width: i32)
        -> DrawResult<Rect>;
    fn ellipse(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, width: i32) -> DrawResult<Rect>;
    fn arc(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, start: f64, stop: f64, width: i32)
        -> DrawResult<Rect>;
}

/// Straight calls into `rasterdraw::draw`.
pub struct Typed;

impl Api for Typed {
    fn name(&self) -> &'static str {
        "typed"
    }

    fn line(&self, s: &mut dyn Surface, c: Rgba8, a: Pt, b: Pt, width: i32) -> DrawResult<Rect> {
        Ok(draw::line(s, c, a, b, width))
    }

    fn aaline(&self, s: &mut dyn Surface, c: Rgba8, a: Pt, b: Pt, blend: bool) -> DrawResult<Rect> {
        Ok(draw::aaline(s, c, a, b, blend))
    }

    fn lines(&self, s: &mut dyn Surface, c: Rgba8, closed: bool, pts: &[Pt], width: i32)
        -> DrawResult<Rect> {
        draw::lines(s, c, closed, pts, width)
    }

    fn aalines(&self, s: &mut dyn Surface, c: Rgba8, closed: bool, pts: &[Pt], blend: bool)
        -> DrawResult<Rect> {
        draw::aalines(s, c, closed, pts, blend)
    }

    fn polygon(&self, s: &mut dyn Surface, c: Rgba8, pts: &[Pt], width: i32) -> DrawResult<Rect> {
        draw::polygon(s, c, pts, width)
    }

    fn rect(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, width: i32) -> DrawResult<Rect> {
        Ok(draw::rect(s, c, r, width))
    }

    fn circle(&self, s: &mut dyn Surface, c: Rgba8, center: Pt, radius: i32, width: i32)
        -> DrawResult<Rect> {
        Ok(draw::circle(s, c, center, radius, width))
    }

    fn ellipse(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, width: i32) -> DrawResult<Rect> {
        Ok(draw::ellipse(s, c, r, width))
    }

    fn arc(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, start: f64, stop: f64, width: i32)
        -> DrawResult<Rect> {
        Ok(draw::arc(s, c, r, start, stop, width))
    }
}

/// Everything through `rasterdraw::call`, mixing positional and keyword
/// arguments and spelling colors as channel sequences.
pub struct Dynamic;

fn color_value(c: Rgba8) -> Value {
    (c.r as i32, c.g as i32, c.b as i32, c.a as i32).into()
}

fn points_value(pts: &[Pt]) -> Value {
    Value::Seq(pts.iter().map(|&p| p.into()).collect())
}

impl Api for Dynamic {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn line(&self, s: &mut dyn Surface, c: Rgba8, a: Pt, b: Pt, width: i32) -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg(a)
            .kwarg("end_pos", b)
            .kwarg("width", width);
        args::call(s, "line", &args)
    }

    fn aaline(&self, s: &mut dyn Surface, c: Rgba8, a: Pt, b: Pt, blend: bool) -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg(a)
            .arg(b)
            .kwarg("blend", blend);
        args::call(s, "aaline", &args)
    }

    fn lines(&self, s: &mut dyn Surface, c: Rgba8, closed: bool, pts: &[Pt], width: i32)
        -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg(closed)
            .arg(points_value(pts))
            .arg(width);
        args::call(s, "lines", &args)
    }

    fn aalines(&self, s: &mut dyn Surface, c: Rgba8, closed: bool, pts: &[Pt], blend: bool)
        -> DrawResult<Rect> {
        let args = Args::new()
            .kwarg("points", points_value(pts))
            .kwarg("closed", closed as i32)
            .kwarg("color", color_value(c))
            .kwarg("blend", blend);
        args::call(s, "aalines", &args)
    }

    fn polygon(&self, s: &mut dyn Surface, c: Rgba8, pts: &[Pt], width: i32) -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg(points_value(pts))
            .kwarg("width", width);
        args::call(s, "polygon", &args)
    }

    fn rect(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, width: i32) -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg((r.x, r.y, r.w, r.h))
            .arg(width);
        args::call(s, "rect", &args)
    }

    fn circle(&self, s: &mut dyn Surface, c: Rgba8, center: Pt, radius: i32, width: i32)
        -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg(center)
            .arg(radius)
            .kwarg("width", width);
        args::call(s, "circle", &args)
    }

    fn ellipse(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, width: i32) -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg(((r.x, r.y), (r.w, r.h)))
            .arg(width);
        args::call(s, "ellipse", &args)
    }

    fn arc(&self, s: &mut dyn Surface, c: Rgba8, r: Rect, start: f64, stop: f64, width: i32)
        -> DrawResult<Rect> {
        let args = Args::new()
            .arg(color_value(c))
            .arg(r)
            .arg(start)
            .arg(stop)
            .kwarg("width", width);
        args::call(s, "arc", &args)
    }
}

pub const APIS: &[&dyn Api] = &[&Typed, &Dynamic];

/// Run `check` once for every target and entry point.
pub fn for_each_case(mut check: impl FnMut(&Target, &dyn Api)) {
    init_logging();
    for target in TARGETS {
        for &api in APIS {
            check(target, api);
        }
    }
}

// ============================================================================
// Surface helpers
// ============================================================================

pub fn clear(s: &mut dyn Surface, c: Rgba8) {
    for y in 0..s.height() as i32 {
        for x in 0..s.width() as i32 {
            s.set_pixel(x, y, c);
        }
    }
}

/// The color `c` reads back as after a round trip through the surface.
pub fn stored(s: &dyn Surface, c: Rgba8) -> Rgba8 {
    s.unmap_rgb(s.map_rgb(c))
}

/// Pixels whose color differs from [`BG`].
pub fn painted(s: &dyn Surface) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();
    for y in 0..s.height() as i32 {
        for x in 0..s.width() as i32 {
            if s.get_pixel(x, y) != BG {
                pixels.insert((x, y));
            }
        }
    }
    pixels
}

/// Every pixel, row-major.
pub fn snapshot(s: &dyn Surface) -> Vec<Rgba8> {
    let mut v = Vec::with_capacity((s.width() * s.height()) as usize);
    for y in 0..s.height() as i32 {
        for x in 0..s.width() as i32 {
            v.push(s.get_pixel(x, y));
        }
    }
    v
}

/// `pixels` restricted to what the surface lets a draw call write.
pub fn visible(s: &dyn Surface, pixels: &HashSet<(i32, i32)>) -> HashSet<(i32, i32)> {
    let clip = s.clip_rect();
    pixels
        .iter()
        .copied()
        .filter(|&(x, y)| clip.contains(x, y))
        .collect()
}

/// Smallest rect around `pixels`, or the zero-size rect at `anchor`.
pub fn bounds_or(pixels: &HashSet<(i32, i32)>, anchor: (i32, i32)) -> Rect {
    match reference::bbox(pixels) {
        Some((x, y, w, h)) => Rect::new(x, y, w, h),
        None => Rect::new(anchor.0, anchor.1, 0, 0),
    }
}
