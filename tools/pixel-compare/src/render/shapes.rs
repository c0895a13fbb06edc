// Closed shape scenes.

use std::f64::consts::PI;

use log::warn;
use rasterdraw::{call, draw, Args, PixmapRgba32, Rect, Rgba8, Surface, Value};

use super::param;

fn size(pm: &PixmapRgba32) -> (i32, i32) {
    (pm.width() as i32, pm.height() as i32)
}

/// Filled and outlined cross and star. Params: [outline_width].
pub fn polygons(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let width = param(params, 0, 1.0) as i32;
    let (u, v) = (w / 12, h / 12);
    let cross: Vec<(i32, i32)> = [
        (2, 5), (5, 5), (5, 2), (7, 2), (7, 5), (10, 5),
        (10, 7), (7, 7), (7, 10), (5, 10), (5, 7), (2, 7),
    ]
    .iter()
    .map(|&(x, y)| (x * u / 2, y * v))
    .collect();
    let star: Vec<(i32, i32)> = (0..10)
        .map(|i| {
            let t = i as f64 / 10.0 * 2.0 * PI;
            let r = if i % 2 == 0 { w as f64 / 4.0 } else { w as f64 / 10.0 };
            ((w as f64 * 0.75 + r * t.sin()) as i32, (h as f64 / 2.0 - r * t.cos()) as i32)
        })
        .collect();
    let _ = draw::polygon(pm, (230, 180, 40), &cross, 0);
    let _ = draw::polygon(pm, Rgba8::BLACK, &cross, width);
    let _ = draw::polygon(pm, (40, 120, 220), &star, 0);
    let _ = draw::polygon(pm, Rgba8::BLACK, &star, width);
}

/// Nested rects of alternating fill and border. Params: [border].
pub fn rects(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let border = param(params, 0, 3.0) as i32;
    let mut r = Rect::new(2, 2, w - 4, h - 4);
    let mut k = 0;
    while !r.is_empty() {
        if k % 2 == 0 {
            draw::rect(pm, (180, 60, 60), r, border);
        } else {
            draw::rect(pm, (60, 60, 180), r, 0);
        }
        let step = border + 2;
        r = Rect::new(r.x + step, r.y + step, r.w - 2 * step, r.h - 2 * step);
        k += 1;
    }
    // One pixel high and wide rects along the edges.
    draw::rect(pm, Rgba8::BLACK, Rect::new(0, h - 1, w, 1), 1);
    draw::rect(pm, Rgba8::BLACK, Rect::new(w - 1, 0, 1, h), 1);
}

/// Concentric circles: filled, then rings. Params: [ring_width].
pub fn circles(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let ring = param(params, 0, 2.0) as i32;
    let center = (w / 2, h / 2);
    let max_r = w.min(h) / 2 - 1;
    draw::circle(pm, (250, 220, 200), center, max_r, 0);
    let mut r = max_r;
    while r > 0 {
        draw::circle(pm, (120, 40, 40), center, r, ring);
        r -= ring.max(1) * 3;
    }
}

/// A grid of ellipses of varying aspect, including degenerate ones.
/// Params: [width].
pub fn ellipses(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let width = param(params, 0, 0.0) as i32;
    let (cw, ch) = (w / 4, h / 3);
    for row in 0..3 {
        for col in 0..4 {
            let ew = (cw - 2) * (col + 1) / 4;
            let eh = (ch - 2) * (row + 1) / 3;
            let r = Rect::new(col * cw + 1, row * ch + 1, ew.max(1), eh.max(1));
            draw::ellipse(pm, (30, 100 + row as u8 * 50, 60), r, width);
        }
    }
    draw::ellipse(pm, Rgba8::BLACK, Rect::new(0, h / 2, w, 1), 0);
}

/// Arc segments around one ellipse. Params: [gap_radians, width].
pub fn arcs(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let gap = param(params, 0, 0.2);
    let width = param(params, 1, 3.0) as i32;
    let r = Rect::new(4, 4, w - 8, h - 8);
    let colors = [(200, 40, 40), (40, 160, 40), (40, 40, 200), (160, 120, 0)];
    for (q, &c) in colors.iter().enumerate() {
        let start = q as f64 * PI / 2.0 + gap / 2.0;
        draw::arc(pm, c, r, start, start + PI / 2.0 - gap, width);
    }
    // Reversed bounds wrap around the inner ellipse.
    let inner = Rect::new(w / 4, h / 4, w / 2, h / 2);
    draw::arc(pm, Rgba8::BLACK, inner, 1.5 * PI, 0.5 * PI, width.max(1));
}

/// Shapes drawn through the loosely-typed entry point. Params: none.
pub fn dynamic(pm: &mut PixmapRgba32, _params: &[f64]) {
    let (w, h) = size(pm);
    let calls = [
        (
            "polygon",
            Args::new()
                .arg((90, 30, 140))
                .arg(vec![(2, 2), (w / 2, h - 3), (w - 3, 4)]),
        ),
        (
            "circle",
            Args::new()
                .kwarg("color", (250, 250, 0, 255))
                .kwarg("center", (w / 2, h / 3))
                .kwarg("radius", Value::Float((h / 5) as f64)),
        ),
        (
            "aalines",
            Args::new()
                .arg((0, 0, 0))
                .arg(true)
                .arg(vec![(1.5, 1.5), (w as f64 - 1.5, 1.5), (w as f64 / 2.0, h as f64 - 1.5)]),
        ),
    ];
    for (op, args) in &calls {
        if let Err(e) = call(pm, op, args) {
            warn!("{}: {}", op, e);
        }
    }
}
