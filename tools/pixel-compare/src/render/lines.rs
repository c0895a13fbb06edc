// Line scenes.

use std::f64::consts::TAU;

use rasterdraw::{draw, PixmapRgba32, Rgba8, Surface};

use super::param;

fn size(pm: &PixmapRgba32) -> (f64, f64) {
    (pm.width() as f64, pm.height() as f64)
}

/// Solid lines from the center to points around the border.
/// Params: [count].
pub fn line_fan(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let count = param(params, 0, 48.0).max(1.0) as usize;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let r = w.max(h);
    for i in 0..count {
        let t = i as f64 / count as f64 * TAU;
        let c = Rgba8::new_opaque((i * 255 / count) as u8, 40, 160);
        draw::line(pm, c, (cx, cy), (cx + r * t.cos(), cy + r * t.sin()), 1);
    }
}

/// Diagonal lines of growing width. Params: [max_width].
pub fn thick_lines(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let max_width = param(params, 0, 9.0).max(1.0) as i32;
    for width in 1..=max_width {
        let x = w * width as f64 / (max_width + 1) as f64;
        draw::line(pm, Rgba8::BLACK, (x - 10.0, 4.0), (x + 10.0, h - 4.0), width);
        let y = h * width as f64 / (max_width + 1) as f64;
        draw::line(pm, (200, 30, 30), (4.0, y), (w - 4.0, y + 6.0), width);
    }
}

/// Anti-aliased star with fractional vertices. Params: [points, blend].
pub fn aaline_star(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let n = param(params, 0, 7.0).max(2.0) as usize;
    let blend = param(params, 1, 1.0) != 0.0;
    let (cx, cy) = (w / 2.0 + 0.3, h / 2.0 + 0.6);
    let r = w.min(h) / 2.0 - 2.0;
    let vertex = |k: usize| {
        let t = (k * 3 % n) as f64 / n as f64 * TAU;
        (cx + r * t.sin(), cy - r * t.cos())
    };
    for k in 0..n {
        draw::aaline(pm, (20, 20, 120), vertex(k), vertex(k + 1), blend);
    }
}

/// Open and closed polylines, solid and anti-aliased. Params: [width].
pub fn polylines(pm: &mut PixmapRgba32, params: &[f64]) {
    let (w, h) = size(pm);
    let width = param(params, 0, 2.0) as i32;
    let zigzag: Vec<(f64, f64)> = (0..10)
        .map(|i| (4.0 + i as f64 * (w - 8.0) / 9.0, if i % 2 == 0 { 6.0 } else { h / 2.0 - 4.0 }))
        .collect();
    let _ = draw::lines(pm, (0, 120, 0), false, &zigzag, width);
    let shifted: Vec<(f64, f64)> = zigzag.iter().map(|&(x, y)| (x + 0.4, y + h / 2.0)).collect();
    let _ = draw::aalines(pm, (0, 0, 160), true, &shifted, true);
}
