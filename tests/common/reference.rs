//! Deliberately simple pixel-set rasterizers used to cross-check the
//! library. Nothing here is clipped and nothing is fast.

use std::collections::HashSet;

pub type Pixels = HashSet<(i32, i32)>;

/// Both endpoints included. The minor coordinate is the ideal one rounded
/// half up, measured from the endpoint with the smaller major coordinate.
pub fn line(p0: (i32, i32), p1: (i32, i32)) -> Pixels {
    let dx = (p1.0 - p0.0).abs();
    let dy = (p1.1 - p0.1).abs();
    let ver = dx < dy;
    let to_am = |p: (i32, i32)| if ver { (p.1, p.0) } else { (p.0, p.1) };
    let (mut s, mut e) = (to_am(p0), to_am(p1));
    if s > e {
        std::mem::swap(&mut s, &mut e);
    }

    let mut pixels = HashSet::new();
    let da = (e.0 - s.0) as f64;
    let dm = (e.1 - s.1) as f64;
    for a in s.0..=e.0 {
        let m = if da == 0.0 {
            s.1
        } else {
            (s.1 as f64 + (a - s.0) as f64 * dm / da + 0.5).floor() as i32
        };
        pixels.insert(if ver { (m, a) } else { (a, m) });
    }
    pixels
}

/// Copies of `line` shifted across the dominant axis by 0, +1, -1, +2, ...
pub fn thick_line(p0: (i32, i32), p1: (i32, i32), width: i32) -> Pixels {
    let mut pixels = HashSet::new();
    let x_major = (p1.0 - p0.0).abs() > (p1.1 - p0.1).abs();
    for k in 0..width {
        let off = if k % 2 == 1 { (k + 1) / 2 } else { -(k / 2) };
        let (ox, oy) = if x_major { (0, off) } else { (off, 0) };
        pixels.extend(line((p0.0 + ox, p0.1 + oy), (p1.0 + ox, p1.1 + oy)));
    }
    pixels
}

/// Segments through `points`, closed back to the first when asked and
/// there are more than two points.
pub fn polyline(points: &[(i32, i32)], closed: bool, width: i32) -> Pixels {
    let mut pixels = HashSet::new();
    for w in points.windows(2) {
        pixels.extend(thick_line(w[0], w[1], width));
    }
    if closed && points.len() > 2 {
        pixels.extend(thick_line(points[points.len() - 1], points[0], width));
    }
    pixels
}

pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Pixels {
    let mut pixels = HashSet::new();
    for py in y..y + h {
        for px in x..x + w {
            pixels.insert((px, py));
        }
    }
    pixels
}

/// Border `t` pixels thick inside the rect.
pub fn rect_border(x: i32, y: i32, w: i32, h: i32, t: i32) -> Pixels {
    rect(x, y, w, h)
        .into_iter()
        .filter(|&(px, py)| px < x + t || px >= x + w - t || py < y + t || py >= y + h - t)
        .collect()
}

/// Pixel centers inside the polygon or on its boundary. Exact for polygons
/// made of horizontal and vertical edges.
pub fn polygon(vertices: &[(i32, i32)]) -> Pixels {
    let mut pixels = HashSet::new();
    let min_x = vertices.iter().map(|v| v.0).min().unwrap_or(0);
    let max_x = vertices.iter().map(|v| v.0).max().unwrap_or(-1);
    let min_y = vertices.iter().map(|v| v.1).min().unwrap_or(0);
    let max_y = vertices.iter().map(|v| v.1).max().unwrap_or(-1);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if on_boundary(vertices, x, y) || inside(vertices, x, y) {
                pixels.insert((x, y));
            }
        }
    }
    pixels
}

fn edges(vertices: &[(i32, i32)]) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

fn on_boundary(vertices: &[(i32, i32)], x: i32, y: i32) -> bool {
    edges(vertices).any(|(a, b)| {
        let cross = (b.0 - a.0) as i64 * (y - a.1) as i64 - (b.1 - a.1) as i64 * (x - a.0) as i64;
        cross == 0
            && x >= a.0.min(b.0)
            && x <= a.0.max(b.0)
            && y >= a.1.min(b.1)
            && y <= a.1.max(b.1)
    })
}

// Even-odd ray cast to the right.
fn inside(vertices: &[(i32, i32)], x: i32, y: i32) -> bool {
    let (px, py) = (x as f64, y as f64);
    let mut result = false;
    for (a, b) in edges(vertices) {
        let (ax, ay, bx, by) = (a.0 as f64, a.1 as f64, b.0 as f64, b.1 as f64);
        if (ay > py) != (by > py) {
            let cx = ax + (py - ay) * (bx - ax) / (by - ay);
            if px < cx {
                result = !result;
            }
        }
    }
    result
}

pub fn bbox(pixels: &Pixels) -> Option<(i32, i32, i32, i32)> {
    let min_x = pixels.iter().map(|p| p.0).min()?;
    let max_x = pixels.iter().map(|p| p.0).max()?;
    let min_y = pixels.iter().map(|p| p.1).min()?;
    let max_y = pixels.iter().map(|p| p.1).max()?;
    Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

#[test]
fn reference_line_is_symmetric() {
    for &(a, b) in &[((0, 0), (7, 3)), ((2, 9), (5, 0)), ((0, 0), (4, 4)), ((3, 3), (3, 3))] {
        assert_eq!(line(a, b), line(b, a));
    }
    assert_eq!(line((0, 0), (4, 2)).len(), 5);
}

#[test]
fn reference_polygon_square() {
    assert_eq!(polygon(&[(0, 0), (3, 0), (3, 3), (0, 3)]), rect(0, 0, 4, 4));
}
