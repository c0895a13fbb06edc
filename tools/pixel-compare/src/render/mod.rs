// Named scenes drawn with rasterdraw, for rendering to image files.
//
// Scenes take the target size and a list of numeric parameters whose
// meaning is scene specific (missing parameters fall back to defaults).

mod lines;
mod shapes;

use log::info;
use rasterdraw::{PixmapRgba32, Rgba8};

use crate::PixelBuffer;

type SceneFn = fn(&mut PixmapRgba32, &[f64]);

const SCENES: &[(&str, SceneFn)] = &[
    ("line_fan", lines::line_fan),
    ("thick_lines", lines::thick_lines),
    ("aaline_star", lines::aaline_star),
    ("polylines", lines::polylines),
    ("polygons", shapes::polygons),
    ("rects", shapes::rects),
    ("circles", shapes::circles),
    ("ellipses", shapes::ellipses),
    ("arcs", shapes::arcs),
    ("dynamic", shapes::dynamic),
];

/// Render a named scene at the given dimensions with the given parameters.
///
/// Returns None if the scene name is not recognized.
pub fn render_scene(name: &str, width: u32, height: u32, params: &[f64]) -> Option<PixelBuffer> {
    let &(_, scene) = SCENES.iter().find(|(n, _)| *n == name)?;
    let mut pm = PixmapRgba32::new(width, height);
    pm.fill(Rgba8::WHITE);
    scene(&mut pm, params);
    info!("rendered '{}' at {}x{}", name, width, height);
    Some(PixelBuffer::from(&pm))
}

/// List all available scene names.
pub fn available_scenes() -> impl Iterator<Item = &'static str> {
    SCENES.iter().map(|(n, _)| *n)
}

/// Parameter `i`, or `default` when absent.
fn param(params: &[f64], i: usize, default: f64) -> f64 {
    params.get(i).copied().unwrap_or(default)
}
