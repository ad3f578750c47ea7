//! Sparkline rendering onto named surfaces
//!
//! Draws a subtle vertical gradient backdrop and a 2px polyline through an
//! ordered series of samples, scaled to fill the surface with a small inset.

use crate::model::page::Page;

use super::surface::{Color, Surface};

/// Default stroke color for sparklines
pub const DEFAULT_STROKE: Color = Color::rgb(0x0b, 0x63, 0xb5);

/// Gradient backdrop, top stop (`rgba(11,99,181,0.06)`)
const GRADIENT_TOP: Color = Color::rgba(11, 99, 181, 15);
/// Gradient backdrop, bottom stop (transparent white)
const GRADIENT_BOTTOM: Color = Color::rgba(255, 255, 255, 0);

const LINE_WIDTH: f32 = 2.0;

/// Sample series drawn on initialization, keyed by surface name
pub const SAMPLE_SERIES: &[(&str, &[f32])] = &[
    ("mini-covid", &[2.0, 4.0, 6.0, 8.0, 7.0, 6.0, 8.0, 9.0]),
    ("mini-influenza", &[3.0, 3.0, 4.0, 5.0, 4.0, 3.0, 4.0, 3.0]),
    ("mini-dengue", &[1.0, 2.0, 3.0, 2.0, 4.0, 3.0, 2.0, 1.0]),
    ("mini-smallpox", &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
    ("mini-rabies", &[1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0]),
    ("mini-hiv", &[2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0]),
    ("mini-hepatitis", &[1.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.0, 1.0]),
    ("mini-zika", &[1.0, 1.0, 2.0, 3.0, 2.0, 2.0, 1.0, 1.0]),
    ("mini-ebola", &[1.0, 2.0, 4.0, 3.0, 5.0, 3.0, 2.0, 1.0]),
    ("mini-yellow", &[1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
];

/// Map a series onto surface coordinates
///
/// `x = i/(n-1)·(w-6)+3`, `y = h-4-((v-min)/range)·(h-8)`; a flat series
/// uses a range of 1 so every point sits on the baseline.
pub fn sparkline_points(values: &[f32], width: usize, height: usize) -> Vec<(f32, f32)> {
    if values.is_empty() {
        return Vec::new();
    }
    let w = width as f32;
    let h = height as f32;
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let steps = values.len().saturating_sub(1).max(1) as f32;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = (i as f32 / steps) * (w - 6.0) + 3.0;
            let y = h - 4.0 - ((v - min) / range) * (h - 8.0);
            (x, y)
        })
        .collect()
}

/// Draw a sparkline onto an existing surface
pub fn render_sparkline(surface: &mut Surface, values: &[f32], stroke: Color) {
    surface.clear();
    fill_gradient(surface);

    let points = sparkline_points(values, surface.width, surface.height);
    let color = stroke.to_argb_u32();
    match points.as_slice() {
        [] => {}
        [only] => stamp(surface, only.0, only.1, color),
        _ => {
            for pair in points.windows(2) {
                stroke_segment(surface, pair[0], pair[1], color);
            }
        }
    }
}

/// Draw a sparkline onto the named surface of `page`; a missing surface is a no-op
pub fn draw_sparkline(page: &mut Page, name: &str, values: &[f32], stroke: Color) -> bool {
    let Some(surface) = page.surface_mut(name) else {
        tracing::debug!(surface = name, "sparkline surface not found, skipping");
        return false;
    };
    render_sparkline(surface, values, stroke);
    true
}

/// Draw every built-in sample series whose surface exists on the page
pub fn draw_sample_series(page: &mut Page, stroke: Color) -> usize {
    SAMPLE_SERIES
        .iter()
        .filter(|(name, values)| draw_sparkline(page, name, values, stroke))
        .count()
}

fn fill_gradient(surface: &mut Surface) {
    let rows = surface.height.saturating_sub(1).max(1) as f32;
    for y in 0..surface.height {
        let color = GRADIENT_TOP
            .lerp(&GRADIENT_BOTTOM, y as f32 / rows)
            .to_argb_u32();
        for x in 0..surface.width {
            surface.put(x, y, color);
        }
    }
}

/// Walk a segment in half-pixel steps, stamping a square pen
fn stroke_segment(surface: &mut Surface, from: (f32, f32), to: (f32, f32), color: u32) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = ((dx.abs().max(dy.abs())) * 2.0).ceil().max(1.0) as usize;
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        stamp(surface, from.0 + dx * t, from.1 + dy * t, color);
    }
}

fn stamp(surface: &mut Surface, cx: f32, cy: f32, color: u32) {
    let half = LINE_WIDTH / 2.0;
    let x0 = (cx - half).floor().max(0.0) as usize;
    let y0 = (cy - half).floor().max(0.0) as usize;
    let x1 = (cx + half).ceil().max(0.0) as usize;
    let y1 = (cy + half).ceil().max(0.0) as usize;
    for y in y0..y1 {
        for x in x0..x1 {
            surface.blend(x, y, color);
        }
    }
}
