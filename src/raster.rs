// Software shape stamping into the frame buffer.
// Shape loops are clipped to the buffer (in i64) before iterating.

use std::ops::RangeInclusive;

use crate::fill::flood_fill;
use crate::types::{Brush, BrushShape, Color, FrameBuffer, Point};

/// Inclusive span `center - half ..= center + half` cut down to `0..len`.
/// Empty when the shape misses the buffer or `half` is negative.
fn clip_span(center: i32, half: i64, len: usize) -> RangeInclusive<i32> {
    let lo = (center as i64 - half).max(0);
    let hi = (center as i64 + half).min(len as i64 - 1);
    if lo > hi {
        return RangeInclusive::new(1, 0);
    }
    lo as i32..=hi as i32
}

/// Fill the square with offsets `-side/2 ..= side/2` around (cx,cy).
/// Visual: an even `side` covers `side + 1` pixels across.
pub fn draw_square(fb: &mut FrameBuffer, cx: i32, cy: i32, color: Color, side: i32) {
    let half = (side / 2) as i64;
    for y in clip_span(cy, half, fb.height) {
        for x in clip_span(cx, half, fb.width) {
            fb.put(x, y, color);
        }
    }
}

/// Fill every pixel strictly inside radius `diameter/2` of (cx,cy).
/// Visual: `diameter` 0 or 1 draws nothing (radius 0).
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, color: Color, diameter: i32) {
    let r = (diameter / 2) as i64;
    let r2 = r * r;
    for y in clip_span(cy, r, fb.height) {
        let dy = y as i64 - cy as i64;
        for x in clip_span(cx, r, fb.width) {
            let dx = x as i64 - cx as i64;
            if dx * dx + dy * dy < r2 {
                fb.put(x, y, color);
            }
        }
    }
}

/// Halfway towards white on each channel, truncating. Alpha becomes opaque.
pub fn make_lighter(color: Color) -> Color {
    let lift = |c: u8| ((c as u32 + 255) / 2) as u8;
    Color::from_rgb(lift(color.red()), lift(color.green()), lift(color.blue()))
}

/// Apply `brush` once at `at`. The single place brush shapes are told apart
/// when painting.
pub fn stamp(fb: &mut FrameBuffer, at: Point, brush: &Brush, background: Color, fill_capacity: usize) {
    match brush.shape {
        BrushShape::Circle => draw_circle(fb, at.x, at.y, brush.color, brush.size),
        BrushShape::Square => draw_square(fb, at.x, at.y, brush.color, brush.size),
        BrushShape::EraseBrush => draw_square(fb, at.x, at.y, background, brush.size),
        BrushShape::Fill => {
            flood_fill(fb, at.x, at.y, brush.color, fill_capacity);
        }
        BrushShape::EraseFill => {
            flood_fill(fb, at.x, at.y, background, fill_capacity);
        }
    }
}
