// Tool indicator drawn at a fixed spot every frame.
// It is painted straight into the canvas, not composited: whatever it covers
// stays covered until the next frame redraws it.

use crate::raster::{draw_circle, draw_square, make_lighter};
use crate::types::{Brush, BrushShape, Color, FrameBuffer};

/// Draw the active brush icon centered on (ax,ay).
/// Visual: a pale square in the brush color with the brush's shape on top;
/// the erasers show a black/white ring (square or round).
pub fn draw_preview(fb: &mut FrameBuffer, ax: i32, ay: i32, brush: &Brush, padding: i32) {
    let size = brush.size;
    let backdrop = size.saturating_add(padding);
    draw_square(fb, ax, ay, make_lighter(brush.color), backdrop);

    match brush.shape {
        BrushShape::Circle => draw_circle(fb, ax, ay, brush.color, size),
        BrushShape::Square | BrushShape::Fill => draw_square(fb, ax, ay, brush.color, size),
        BrushShape::EraseBrush => {
            draw_square(fb, ax, ay, Color::BLACK, size);
            if size >= 6 {
                draw_square(fb, ax, ay, Color::WHITE, size - 6);
            }
        }
        BrushShape::EraseFill => {
            draw_circle(fb, ax, ay, make_lighter(Color::BLACK), backdrop);
            draw_circle(fb, ax, ay, Color::BLACK, size);
            if size >= 3 {
                draw_circle(fb, ax, ay, Color::WHITE, size - 3);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Color = Color(0xFF7F7F7F);

    fn brush(shape: BrushShape, size: i32, color: Color) -> Brush {
        Brush { shape, size, color }
    }

    #[test]
    fn square_preview_has_pale_border() {
        let mut fb = FrameBuffer::new(40, 40, Color::WHITE).unwrap();
        draw_preview(&mut fb, 20, 20, &brush(BrushShape::Square, 6, Color::BLACK), 8);
        // backdrop half = 7, brush half = 3
        assert_eq!(fb.get(20, 20), Some(Color::BLACK));
        assert_eq!(fb.get(23, 20), Some(Color::BLACK));
        assert_eq!(fb.get(24, 20), Some(GREY));
        assert_eq!(fb.get(27, 27), Some(GREY));
        assert_eq!(fb.get(28, 20), Some(Color::WHITE));
    }

    #[test]
    fn fill_previews_as_square() {
        let mut a = FrameBuffer::new(30, 30, Color::WHITE).unwrap();
        let mut b = a.clone();
        draw_preview(&mut a, 15, 15, &brush(BrushShape::Fill, 8, Color::RED), 8);
        draw_preview(&mut b, 15, 15, &brush(BrushShape::Square, 8, Color::RED), 8);
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn erase_brush_preview_is_ring() {
        let mut fb = FrameBuffer::new(40, 40, Color::BLUE).unwrap();
        draw_preview(&mut fb, 20, 20, &brush(BrushShape::EraseBrush, 10, Color::RED), 8);
        // outer half 5, inner half 2
        assert_eq!(fb.get(20, 20), Some(Color::WHITE));
        assert_eq!(fb.get(22, 20), Some(Color::WHITE));
        assert_eq!(fb.get(23, 20), Some(Color::BLACK));
        assert_eq!(fb.get(25, 25), Some(Color::BLACK));
        assert_eq!(fb.get(26, 20), Some(make_lighter(Color::RED)));
    }

    #[test]
    fn default_erase_brush_has_white_center() {
        // size 6 -> inner square of side 0, a single pixel
        let mut fb = FrameBuffer::new(20, 20, Color::BLUE).unwrap();
        draw_preview(&mut fb, 10, 10, &brush(BrushShape::EraseBrush, 6, Color::RED), 8);
        assert_eq!(fb.get(10, 10), Some(Color::WHITE));
        assert_eq!(fb.get(11, 10), Some(Color::BLACK));
        assert_eq!(fb.get(10, 9), Some(Color::BLACK));
    }

    #[test]
    fn small_erase_brush_skips_inner_square() {
        let mut fb = FrameBuffer::new(20, 20, Color::BLUE).unwrap();
        draw_preview(&mut fb, 10, 10, &brush(BrushShape::EraseBrush, 4, Color::RED), 8);
        assert_eq!(fb.get(10, 10), Some(Color::BLACK));
    }

    #[test]
    fn erase_fill_preview_is_round_ring() {
        let mut fb = FrameBuffer::new(40, 40, Color::BLUE).unwrap();
        draw_preview(&mut fb, 20, 20, &brush(BrushShape::EraseFill, 10, Color::RED), 8);
        // white r = 3, black r = 5, grey r = 9, square backdrop half = 9
        assert_eq!(fb.get(20, 20), Some(Color::WHITE));
        assert_eq!(fb.get(23, 20), Some(Color::BLACK));
        assert_eq!(fb.get(26, 20), Some(GREY));
        assert_eq!(fb.get(29, 29), Some(make_lighter(Color::RED)));
    }

    #[test]
    fn preview_is_baked_into_canvas() {
        let mut fb = FrameBuffer::new(20, 20, Color::WHITE).unwrap();
        draw_preview(&mut fb, 5, 5, &brush(BrushShape::Circle, 4, Color::GREEN), 2);
        assert_eq!(fb.get(5, 5), Some(Color::GREEN));
        assert_eq!(fb.get(7, 7), Some(make_lighter(Color::GREEN)));
    }
}
