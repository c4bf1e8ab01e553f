// Tool and stroke state, threaded explicitly instead of living in globals.
// The window layer turns raw input into `InputEvent`s; the painter turns those
// into pixel writes.

use crate::config::Config;
use crate::interp::interpolate;
use crate::preview::draw_preview;
use crate::raster::stamp;
use crate::types::{Brush, BrushShape, Color, FrameBuffer, Point};

/// Already-decoded input, in window pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    StrokeStart(Point),
    /// Ignored unless a stroke is active.
    StrokeMove(Point),
    StrokeEnd,
    SelectColor(Color),
    SelectShape(BrushShape),
    GrowBrush,
    ShrinkBrush,
    ClearCanvas,
}

pub struct Painter {
    brush: Brush,
    background: Color,
    last: Option<Point>, // None between strokes
    min_brush: i32,
    max_brush: i32,
    preview_anchor: Point,
    preview_padding: i32,
    fill_capacity: usize,
}

impl Painter {
    pub fn new(cfg: &Config) -> Self {
        Self {
            brush: cfg.brush,
            background: cfg.background,
            last: None,
            min_brush: cfg.min_brush,
            max_brush: cfg.max_brush,
            preview_anchor: cfg.preview_anchor,
            preview_padding: cfg.preview_padding,
            fill_capacity: cfg.fill_stack_capacity,
        }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn stroke_active(&self) -> bool {
        self.last.is_some()
    }

    /// Apply one event to `fb`, synchronously and in full.
    pub fn apply(&mut self, fb: &mut FrameBuffer, event: InputEvent) {
        match event {
            InputEvent::StrokeStart(p) => {
                tracing::debug!(x = p.x, y = p.y, shape = ?self.brush.shape, "stroke start");
                self.last = None;
                self.paint_to(fb, p);
            }
            InputEvent::StrokeMove(p) => {
                if self.last.is_some() {
                    self.paint_to(fb, p);
                }
            }
            InputEvent::StrokeEnd => {
                if self.last.take().is_some() {
                    tracing::debug!("stroke end");
                }
            }
            InputEvent::SelectColor(color) => {
                tracing::debug!(?color, "color selected");
                self.brush.color = color;
            }
            InputEvent::SelectShape(shape) => {
                tracing::debug!(?shape, "shape selected");
                self.brush.shape = shape;
            }
            InputEvent::GrowBrush => self.resize_brush(self.brush.size + 1),
            InputEvent::ShrinkBrush => self.resize_brush(self.brush.size - 1),
            InputEvent::ClearCanvas => {
                tracing::debug!("canvas cleared");
                fb.clear(self.background);
            }
        }
    }

    /// Redraw the tool icon; call once per frame before presenting.
    pub fn draw_preview(&self, fb: &mut FrameBuffer) {
        let a = self.preview_anchor;
        draw_preview(fb, a.x, a.y, &self.brush, self.preview_padding);
    }

    fn paint_to(&mut self, fb: &mut FrameBuffer, current: Point) {
        let path = interpolate(self.last, current);
        tracing::trace!(x = current.x, y = current.y, stamps = path.len(), "paint");
        for p in path {
            stamp(fb, p, &self.brush, self.background, self.fill_capacity);
        }
        self.last = Some(current);
    }

    fn resize_brush(&mut self, size: i32) {
        let clamped = size.clamp(self.min_brush, self.max_brush);
        if clamped != size {
            tracing::warn!(requested = size, size = clamped, "brush size clamped");
        }
        self.brush.size = clamped;
    }
}
