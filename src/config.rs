// Start-up settings. No CLI or config file: the binary uses `Config::default()`.

use crate::error::Error;
use crate::types::{Brush, BrushShape, Color, Point};

#[derive(Clone, Debug)]
pub struct Config {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub brush: Brush,
    /// Inclusive range the brush size may be adjusted within.
    pub min_brush: i32,
    pub max_brush: i32,
    /// Center of the tool preview icon.
    pub preview_anchor: Point,
    /// How much wider than the brush the preview backdrop is.
    pub preview_padding: i32,
    /// Initial capacity of the per-fill point stack.
    pub fill_stack_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::from("Paint Surface"),
            width: 800,
            height: 600,
            background: Color::WHITE,
            brush: Brush { shape: BrushShape::Circle, size: 6, color: Color::BLACK },
            min_brush: 1,
            max_brush: 64,
            preview_anchor: Point::new(40, 40),
            preview_padding: 8,
            fill_stack_capacity: 1024,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        let bad = |field, reason: &str| Err(Error::InvalidConfig { field, reason: reason.into() });

        if self.width == 0 || self.height == 0 {
            return bad("width/height", "must be non-zero");
        }
        if self.min_brush < 1 || self.min_brush > self.max_brush {
            return bad("min_brush/max_brush", "must satisfy 1 <= min <= max");
        }
        if !(self.min_brush..=self.max_brush).contains(&self.brush.size) {
            return bad("brush.size", "is outside min_brush..=max_brush");
        }
        if self.preview_padding < 0 {
            return bad("preview_padding", "must not be negative");
        }
        if self.fill_stack_capacity == 0 {
            return bad("fill_stack_capacity", "must be positive");
        }
        Ok(())
    }
}
