// Core types shared by the drawing modules.

use crate::error::Error;

/// A 32-bit ARGB color: 0xAARRGGBB. Alpha is always 0xFF in this program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF_00_00_00);
    pub const WHITE: Color = Color(0xFF_FF_FF_FF);
    pub const RED: Color = Color(0xFF_FF_00_00);
    pub const GREEN: Color = Color(0xFF_00_FF_00);
    pub const BLUE: Color = Color(0xFF_00_00_FF);
    pub const YELLOW: Color = Color(0xFF_FF_FF_00);

    /// Pack opaque channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF_00_00_00 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Integer pixel coordinate. May lie outside the buffer; writes are clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What the brush does when stamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushShape {
    Circle,
    Square,
    Fill,
    /// Square stamp in the background color.
    EraseBrush,
    /// Flood fill with the background color.
    EraseFill,
}

/// The active tool: shape plus the size/color every shape shares.
/// `size` is diameter-like; half extents use integer division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub shape: BrushShape,
    pub size: i32,
    pub color: Color,
}

/// The pixel grid we paint into and hand to the window each frame.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width: usize,     // how wide the canvas is on screen (pixels)
    pub height: usize,    // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>, // row-major, each entry is 0xAARRGGBB
}

impl FrameBuffer {
    /// Allocate a `width x height` buffer painted with `background`.
    /// Reservation is fallible so an oversized canvas is an error, not an abort.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self, Error> {
        let len = width
            .checked_mul(height)
            .ok_or(Error::CanvasTooLarge { width, height })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| Error::Alloc { pixels: len })?;
        pixels.resize(len, background.0);
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Color at (x,y), or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(Color(self.pixels[y as usize * self.width + x as usize]))
    }

    /// Set (x,y) if it is inside the buffer; otherwise do nothing.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.pixels[idx] = color.0;
    }

    /// Repaint every pixel.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.0);
    }
}
