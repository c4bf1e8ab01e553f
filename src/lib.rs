//! Real-time raster drawing surface.
//!
//! The core keeps no window: it takes decoded pointer/tool events and paints
//! into a [`FrameBuffer`] the caller presents each frame.

pub mod config;
pub mod error;
pub mod fill;
pub mod interp;
pub mod painter;
pub mod preview;
pub mod raster;
pub mod stack;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use painter::{InputEvent, Painter};
pub use types::{Brush, BrushShape, Color, FrameBuffer, Point};
