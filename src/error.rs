// One error type for the whole crate.
// Every variant states *where* things went wrong.
// Per-frame drawing never returns these: clipping and no-op fills are silent.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the pixel buffer to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// Reserving the pixel buffer failed; the session cannot continue.
    #[error("Allocation error: could not reserve {pixels} pixels")]
    Alloc { pixels: usize },
    /// `width * height` does not fit in `usize`.
    #[error("Allocation error: canvas {width}x{height} overflows the pixel count")]
    CanvasTooLarge { width: usize, height: usize },
    /// A configuration field is out of range.
    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
