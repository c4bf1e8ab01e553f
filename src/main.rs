// Controls:
// • Hold Left Mouse: paint with the active tool (fill tools act where you press).
// • 1 circle, 2 square, 3 fill, 4 eraser, 5 erase-fill.
// • K/W/R/G/B/Y pick a color. [ and ] shrink/grow the brush.
// • C clears the canvas. ESC quits.

mod window;

use paint_surface::{Config, Error, FrameBuffer, Painter};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use window::Drawer;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::default();
    cfg.validate()?;

    /* --- Canvas + window setup ---
       Visual: window opens on a blank background-colored canvas. */
    let mut canvas = FrameBuffer::new(cfg.width, cfg.height, cfg.background)?;
    let mut drawer = Drawer::new(&cfg.title, cfg.width, cfg.height)?;
    let mut painter = Painter::new(&cfg);
    tracing::info!(
        width = cfg.width,
        height = cfg.height,
        background = ?painter.background(),
        "canvas ready"
    );

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Apply this frame's input in full before presenting.
        for event in drawer.poll_events() {
            painter.apply(&mut canvas, event);
        }

        // 2) Tool icon goes straight into the canvas.
        painter.draw_preview(&mut canvas);

        // 3) Present.
        drawer.present(&canvas)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            tracing::debug!(fps = frames_this_second as f32 / secs, "frame rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    tracing::info!("window closed");
    Ok(())
}
