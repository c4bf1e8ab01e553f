// Window + input translation.
// minifb reports input as state; we diff it frame to frame into the discrete
// events the painter understands.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use paint_surface::{BrushShape, Color, Error, FrameBuffer, InputEvent, Point};

const SHAPE_KEYS: [(Key, BrushShape); 5] = [
    (Key::Key1, BrushShape::Circle),
    (Key::Key2, BrushShape::Square),
    (Key::Key3, BrushShape::Fill),
    (Key::Key4, BrushShape::EraseBrush),
    (Key::Key5, BrushShape::EraseFill),
];

const COLOR_KEYS: [(Key, Color); 6] = [
    (Key::K, Color::BLACK),
    (Key::W, Color::WHITE),
    (Key::R, Color::RED),
    (Key::G, Color::GREEN),
    (Key::B, Color::BLUE),
    (Key::Y, Color::YELLOW),
];

pub struct Drawer {
    window: Window,       // the on-screen window you see
    was_down: bool,       // left button state last frame
    last_pos: Option<Point>,
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, was_down: false, last_pos: None })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point::new(x.max(0.0) as i32, y.max(0.0) as i32))
    }

    fn pressed_once(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    /// Everything that happened since the last call, in the order the painter
    /// should see it: tool changes first, then pointer.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for (key, shape) in SHAPE_KEYS {
            if self.pressed_once(key) {
                events.push(InputEvent::SelectShape(shape));
            }
        }
        for (key, color) in COLOR_KEYS {
            if self.pressed_once(key) {
                events.push(InputEvent::SelectColor(color));
            }
        }
        if self.window.is_key_pressed(Key::RightBracket, KeyRepeat::Yes) {
            events.push(InputEvent::GrowBrush);
        }
        if self.window.is_key_pressed(Key::LeftBracket, KeyRepeat::Yes) {
            events.push(InputEvent::ShrinkBrush);
        }
        if self.pressed_once(Key::C) {
            events.push(InputEvent::ClearCanvas);
        }

        let down = self.window.get_mouse_down(MouseButton::Left);
        let pos = self.mouse_pos();
        match (self.was_down, down, pos) {
            (false, true, Some(p)) => events.push(InputEvent::StrokeStart(p)),
            (true, true, Some(p)) if Some(p) != self.last_pos => {
                events.push(InputEvent::StrokeMove(p))
            }
            (true, false, _) => events.push(InputEvent::StrokeEnd),
            _ => {}
        }
        // A press with no position yet starts the stroke next frame.
        self.was_down = down && (self.was_down || pos.is_some());
        self.last_pos = pos;

        events
    }
}
