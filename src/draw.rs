// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the canvas (RGB565 expanded to 0x00RRGGBB every frame).
// 2) The left mouse button acting as the touch panel (single touch).
// 3) A tiny 5x7 bitmap font for the button labels.

use crate::canvas::Canvas;
use crate::color::Rgb565Lut;
use crate::error::{Error, Result};
use crate::io::TouchPanel;
use crate::overlay::ControlOverlay;
use crate::types::Point;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

/// What the window actually shows: canvas + overlay, 0x00RRGGBB per pixel.
#[derive(Clone)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Overwrite the whole frame with the canvas (sizes must match).
    pub fn copy_canvas(&mut self, canvas: &Canvas, lut: &Rgb565Lut) {
        for (dst, &src) in self.pixels.iter_mut().zip(canvas.pixels()) {
            *dst = lut.expand(src);
        }
    }
}

pub struct Drawer {
    window: Window, // the on-screen window you see
    frame: Frame,   // reused every present
    lut: Rgb565Lut,
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self { window, frame: Frame::new(width, height), lut: Rgb565Lut::new() })
    }

    /// Compose canvas + button overlay and push it to the screen.
    /// Visual: the window immediately shows the latest strokes.
    pub fn present(&mut self, canvas: &Canvas, overlay: &ControlOverlay) -> Result<()> {
        self.frame.copy_canvas(canvas, &self.lut);
        overlay.render(&mut self.frame);
        self.window
            .update_with_buffer(&self.frame.pixels, self.frame.width, self.frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

impl TouchPanel for Drawer {
    /// Left button down = one touch at the pointer. Positions outside the window are passed
    /// through unchanged; the painter drops them.
    fn poll(&mut self) -> Result<Vec<Point>> {
        if !self.window.get_mouse_down(MouseButton::Left) {
            return Ok(Vec::new());
        }
        let (x, y) = self
            .window
            .get_mouse_pos(MouseMode::Pass)
            .ok_or_else(|| Error::TouchRead("pointer position unavailable".into()))?;
        Ok(vec![Point::new(x.floor() as i32, y.floor() as i32)])
    }
}

/* ---------- Software drawing: pixels, rects, tiny bitmap font ---------- */

/// Put a pixel on the frame if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut Frame, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Solid rectangle, clipped to the frame.
pub fn fill_rect(fb: &mut Frame, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/* ---------- 5x7 bitmap font (ASCII subset we need for "CLEAR" and "SIZE 12") ---------- */

pub const GLYPH_W: i32 = 5;
pub const GLYPH_H: i32 = 7;
const GLYPH_ADVANCE: i32 = GLYPH_W + 1; // 1 column of spacing

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Button labels: C L E A R / S I Z E
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Width in pixels of `text` drawn at `scale` (no trailing spacing).
pub fn text_width(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { (n * GLYPH_ADVANCE - 1) * scale }
}

/// Draw a single 5x7 character at (x,y), each font pixel a `scale` x `scale` block.
fn draw_char_5x7(fb: &mut Frame, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fill_rect(fb, x + rx * scale, y + ry as i32 * scale, scale, scale, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: each glyph is 5x7 font pixels with 1 font pixel of spacing.
pub fn draw_text_5x7(fb: &mut Frame, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += GLYPH_ADVANCE * scale;
    }
}

/// Draw `text` centered on (cx, cy).
pub fn draw_text_centered(fb: &mut Frame, cx: i32, cy: i32, text: &str, scale: i32, color: u32) {
    let x = cx - text_width(text, scale) / 2;
    let y = cy - GLYPH_H * scale / 2;
    draw_text_5x7(fb, x, y, text, scale, color);
}
