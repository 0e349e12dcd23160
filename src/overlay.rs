// CLEAR / SIZE button tiles drawn over the palette strip at present time.
// They never touch the canvas: the canvas keeps its black band under CLEAR, and the SIZE label
// is only a text field the painter updates.

use crate::draw::{Frame, draw_text_centered, fill_rect};
use crate::io::TextLabel;
use crate::layout::{CLEAR_BAND, PaletteLayout, SIZE_BAND};

pub const CLEAR_TILE_COLOR: u32 = 0x00_33_33_33; // dark gray
pub const SIZE_TILE_COLOR: u32 = 0x00_44_44_44; // slightly lighter gray
pub const LABEL_COLOR: u32 = 0x00_FF_FF_FF;
pub const LABEL_SCALE: i32 = 3;

pub struct ControlOverlay {
    layout: PaletteLayout,
    size_text: String,
}

impl ControlOverlay {
    pub fn new(layout: PaletteLayout, size_text: String) -> Self {
        Self { layout, size_text }
    }

    pub fn size_text(&self) -> &str {
        &self.size_text
    }

    /// Visual: two gray tiles at the bottom of the strip with white centered labels.
    pub fn render(&self, frame: &mut Frame) {
        self.render_tile(frame, CLEAR_BAND, CLEAR_TILE_COLOR, "CLEAR");
        self.render_tile(frame, SIZE_BAND, SIZE_TILE_COLOR, &self.size_text);
    }

    fn render_tile(&self, frame: &mut Frame, band: i32, color: u32, text: &str) {
        let r = self.layout.band_rect(band);
        fill_rect(frame, r.x, r.y, r.width, r.height, color);
        draw_text_centered(
            frame,
            r.x + r.width / 2,
            r.y + r.height / 2,
            text,
            LABEL_SCALE,
            LABEL_COLOR,
        );
    }
}

impl TextLabel for ControlOverlay {
    fn set_text(&mut self, text: &str) {
        self.size_text.set_text(text);
    }
}
