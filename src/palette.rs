// One-time palette baking. Runs at startup only.
// Visual: seven horizontal gradient bands on the left strip, dark on the left edge and full
// intensity on the right, then a black band that sits under the CLEAR tile.

use crate::canvas::Canvas;
use crate::layout::{CLEAR_BAND, Hue, PaletteLayout};
use crate::types::{Color, Rect};

/// Gray ramp value for palette column `column`: 0 at the left edge, approaching 255.
pub fn ramp_level(column: i32, palette_width: i32) -> u32 {
    (column.max(0) as u32 * 255) / palette_width.max(1) as u32
}

/// Paint the palette bands into the strip `x < palette_width`.
pub fn bake_palette(canvas: &mut Canvas, layout: &PaletteLayout) {
    let band_height = layout.section_height();

    for column in 0..layout.palette_width() {
        let level = ramp_level(column, layout.palette_width());
        let gray = Color::from_rgb888(level | (level << 8) | (level << 16));

        // Each band is a 1-pixel-wide column slice at this x.
        for hue in Hue::ALL {
            let rect = Rect::new(column, hue.band() * band_height, 1, band_height);
            canvas.fill(rect, gray.masked(hue.channel_mask()));
        }
        canvas.fill(Rect::new(column, CLEAR_BAND * band_height, 1, band_height), Color::BLACK);
    }
}
