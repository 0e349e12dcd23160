// RGB565 <-> 0x00RRGGBB helpers.
// The canvas stores RGB565; the window wants 0x00RRGGBB. Expanding every pixel every frame
// is the hot path of `present`, so we replace the shifts/ORs with three small table lookups.

use crate::types::Color;

impl Color {
    /// Pack 0x00RRGGBB into RGB565 by dropping the low bits of each channel.
    pub fn from_rgb888(rgb: u32) -> Color {
        let r = ((rgb >> 16) & 0xFF) as u16;
        let g = ((rgb >> 8) & 0xFF) as u16;
        let b = (rgb & 0xFF) as u16;
        Color(((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3))
    }
}

pub struct Rgb565Lut {
    // 5-bit red -> 0x00RR0000
    red: [u32; 32],
    // 6-bit green -> 0x0000GG00
    green: [u32; 64],
    // 5-bit blue -> 0x000000BB
    blue: [u32; 32],
}

impl Rgb565Lut {
    /// Build all tables once at startup.
    pub fn new() -> Self {
        // Replicate the top bits into the low bits so 0x1F -> 0xFF and 0 -> 0 (full range).
        let mut red = [0u32; 32];
        let mut blue = [0u32; 32];
        for v in 0..32u32 {
            let c = (v << 3) | (v >> 2);
            red[v as usize] = c << 16;
            blue[v as usize] = c;
        }

        let mut green = [0u32; 64];
        for v in 0..64u32 {
            let c = (v << 2) | (v >> 4);
            green[v as usize] = c << 8;
        }

        Self { red, green, blue }
    }

    #[inline]
    pub fn expand(&self, color: Color) -> u32 {
        let c = color.0;
        self.red[(c >> 11) as usize]
            | self.green[((c >> 5) & 0x3F) as usize]
            | self.blue[(c & 0x1F) as usize]
    }
}

impl Default for Rgb565Lut {
    fn default() -> Self {
        Self::new()
    }
}
