//! Screen layout and hit classification.
//!
//! The left strip (`x < palette_width`) is cut into nine equal bands: seven hue gradients,
//! then CLEAR, then SIZE. Everything right of the strip is the drawing area.
//!
//! Palette colors are *not* looked up in a table: a palette hit reports the pixel already
//! baked into the canvas under the finger, so the rendered gradient is the color source.

use crate::canvas::Canvas;
use crate::types::{Color, Point, Rect};

pub const BAND_COUNT: i32 = 9;
pub const CLEAR_BAND: i32 = 7;
pub const SIZE_BAND: i32 = 8;

/// The seven color bands, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    Magenta,
    White,
}

impl Hue {
    pub const ALL: [Hue; 7] =
        [Hue::Blue, Hue::Cyan, Hue::Green, Hue::Yellow, Hue::Red, Hue::Magenta, Hue::White];

    pub fn from_band(band: i32) -> Option<Hue> {
        usize::try_from(band).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn band(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Hue::Blue => "Blue",
            Hue::Cyan => "Cyan",
            Hue::Green => "Green",
            Hue::Yellow => "Yellow",
            Hue::Red => "Red",
            Hue::Magenta => "Magenta",
            Hue::White => "White",
        }
    }

    /// RGB565 channel mask applied to the gray ramp to produce this band.
    pub fn channel_mask(self) -> u16 {
        match self {
            Hue::Blue => Color::BLUE_MASK,
            Hue::Cyan => Color::BLUE_MASK | Color::GREEN_MASK,
            Hue::Green => Color::GREEN_MASK,
            Hue::Yellow => Color::RED_MASK | Color::GREEN_MASK,
            Hue::Red => Color::RED_MASK,
            Hue::Magenta => Color::RED_MASK | Color::BLUE_MASK,
            Hue::White => 0xFFFF,
        }
    }
}

/// What a band of the strip does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Color(Hue),
    Clear,
    Size,
}

impl Band {
    /// Band for a section index. Anything past the last band (only reachable through the
    /// rounding remainder at the bottom edge) belongs to SIZE.
    pub fn from_section(section: i32) -> Band {
        match section {
            CLEAR_BAND => Band::Clear,
            s if s >= SIZE_BAND => Band::Size,
            s => Hue::from_band(s).map_or(Band::Size, Band::Color),
        }
    }
}

/// Result of classifying one touch sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// A color band; `color` is the pixel under the touch.
    PaletteColor { hue: Hue, color: Color },
    ClearButton,
    SizeButton,
    Canvas(Point),
    /// Outside the display; ignored without touching any state.
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteLayout {
    canvas_width: i32,
    canvas_height: i32,
    palette_width: i32,
    section_height: i32,
}

impl PaletteLayout {
    /// Derive the band layout from the display size: `section_height = height / 9`.
    pub fn new(canvas_width: usize, canvas_height: usize, palette_width: usize) -> Self {
        let canvas_height = canvas_height as i32;
        Self {
            canvas_width: canvas_width as i32,
            canvas_height,
            palette_width: palette_width as i32,
            section_height: (canvas_height / BAND_COUNT).max(1),
        }
    }

    pub fn palette_width(&self) -> i32 {
        self.palette_width
    }

    pub fn section_height(&self) -> i32 {
        self.section_height
    }

    /// The strip rows of `band`.
    pub fn band_rect(&self, band: i32) -> Rect {
        Rect::new(0, band * self.section_height, self.palette_width, self.section_height)
    }

    /// Everything right of the palette strip, full height. This is what CLEAR wipes.
    pub fn drawing_area(&self) -> Rect {
        Rect::new(
            self.palette_width,
            0,
            self.canvas_width - self.palette_width,
            self.canvas_height,
        )
    }

    pub fn section_of(&self, y: i32) -> i32 {
        y / self.section_height
    }
}

/// Map a raw touch point to a logical hit.
///
/// `canvas` must hold the baked palette: a color-band hit carries the literal pixel value
/// read from it at `point`.
pub fn classify(canvas: &Canvas, layout: &PaletteLayout, point: Point) -> HitKind {
    let Some(pixel) = canvas.get(point) else {
        return HitKind::OutOfBounds;
    };

    if point.x >= layout.palette_width {
        return HitKind::Canvas(point);
    }

    match Band::from_section(layout.section_of(point.y)) {
        Band::Color(hue) => HitKind::PaletteColor { hue, color: pixel },
        Band::Clear => HitKind::ClearButton,
        Band::Size => HitKind::SizeButton,
    }
}
