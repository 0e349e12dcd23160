// Core value types shared by the canvas, the brush and the touch dispatch.

/// One canvas pixel, packed RGB565 (5 bits red, 6 green, 5 blue).
/// Equality is bitwise; the painter never does arithmetic on colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);

    pub const RED_MASK: u16 = 0xF800;
    pub const GREEN_MASK: u16 = 0x07E0;
    pub const BLUE_MASK: u16 = 0x001F;

    /// Keep only the channels selected by `mask` (e.g. `RED_MASK | BLUE_MASK` = magenta).
    #[inline]
    pub fn masked(self, mask: u16) -> Color {
        Color(self.0 & mask)
    }
}

/// Integer position in canvas coordinates. May be negative or past the edge:
/// touch panels report marginal coordinates and every consumer clips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `width`/`height` <= 0 means empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.width && p.y < self.y + self.height
    }
}

/// What gets stamped: a color and the side length of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub color: Color,
    pub size: u32,
}

impl Brush {
    /// Pixels from the center to the edge of the square (floor of size / 2).
    #[inline]
    pub fn half(&self) -> i32 {
        (self.size / 2) as i32
    }
}
