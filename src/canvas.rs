// The persistent pixel buffer everything is painted into.
// Out-of-bounds writes are dropped silently: touch hardware reports marginal coordinates near
// the edges, and a brush stamped at the border simply loses its outside half.

use crate::types::{Color, Point, Rect};

#[derive(Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>, // row-major, length = width * height
}

impl Canvas {
    /// A `width` x `height` buffer with every pixel set to `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self { width, height, pixels: vec![background; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| p.y as usize * self.width + p.x as usize)
    }

    /// Pixel at `p`, or `None` outside the canvas.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Put a pixel if `p` is inside; otherwise do nothing.
    #[inline]
    pub fn set(&mut self, p: Point, color: Color) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = color;
        }
    }

    /// Fill `rect` (clipped to the canvas) with `color`, one row slice at a time.
    pub fn fill(&mut self, rect: Rect, color: Color) {
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = (rect.x.saturating_add(rect.width)).clamp(0, self.width as i32) as usize;
        let y1 = (rect.y.saturating_add(rect.height)).clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for row in self.pixels.chunks_exact_mut(self.width).take(y1).skip(y0) {
            row[x0..x1].fill(color);
        }
    }

    /// Raw row-major pixels (for presenting).
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}
