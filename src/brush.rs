// Square brush stamping and the line interpolation that turns two touch samples into a
// gap-free segment of stamps.

use crate::canvas::Canvas;
use crate::types::{Brush, Point, Rect};

/// Stamp a filled square of side `2 * (size / 2) + 1` centered on `center`.
/// Pixels that fall outside the canvas are skipped (the fill clips).
pub fn stamp_brush(canvas: &mut Canvas, center: Point, brush: Brush) {
    let half = brush.half();
    let side = 2 * half + 1;
    canvas.fill(Rect::new(center.x - half, center.y - half, side, side), brush.color);
}

/// Stamp the brush at every step along `from -> to`.
///
/// The step count is the Chebyshev distance `max(|dx|, |dy|)`, so consecutive stamps are at
/// most one pixel apart on either axis and a brush of size >= 1 leaves no holes. Each
/// interpolated coordinate is floored (`div_euclid`), which for on-screen coordinates is plain
/// truncation of `from + t * d`; both endpoints are stamped exactly.
pub fn draw_line(canvas: &mut Canvas, from: Point, to: Point, brush: Brush) {
    let dx = (to.x - from.x) as i64;
    let dy = (to.y - from.y) as i64;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        stamp_brush(canvas, from, brush);
        return;
    }

    for i in 0..=steps {
        let x = from.x + (i * dx).div_euclid(steps) as i32;
        let y = from.y + (i * dy).div_euclid(steps) as i32;
        stamp_brush(canvas, Point::new(x, y), brush);
    }
}
