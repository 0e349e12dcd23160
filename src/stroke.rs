// Stroke continuity across touch samples.
// IDLE (no last point) -> first canvas sample stamps once.
// ACTIVE (has last point) -> every further canvas sample draws a segment from the last point.
// Any non-canvas hit or a touch release goes back to IDLE, so switching color/tool mid-touch
// never leaks a segment from the old context into the new one.

use crate::brush::{draw_line, stamp_brush};
use crate::canvas::Canvas;
use crate::types::{Brush, Point};

/// What a canvas sample did to the stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeStep {
    /// First sample of a stroke: a single stamp at the point.
    Started(Point),
    /// A segment from the previous sample to this one.
    Continued { from: Point, to: Point },
}

#[derive(Clone, Debug, Default)]
pub struct StrokeTracker {
    last_point: Option<Point>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// Paint the sample at `point` and remember it as the stroke's end.
    pub fn extend(&mut self, canvas: &mut Canvas, point: Point, brush: Brush) -> StrokeStep {
        let step = match self.last_point {
            Some(from) => {
                draw_line(canvas, from, point, brush);
                StrokeStep::Continued { from, to: point }
            }
            None => {
                stamp_brush(canvas, point, brush);
                StrokeStep::Started(point)
            }
        };
        self.last_point = Some(point);
        step
    }

    /// Back to IDLE.
    pub fn reset(&mut self) {
        self.last_point = None;
    }
}
