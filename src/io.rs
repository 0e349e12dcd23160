//! Collaborator seams: where touch samples come from and where the size label goes.

use crate::error::Result;
use crate::types::Point;

/// Touch controller polled once per loop iteration.
pub trait TouchPanel {
    /// All points currently touching, in display coordinates. Empty = nothing touching.
    /// An `Err` is a transient read fault; callers skip the sample.
    fn poll(&mut self) -> Result<Vec<Point>>;
}

/// A settable text field (the brush-size label).
pub trait TextLabel {
    fn set_text(&mut self, text: &str);
}

impl TextLabel for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
