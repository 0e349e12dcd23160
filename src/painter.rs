//! Touch sample dispatch: classify -> (button latch | palette pick | stroke).
//!
//! `Painter` owns the canvas, the band layout and all mutable UI state. The main loop feeds it
//! one poll result per iteration; nothing here blocks or fails.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::config::Config;
use crate::debounce::ButtonLatch;
use crate::error::Result;
use crate::io::TextLabel;
use crate::layout::{HitKind, Hue, PaletteLayout, classify};
use crate::palette::bake_palette;
use crate::stroke::{StrokeStep, StrokeTracker};
use crate::types::{Brush, Color, Point};

/// Text shown on the SIZE button.
pub fn size_label_text(size: u32) -> String {
    format!("SIZE {size}")
}

/// Cyclic brush size selection.
#[derive(Clone, Debug)]
pub struct BrushCycle {
    sizes: Vec<u32>,
    index: usize,
}

impl BrushCycle {
    /// `sizes` must be non-empty (guaranteed by `Config::validate`); `index` wraps.
    pub fn new(sizes: Vec<u32>, index: usize) -> Self {
        let index = if sizes.is_empty() { 0 } else { index % sizes.len() };
        Self { sizes, index }
    }

    pub fn current(&self) -> u32 {
        self.sizes.get(self.index).copied().unwrap_or(1)
    }

    /// Step to the next size, wrapping to the first. Returns the new size.
    pub fn advance(&mut self) -> u32 {
        if !self.sizes.is_empty() {
            self.index = (self.index + 1) % self.sizes.len();
        }
        self.current()
    }
}

/// Everything that changes while painting.
#[derive(Clone, Debug)]
pub struct PainterState {
    pub color: Color,
    pub brush: BrushCycle,
    pub stroke: StrokeTracker,
    pub clear_button: ButtonLatch,
    pub size_button: ButtonLatch,
    /// When the last touch sample was processed (for the sample-rate gate).
    pub last_sample: Option<Instant>,
}

impl PainterState {
    pub fn new(config: &Config) -> Self {
        let cooldown = config.button_cooldown();
        Self {
            color: Color::WHITE,
            brush: BrushCycle::new(config.brush_sizes.clone(), config.initial_brush),
            stroke: StrokeTracker::new(),
            clear_button: ButtonLatch::new(cooldown),
            size_button: ButtonLatch::new(cooldown),
            last_sample: None,
        }
    }

    pub fn brush(&self) -> Brush {
        Brush { color: self.color, size: self.brush.current() }
    }

    /// Touch lifted: end the stroke and unlatch both buttons.
    pub fn release(&mut self) {
        self.stroke.reset();
        self.clear_button.release();
        self.size_button.release();
    }
}

/// What one sample did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintEvent {
    ColorPicked { hue: Hue, color: Color },
    Cleared,
    BrushResized(u32),
    /// A button was hit but its latch swallowed the press.
    ButtonHeld,
    Painted(StrokeStep),
    Released,
    /// Too soon after the previous sample.
    Throttled,
    /// Outside the display, or a failed poll.
    Skipped,
}

pub struct Painter {
    canvas: Canvas,
    layout: PaletteLayout,
    state: PainterState,
    touch_delay: Duration,
}

impl Painter {
    /// Build the canvas: black background, then the baked palette strip.
    pub fn new(config: &Config) -> Self {
        let mut canvas = Canvas::new(config.width, config.height, Color::BLACK);
        let layout = PaletteLayout::new(config.width, config.height, config.palette_width);
        bake_palette(&mut canvas, &layout);

        Self {
            canvas,
            layout,
            state: PainterState::new(config),
            touch_delay: config.touch_delay(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn layout(&self) -> &PaletteLayout {
        &self.layout
    }

    pub fn state(&self) -> &PainterState {
        &self.state
    }

    /// One poll of the touch panel. Only the first reported point is used; an empty poll is a
    /// release; a failed poll is logged and skipped without resetting anything.
    pub fn handle_poll(
        &mut self,
        poll: Result<Vec<Point>>,
        now: Instant,
        label: &mut dyn TextLabel,
    ) -> PaintEvent {
        match poll {
            Ok(points) => match points.first() {
                Some(&point) => self.handle_touch(point, now, label),
                None => {
                    self.handle_release();
                    PaintEvent::Released
                }
            },
            Err(e) => {
                warn!("Skipping touch sample: {e}");
                PaintEvent::Skipped
            }
        }
    }

    /// A finger is down at `point`.
    pub fn handle_touch(
        &mut self,
        point: Point,
        now: Instant,
        label: &mut dyn TextLabel,
    ) -> PaintEvent {
        if let Some(last) = self.state.last_sample {
            if now.saturating_duration_since(last) <= self.touch_delay {
                return PaintEvent::Throttled;
            }
        }

        let hit = classify(&self.canvas, &self.layout, point);
        if hit == HitKind::OutOfBounds {
            return PaintEvent::Skipped;
        }
        self.state.last_sample = Some(now);

        match hit {
            HitKind::Canvas(p) => {
                let step = self.state.stroke.extend(&mut self.canvas, p, self.state.brush());
                if let StrokeStep::Started(p) = step {
                    debug!(x = p.x, y = p.y, size = self.state.brush.current(), "Stroke started");
                }
                PaintEvent::Painted(step)
            }
            HitKind::PaletteColor { hue, color } => {
                self.state.stroke.reset();
                self.state.color = color;
                debug!("Color: {} ({:#06x})", hue.name(), color.0);
                PaintEvent::ColorPicked { hue, color }
            }
            HitKind::ClearButton => {
                self.state.stroke.reset();
                if self.state.clear_button.press(now) {
                    self.clear();
                    PaintEvent::Cleared
                } else {
                    PaintEvent::ButtonHeld
                }
            }
            HitKind::SizeButton => {
                self.state.stroke.reset();
                if self.state.size_button.press(now) {
                    let size = self.state.brush.advance();
                    label.set_text(&size_label_text(size));
                    info!("Brush size: {size}");
                    PaintEvent::BrushResized(size)
                } else {
                    PaintEvent::ButtonHeld
                }
            }
            HitKind::OutOfBounds => PaintEvent::Skipped,
        }
    }

    /// Nothing touching.
    pub fn handle_release(&mut self) {
        self.state.release();
    }

    /// Wipe the drawing area to black; the palette strip stays.
    pub fn clear(&mut self) {
        self.canvas.fill(self.layout.drawing_area(), Color::BLACK);
        self.state.stroke.reset();
        info!("Cleared");
    }
}
