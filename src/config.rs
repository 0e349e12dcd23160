//! Runtime configuration.
//!
//! Loaded from an optional TOML file; every key is optional and falls back to the defaults
//! below (a 720x720 panel with a 160 px palette strip).

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::layout::BAND_COUNT;

/// Values given on the command line; `None` keeps the file/default value.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub palette_width: Option<usize>,
    pub cooldown_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display width in pixels.
    pub width: usize,
    /// Display height in pixels; split into nine palette bands.
    pub height: usize,
    /// Width of the left palette strip.
    pub palette_width: usize,
    /// Brush side lengths, cycled by the SIZE button.
    pub brush_sizes: Vec<u32>,
    /// Index into `brush_sizes` used at startup.
    pub initial_brush: usize,
    /// Minimum time between two activations of the same button.
    pub button_cooldown_ms: u64,
    /// Touch samples closer together than this are dropped.
    pub touch_delay_ms: u64,
    /// Window refresh rate.
    pub target_fps: usize,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            palette_width: 160,
            brush_sizes: vec![1, 3, 6, 9, 12],
            initial_brush: 2,
            button_cooldown_ms: 500,
            touch_delay_ms: 5,
            target_fps: 60,
            title: "Touch Painter".to_string(),
        }
    }
}

impl Config {
    /// Read `path` if given (otherwise start from the defaults), apply the command-line
    /// overrides, then validate once. File values only have to be valid after overriding.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(w) = overrides.width {
            self.width = w;
        }
        if let Some(h) = overrides.height {
            self.height = h;
        }
        if let Some(p) = overrides.palette_width {
            self.palette_width = p;
        }
        if let Some(ms) = overrides.cooldown_ms {
            self.button_cooldown_ms = ms;
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidConfig(msg));

        if self.width == 0 || self.height == 0 {
            return invalid(format!("display size {}x{} is empty", self.width, self.height));
        }
        if self.height < BAND_COUNT as usize {
            return invalid(format!(
                "height {} cannot hold {BAND_COUNT} palette bands",
                self.height
            ));
        }
        if self.palette_width == 0 || self.palette_width >= self.width {
            return invalid(format!(
                "palette_width {} must be in 1..{}",
                self.palette_width, self.width
            ));
        }
        if self.brush_sizes.is_empty() {
            return invalid("brush_sizes is empty".to_string());
        }
        if self.brush_sizes.contains(&0) {
            return invalid("brush_sizes contains 0".to_string());
        }
        if self.initial_brush >= self.brush_sizes.len() {
            return invalid(format!(
                "initial_brush {} out of range for {} sizes",
                self.initial_brush,
                self.brush_sizes.len()
            ));
        }
        if self.target_fps == 0 {
            return invalid("target_fps must be positive".to_string());
        }
        Ok(())
    }

    pub fn button_cooldown(&self) -> Duration {
        Duration::from_millis(self.button_cooldown_ms)
    }

    pub fn touch_delay(&self) -> Duration {
        Duration::from_millis(self.touch_delay_ms)
    }
}
