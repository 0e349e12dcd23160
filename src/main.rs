// What you SEE:
// • Left strip: seven color gradients, then CLEAR and SIZE buttons.
// • Hold Left Mouse (the "finger") on a gradient to pick the color under it.
// • Drag in the right area to paint; strokes are continuous between samples.
// • CLEAR wipes the drawing area, SIZE cycles the brush. ESC quits.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use touch_painter::config::{Config, Overrides};
use touch_painter::draw::Drawer;
use touch_painter::io::TouchPanel;
use touch_painter::logging;
use touch_painter::overlay::ControlOverlay;
use touch_painter::painter::{Painter, size_label_text};

/// Touch-driven painting surface
#[derive(Parser)]
#[command(name = "touch-painter")]
#[command(about = "Paint on a fixed-size canvas with a palette strip and two buttons")]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Display height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Width of the palette strip
    #[arg(long)]
    palette_width: Option<usize>,

    /// Minimum milliseconds between two presses of the same button
    #[arg(long)]
    cooldown_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            height: self.height,
            palette_width: self.palette_width,
            cooldown_ms: self.cooldown_ms,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // File (or defaults) first, then CLI overrides, then one validation pass.
    let config = Config::load(cli.config.as_deref(), &cli.overrides())
        .with_context(|| format!("loading config {:?}", cli.config))?;

    /* --- Canvas + palette ---
       Visual: black drawing area, gradient bands on the left. */
    info!("Building color palette...");
    let mut painter = Painter::new(&config);
    let mut overlay = ControlOverlay::new(
        *painter.layout(),
        size_label_text(painter.state().brush.current()),
    );

    /* --- Window ---
       Visual: the window opens showing the canvas and the two button tiles. */
    let mut drawer = Drawer::new(&config.title, config.width, config.height, config.target_fps)?;

    info!("Touch Painter ready");
    info!("Display: {}x{}", config.width, config.height);
    info!("Palette: {}px wide", config.palette_width);
    info!(
        "Drawing area: {}x{}px",
        config.width - config.palette_width,
        config.height
    );

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) One touch sample, dispatched to completion before the next one.
        let poll = drawer.poll();
        painter.handle_poll(poll, Instant::now(), &mut overlay);

        // 2) Present (this is when the on-screen image updates).
        drawer.present(painter.canvas(), &overlay)?;
    }

    Ok(())
}
