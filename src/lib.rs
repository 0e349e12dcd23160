//! Touch-driven raster painting surface.
//!
//! A fixed-size RGB565 canvas with a nine-band palette strip on the left (seven hues, CLEAR,
//! SIZE) and a drawing area on the right. Touch samples are classified per band and turned into
//! continuous square-brush strokes; the two buttons fire once per touch.

pub mod brush;
pub mod canvas;
pub mod color;
pub mod config;
pub mod debounce;
pub mod draw;
pub mod error;
pub mod io;
pub mod layout;
pub mod logging;
pub mod overlay;
pub mod painter;
pub mod palette;
pub mod stroke;
pub mod types;
