//! Log filter setup.
//!
//! `RUST_LOG` wins when set; otherwise everything logs at `info`. `--verbose` raises the
//! global level to `debug` on top of whatever `RUST_LOG` says.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`-style `directives`. Missing, blank or unparsable
/// directives fall back to `info`.
pub fn env_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Install the global fmt subscriber.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), verbose))
        .init();
}
