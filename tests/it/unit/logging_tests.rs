//! Unit tests for the log filter.

use tracing::level_filters::LevelFilter;
use touch_painter::logging::env_filter;

#[test]
fn test_defaults_to_info() {
    assert_eq!(env_filter(None, false).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(env_filter(Some("  "), false).max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn test_rust_log_sets_the_global_level() {
    assert_eq!(env_filter(Some("warn"), false).max_level_hint(), Some(LevelFilter::WARN));
    assert_eq!(env_filter(Some("trace"), false).max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn test_verbose_raises_to_debug() {
    assert_eq!(env_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
}
