//! Unit tests for config loading and validation.

use std::io::Write;
use std::time::Duration;

use touch_painter::config::{Config, Overrides};
use touch_painter::error::Error;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!((config.width, config.height, config.palette_width), (720, 720, 160));
    assert_eq!(config.brush_sizes, vec![1, 3, 6, 9, 12]);
    assert_eq!(config.brush_sizes[config.initial_brush], 6);
    assert_eq!(config.button_cooldown(), Duration::from_millis(500));
    assert_eq!(config.touch_delay(), Duration::from_millis(5));
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        palette_width = 100
        brush_sizes = [2, 4]
        initial_brush = 1
        "#,
    )
    .unwrap();

    assert_eq!(config.palette_width, 100);
    assert_eq!(config.brush_sizes, vec![2, 4]);
    assert_eq!(config.initial_brush, 1);
    assert_eq!(config.width, 720);
    assert_eq!(config.button_cooldown_ms, 500);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_layouts_are_rejected() {
    let cases = [
        Config { palette_width: 720, ..Config::default() },
        Config { palette_width: 0, ..Config::default() },
        Config { height: 8, ..Config::default() },
        Config { width: 0, ..Config::default() },
        Config { brush_sizes: vec![], ..Config::default() },
        Config { brush_sizes: vec![3, 0], initial_brush: 0, ..Config::default() },
        Config { initial_brush: 5, ..Config::default() },
        Config { target_fps: 0, ..Config::default() },
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(Error::InvalidConfig(_))),
            "{config:?} should be rejected"
        );
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "width = 480\nheight = 270\npalette_width = 90").unwrap();

    let config = Config::load(Some(file.path()), &Overrides::default()).unwrap();
    assert_eq!((config.width, config.height, config.palette_width), (480, 270, 90));
}

#[test]
fn test_load_without_file_uses_defaults() {
    assert_eq!(Config::load(None, &Overrides::default()).unwrap(), Config::default());
}

#[test]
fn test_load_errors() {
    let missing = tempfile::tempdir().unwrap().path().join("nope.toml");
    let loaded = Config::load(Some(&missing), &Overrides::default());
    assert!(matches!(loaded, Err(Error::ConfigRead(_))));

    let mut bad = tempfile::NamedTempFile::new().unwrap();
    writeln!(bad, "width = \"wide\"").unwrap();
    let loaded = Config::load(Some(bad.path()), &Overrides::default());
    assert!(matches!(loaded, Err(Error::ConfigParse(_))));

    let mut impossible = tempfile::NamedTempFile::new().unwrap();
    writeln!(impossible, "palette_width = 5000").unwrap();
    let loaded = Config::load(Some(impossible.path()), &Overrides::default());
    assert!(matches!(loaded, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_overrides_apply_before_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "palette_width = 800\nbutton_cooldown_ms = 250").unwrap();

    // the file alone is impossible on the default 720 px display
    let alone = Config::load(Some(file.path()), &Overrides::default());
    assert!(matches!(alone, Err(Error::InvalidConfig(_))));

    let overrides = Overrides { width: Some(1000), ..Overrides::default() };
    let config = Config::load(Some(file.path()), &overrides).unwrap();
    assert_eq!((config.width, config.palette_width), (1000, 800));
    assert_eq!(config.button_cooldown_ms, 250);
}

#[test]
fn test_overrides_win_over_file_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "width = 480\nheight = 270\npalette_width = 90").unwrap();

    let overrides = Overrides {
        height: Some(360),
        palette_width: Some(120),
        cooldown_ms: Some(100),
        ..Overrides::default()
    };
    let config = Config::load(Some(file.path()), &overrides).unwrap();
    assert_eq!((config.width, config.height, config.palette_width), (480, 360, 120));
    assert_eq!(config.button_cooldown_ms, 100);

    let broken = Overrides { palette_width: Some(480), ..Overrides::default() };
    assert!(matches!(
        Config::load(Some(file.path()), &broken),
        Err(Error::InvalidConfig(_))
    ));
}
