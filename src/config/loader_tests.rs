//! Tests for config file loading and overlay resolution.

use super::*;
use std::fs;

// ===== Test Helpers =====

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("minimap_loader_tests");
    fs::create_dir_all(&dir).expect("create temp config dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp config");
    path
}

// ===== load_file =====

#[test]
fn load_file_returns_none_for_missing_file() {
    let path = PathBuf::from("/nonexistent/minimap/config.toml");
    let result = load_file(&path).expect("missing file is not an error");
    assert_eq!(result, None);
}

#[test]
fn load_file_parses_full_config() {
    let path = write_temp_config(
        "full.toml",
        r#"
zoom_difference = 3
border_color = "333333"
background_color = "ffffff"
rectangle = false
rectangle_border_width = 1
rectangle_color = "f00"
rectangle_opacity = 0.5
up_icon = "arrow-up.svg"
down_icon = "arrow-down.svg"
icon_width = 20
icon_height = 20
box_width = 200
box_height = 200
"#,
    );

    let parsed = load_file(&path)
        .expect("valid file loads")
        .expect("file exists");
    assert_eq!(parsed.zoom_difference, Some(3));
    assert_eq!(parsed.border_color.as_deref(), Some("333333"));
    assert_eq!(parsed.rectangle, Some(false));
    assert_eq!(parsed.rectangle_opacity, Some(0.5));
    assert_eq!(parsed.box_width, Some(200));
}

#[test]
fn load_file_parses_partial_config() {
    let path = write_temp_config("partial.toml", "zoom_difference = 2\n");

    let parsed = load_file(&path)
        .expect("valid file loads")
        .expect("file exists");
    assert_eq!(parsed.zoom_difference, Some(2));
    assert_eq!(parsed.border_color, None);
    assert_eq!(parsed.rectangle, None);
}

#[test]
fn load_file_rejects_invalid_toml() {
    let path = write_temp_config("broken.toml", "zoom_difference = = 2\n");

    let err = load_file(&path).expect_err("broken TOML should fail");
    match err {
        ConfigError::ParseError { path: err_path, .. } => {
            assert_eq!(err_path, path);
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn load_file_rejects_unknown_keys() {
    let path = write_temp_config("unknown.toml", "not_an_option = true\n");

    let err = load_file(&path).expect_err("unknown key should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

// ===== resolve =====

#[test]
fn resolve_without_overlay_yields_defaults() {
    let config = resolve(None).expect("defaults always resolve");
    assert_eq!(config, OverviewConfig::default());
}

#[test]
fn resolve_with_empty_overlay_yields_defaults() {
    let config = resolve(Some(ConfigFile::default())).expect("empty overlay resolves");
    assert_eq!(config, OverviewConfig::default());
}

#[test]
fn resolve_overrides_only_set_options() {
    let overlay = ConfigFile {
        rectangle_color: Some("f00".to_string()),
        box_width: Some(200),
        box_height: Some(200),
        ..ConfigFile::default()
    };

    let config = resolve(Some(overlay)).expect("overlay resolves");
    assert_eq!(config.rectangle_color.as_str(), "f00");
    assert_eq!(config.box_width, 200);
    assert_eq!(config.box_height, 200);
    // Untouched options keep their defaults.
    assert_eq!(config.zoom_difference, 4);
    assert_eq!(config.border_color.as_str(), "979797");
    assert!(config.rectangle_enabled);
}

#[test]
fn resolve_rejects_invalid_color() {
    let overlay = ConfigFile {
        rectangle_color: Some("not-a-color".to_string()),
        ..ConfigFile::default()
    };

    let err = resolve(Some(overlay)).expect_err("bad color should fail");
    match err {
        ConfigError::InvalidOption { option, .. } => {
            assert_eq!(option, "rectangle_color");
        }
        other => panic!("Expected InvalidOption, got {other:?}"),
    }
}

#[test]
fn resolve_rejects_out_of_range_opacity() {
    for opacity in [-0.1, 1.1, 2.0] {
        let overlay = ConfigFile {
            rectangle_opacity: Some(opacity),
            ..ConfigFile::default()
        };
        let err = resolve(Some(overlay)).expect_err("out-of-range opacity should fail");
        assert!(
            matches!(
                err,
                ConfigError::InvalidOption {
                    option: "rectangle_opacity",
                    ..
                }
            ),
            "opacity {opacity} should be rejected"
        );
    }
}

#[test]
fn resolve_accepts_boundary_opacities() {
    for opacity in [0.0, 1.0] {
        let overlay = ConfigFile {
            rectangle_opacity: Some(opacity),
            ..ConfigFile::default()
        };
        let config = resolve(Some(overlay)).expect("boundary opacity resolves");
        assert_eq!(config.rectangle_opacity, opacity);
    }
}

#[test]
fn default_config_path_ends_with_crate_subpath() {
    let path = default_config_path();
    let rendered = path.to_string_lossy();
    assert!(
        rendered.ends_with("config.toml"),
        "unexpected path: {rendered}"
    );
    assert!(rendered.contains("minimap"), "unexpected path: {rendered}");
}
