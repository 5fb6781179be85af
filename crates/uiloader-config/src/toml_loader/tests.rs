//! Tests for options loading, creation, and path resolution.

use super::*;
use crate::schema::{LoaderConfig, LoaderOptions, RawValue};
use crate::validation::resolve;
use std::path::Path;
use uiloader_common::{ConfigError, SpinnerType};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_uiloader_options.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loader.toml");
    std::fs::write(
        &path,
        r##"
fgsType = "folding-cube"
fgsColor = "#ff0000"
text = "Loading..."
"##,
    )
    .unwrap();

    let options = load_from_path(&path).unwrap();
    assert_eq!(options.fgs_type, Some(RawValue::from("folding-cube")));
    assert_eq!(options.fgs_color.as_ref().and_then(RawValue::as_text), Some("#ff0000"));
    assert_eq!(options.text.as_ref().and_then(RawValue::as_text), Some("Loading..."));
    assert!(options.bgs_type.is_none());
}

#[test]
fn load_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loader.json");
    std::fs::write(&path, r#"{"logoUrl": "logo.svg", "logoSize": 80}"#).unwrap();

    let options = load_from_path(&path).unwrap();
    assert_eq!(options.logo_url.as_ref().and_then(RawValue::as_text), Some("logo.svg"));
    assert_eq!(options.logo_size, Some(RawValue::Number(80.0)));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loader.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn invalid_values_load_and_resolve_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loader.toml");
    std::fs::write(&path, "fgsType = \"spiral\"\n").unwrap();

    let options = load_from_path(&path).unwrap();
    let resolution = resolve(&options, &LoaderConfig::default());
    assert_eq!(resolution.config.fgs_type, SpinnerType::RectangleBounce);
    assert_eq!(resolution.diagnostics.len(), 1);
}

#[test]
fn parse_options_picks_syntax() {
    let toml_options = parse_options("gap = 8", OptionsFormat::Toml).unwrap();
    let json_options = parse_options(r#"{"gap": 8}"#, OptionsFormat::Json).unwrap();
    assert_eq!(toml_options, json_options);
    assert!(parse_options("gap = 8", OptionsFormat::Json).is_err());
}

#[test]
fn format_from_path() {
    assert_eq!(OptionsFormat::from_path(Path::new("a.JSON")), OptionsFormat::Json);
    assert_eq!(OptionsFormat::from_path(Path::new("a.toml")), OptionsFormat::Toml);
    assert_eq!(OptionsFormat::from_path(Path::new("loader")), OptionsFormat::Toml);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uiloader").join("loader.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let options = load_from_path(&path).unwrap();
    assert_eq!(options, LoaderOptions::default());
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loader.toml");
    std::fs::write(&path, "gap = 4\n").unwrap();

    let err = create_default_config(&path).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "gap = 4\n");
}

#[test]
fn default_config_template_uncommented_matches_defaults() {
    // Every commented assignment in the template sets the built-in default.
    let uncommented: String = default_config_toml()
        .lines()
        .filter_map(|line| line.strip_prefix("# "))
        .filter(|line| line.contains(" = "))
        .map(|line| format!("{line}\n"))
        .collect();
    let config: LoaderConfig = toml::from_str(&uncommented).unwrap();
    assert_eq!(config, LoaderConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if std::env::var_os(CONFIG_PATH_ENV).is_some() {
        return;
    }
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("uiloader"));
        assert!(path_str.ends_with("loader.toml"));
    }
}

#[test]
fn wrongly_typed_toml_values_fall_back() {
    let options = parse_options("fgsType = [\"circle\"]\nfgsSize = 80\ntext = 42", OptionsFormat::Toml)
        .unwrap();
    assert_eq!(options.fgs_size, Some(RawValue::Number(80.0)));

    let resolution = resolve(&options, &LoaderConfig::default());
    assert_eq!(resolution.config.fgs_type, SpinnerType::RectangleBounce);
    assert!((resolution.config.fgs_size - 80.0).abs() < f64::EPSILON);
    assert_eq!(resolution.config.text, "");
    assert_eq!(resolution.diagnostics.len(), 2);

    let fgs_type = resolution.diagnostics.for_field("fgsType").next().unwrap();
    assert_eq!(fgs_type.rejected.as_deref(), Some(r#"["circle"]"#));
    assert_eq!(resolution.diagnostics.for_field("text").count(), 1);
}

#[test]
fn wrongly_typed_json_values_fall_back() {
    let options = parse_options(
        r#"{"fgsPosition": {"x": 1}, "gap": 8, "fgsColor": 0, "pbThickness": [3]}"#,
        OptionsFormat::Json,
    )
    .unwrap();

    let resolution = resolve(&options, &LoaderConfig::default());
    let config = &resolution.config;
    assert_eq!(config.fgs_position, uiloader_common::Position::CenterCenter);
    assert!((config.gap - 8.0).abs() < f64::EPSILON);
    assert_eq!(config.fgs_color, "#00ACC1");
    assert!((config.pb_thickness - 5.0).abs() < f64::EPSILON);
    for field in ["fgsPosition", "fgsColor", "pbThickness"] {
        assert_eq!(resolution.diagnostics.for_field(field).count(), 1, "{field}");
    }
    assert_eq!(resolution.diagnostics.len(), 3);
}
