//! Core options loading: read from path or platform default.

use crate::schema::LoaderOptions;
use std::path::Path;
use tracing::{debug, info};
use uiloader_common::ConfigError;

use super::paths::default_config_path;

/// Supported options file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Toml,
    Json,
}

impl OptionsFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Load loader options from a TOML or JSON file.
///
/// The syntax is picked from the extension (`.json` is JSON, anything else
/// TOML). Unknown keys are ignored; values are validated later, during
/// resolution.
pub fn load_from_path(path: &Path) -> Result<LoaderOptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let options = parse_options(&content, OptionsFormat::from_path(path))?;
    info!("loaded loader options from {}", path.display());
    Ok(options)
}

/// Parse options from an in-memory document.
pub fn parse_options(content: &str, format: OptionsFormat) -> Result<LoaderOptions, ConfigError> {
    match format {
        OptionsFormat::Json => serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}"))),
        OptionsFormat::Toml => toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}"))),
    }
}

/// Load options from the platform-specific default path.
///
/// On Linux: `~/.config/uiloader/loader.toml`
///
/// A missing file is not an error: every option is then unsupplied.
pub fn load_default() -> Result<LoaderOptions, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(options) => Ok(options),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no options file at {}, using defaults", path.display());
            Ok(LoaderOptions::default())
        }
        Err(e) => Err(e),
    }
}
