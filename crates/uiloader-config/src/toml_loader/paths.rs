//! Where the options file lives, and writing the documented template there.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use uiloader_common::ConfigError;

use super::template::default_config_toml;

/// Environment variable that overrides the options file location.
pub const CONFIG_PATH_ENV: &str = "UILOADER_CONFIG";

const APP_DIR: &str = "uiloader";
const FILE_NAME: &str = "loader.toml";

/// Options file path: `$UILOADER_CONFIG` when set and non-empty, otherwise
/// `<platform config dir>/uiloader/loader.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    options_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

fn options_path(
    override_path: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    match override_path.filter(|p| !p.is_empty()) {
        Some(path) => Ok(PathBuf::from(path)),
        None => config_dir
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or_else(|| ConfigError::ParseError("no platform config directory".into())),
    }
}

/// Write the documented template to `path`, creating missing parent
/// directories. An existing file is never replaced.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |action: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {action} {}: {e}", path.display()))
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create the directory for", e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => {
                ConfigError::ParseError(format!("{} already exists", path.display()))
            }
            _ => io_error("create", e),
        })?;
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_error("write", e))?;

    info!(path = %path.display(), "wrote options template");
    Ok(())
}
