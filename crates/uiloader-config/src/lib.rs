//! Loader overlay configuration.
//!
//! Provides the default configuration record, the loosely typed options a
//! caller supplies, validation that turns options into a legal
//! [`LoaderConfig`], and TOML/JSON options file loading.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use uiloader_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load options");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{LoaderConfig, LoaderOptions, RawValue};
pub use validation::{resolve, resolve_and_report, Diagnostic, Diagnostics, Resolution};

use uiloader_common::ConfigError;

/// Load options from the platform default path and resolve them against
/// the built-in defaults, logging a diagnostic for every rejected value.
pub fn load_config() -> Result<LoaderConfig, ConfigError> {
    let options = toml_loader::load_default()?;
    Ok(resolve_and_report(&options, &LoaderConfig::default()))
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LoaderConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_uses_camel_case_keys() {
        let json = config_to_json(&LoaderConfig::default());
        assert!(json.contains("\"fgsType\": \"rectangle-bounce\""));
        assert!(json.contains("\"bgsPosition\": \"bottom-right\""));
        assert!(json.contains("\"pbDirection\": \"ltr\""));
        assert!(json.contains("\"overlayColor\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = LoaderConfig::default();
        let parsed: LoaderConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed, config);
    }
}
