//! Option validation.
//!
//! Resolution fills unsupplied options from a default record, then checks
//! every token field against its enumeration and coerces every numeric
//! field. Invalid values never fail resolution: each one is replaced by the
//! default and reported as a [`Diagnostic`].

mod diagnostics;
mod helpers;


pub use diagnostics::{Diagnostic, Diagnostics};
pub use helpers::{coerce_number, validate_number, validate_text, validate_token};

use uiloader_common::{ConfigError, Token};

use crate::schema::{LoaderConfig, LoaderOptions, RawValue};

/// Outcome of resolving options against a default record.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub config: LoaderConfig,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// Treat any diagnostic as an error.
    pub fn into_strict(self) -> Result<LoaderConfig, ConfigError> {
        if self.diagnostics.is_empty() {
            return Ok(self.config);
        }
        let messages: Vec<String> = self.diagnostics.iter().map(ToString::to_string).collect();
        Err(ConfigError::ValidationError(messages.join("; ")))
    }
}

/// Resolve caller options against `defaults`, collecting diagnostics.
pub fn resolve(options: &LoaderOptions, defaults: &LoaderConfig) -> Resolution {
    let mut diagnostics = Diagnostics::default();
    let d = &mut diagnostics;

    let config = LoaderConfig {
        bgs_color: validate_text(d, "bgsColor", options.bgs_color.as_ref(), &defaults.bgs_color),
        bgs_opacity: validate_number(d, "bgsOpacity", options.bgs_opacity.as_ref(), defaults.bgs_opacity),
        bgs_position: token_field(d, "bgsPosition", options.bgs_position.as_ref(), defaults.bgs_position),
        bgs_size: validate_number(d, "bgsSize", options.bgs_size.as_ref(), defaults.bgs_size),
        bgs_type: token_field(d, "bgsType", options.bgs_type.as_ref(), defaults.bgs_type),
        fgs_color: validate_text(d, "fgsColor", options.fgs_color.as_ref(), &defaults.fgs_color),
        fgs_position: token_field(d, "fgsPosition", options.fgs_position.as_ref(), defaults.fgs_position),
        fgs_size: validate_number(d, "fgsSize", options.fgs_size.as_ref(), defaults.fgs_size),
        fgs_type: token_field(d, "fgsType", options.fgs_type.as_ref(), defaults.fgs_type),
        gap: validate_number(d, "gap", options.gap.as_ref(), defaults.gap),
        logo_position: token_field(d, "logoPosition", options.logo_position.as_ref(), defaults.logo_position),
        logo_size: validate_number(d, "logoSize", options.logo_size.as_ref(), defaults.logo_size),
        logo_url: validate_text(d, "logoUrl", options.logo_url.as_ref(), &defaults.logo_url),
        overlay_color: validate_text(d, "overlayColor", options.overlay_color.as_ref(), &defaults.overlay_color),
        pb_color: validate_text(d, "pbColor", options.pb_color.as_ref(), &defaults.pb_color),
        pb_direction: token_field(d, "pbDirection", options.pb_direction.as_ref(), defaults.pb_direction),
        pb_thickness: validate_number(d, "pbThickness", options.pb_thickness.as_ref(), defaults.pb_thickness),
        text: validate_text(d, "text", options.text.as_ref(), &defaults.text),
        text_color: validate_text(d, "textColor", options.text_color.as_ref(), &defaults.text_color),
        text_position: token_field(d, "textPosition", options.text_position.as_ref(), defaults.text_position),
    };

    Resolution {
        config,
        diagnostics,
    }
}

impl LoaderConfig {
    /// Build an application-level default record: `options` resolved
    /// against the built-in defaults.
    pub fn with_overrides(options: &LoaderOptions) -> Resolution {
        resolve(options, &LoaderConfig::default())
    }
}

/// Resolve and write every diagnostic to the log.
pub fn resolve_and_report(options: &LoaderOptions, defaults: &LoaderConfig) -> LoaderConfig {
    let resolution = resolve(options, defaults);
    resolution.diagnostics.emit();
    resolution.config
}

fn token_field<T: Token>(
    diagnostics: &mut Diagnostics,
    field: &str,
    raw: Option<&RawValue>,
    default: T,
) -> T {
    // Unsupplied fields take the default token before validation.
    let value = raw.map_or_else(|| default.as_str().to_string(), ToString::to_string);
    validate_token(diagnostics, field, Some(&value), default)
}
