//! Caller-supplied loader options, before defaults and validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed value from an options file.
///
/// Every option accepts a value of any type so that a wrong type is
/// reported as an invalid value instead of failing the whole file.
/// Arrays, tables and other structured values land in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Other(serde_json::Value),
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Loader options as supplied by the caller. `None` means "not supplied";
/// unsupplied fields are filled from the default record during resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderOptions {
    pub bgs_color: Option<RawValue>,
    pub bgs_opacity: Option<RawValue>,
    pub bgs_position: Option<RawValue>,
    pub bgs_size: Option<RawValue>,
    pub bgs_type: Option<RawValue>,
    pub fgs_color: Option<RawValue>,
    pub fgs_position: Option<RawValue>,
    pub fgs_size: Option<RawValue>,
    pub fgs_type: Option<RawValue>,
    pub gap: Option<RawValue>,
    pub logo_position: Option<RawValue>,
    pub logo_size: Option<RawValue>,
    pub logo_url: Option<RawValue>,
    pub overlay_color: Option<RawValue>,
    pub pb_color: Option<RawValue>,
    pub pb_direction: Option<RawValue>,
    pub pb_thickness: Option<RawValue>,
    pub text: Option<RawValue>,
    pub text_color: Option<RawValue>,
    pub text_position: Option<RawValue>,
}
