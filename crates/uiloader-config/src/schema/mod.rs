//! Configuration schema types for the loader overlay.
//!
//! [`LoaderConfig`] is both the shape of the default-configuration record
//! and the fully validated configuration handed to the overlay. Every field
//! uses `serde(default)`, so partial default files work out of the box.
//! [`LoaderOptions`] is the loosely typed input a caller supplies.

mod options;

pub use options::*;

use serde::{Deserialize, Serialize};
use uiloader_common::{Position, ProgressDirection, SpinnerType};

/// Complete loader configuration.
///
/// Sizes, gap and thickness are in pixels. Token fields are closed enums,
/// so a `LoaderConfig` can never carry an illegal position or spinner type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderConfig {
    /// Background spinner color.
    pub bgs_color: String,
    /// Background spinner opacity (0.0-1.0).
    pub bgs_opacity: f64,
    pub bgs_position: Position,
    pub bgs_size: f64,
    pub bgs_type: SpinnerType,
    /// Foreground spinner color.
    pub fgs_color: String,
    pub fgs_position: Position,
    pub fgs_size: f64,
    pub fgs_type: SpinnerType,
    /// Space inserted between stacked elements.
    pub gap: f64,
    pub logo_position: Position,
    pub logo_size: f64,
    /// Empty means no logo.
    pub logo_url: String,
    pub overlay_color: String,
    /// Progress bar color.
    pub pb_color: String,
    pub pb_direction: ProgressDirection,
    pub pb_thickness: f64,
    /// Empty means no text label.
    pub text: String,
    pub text_color: String,
    pub text_position: Position,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            bgs_color: "#00ACC1".into(),
            bgs_opacity: 0.5,
            bgs_position: Position::BottomRight,
            bgs_size: 60.0,
            bgs_type: SpinnerType::RectangleBounce,
            fgs_color: "#00ACC1".into(),
            fgs_position: Position::CenterCenter,
            fgs_size: 60.0,
            fgs_type: SpinnerType::RectangleBounce,
            gap: 24.0,
            logo_position: Position::CenterCenter,
            logo_size: 120.0,
            logo_url: String::new(),
            overlay_color: "rgba(40, 40, 40, 0.8)".into(),
            pb_color: "#00ACC1".into(),
            pb_direction: ProgressDirection::LeftToRight,
            pb_thickness: 5.0,
            text: String::new(),
            text_color: "#FFFFFF".into(),
            text_position: Position::CenterCenter,
        }
    }
}

impl LoaderConfig {
    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty()
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
