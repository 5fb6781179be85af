//! Layout engine inputs and outputs.

use serde::{Serialize, Serializer};
use std::fmt;
use uiloader_common::{Band, Position, TrustedStyle};
use uiloader_config::LoaderConfig;

/// Height reserved for the text label when it is stacked with other elements.
pub const TEXT_SIZE: f64 = 24.0;

/// Everything the layout engine reads.
///
/// Sizes and gap are in pixels and must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInputs {
    pub fgs_position: Position,
    pub logo_position: Position,
    pub text_position: Position,
    pub fgs_size: f64,
    pub logo_size: f64,
    pub gap: f64,
    pub has_logo_url: bool,
    pub has_text: bool,
}

impl LayoutInputs {
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            fgs_position: config.fgs_position,
            logo_position: config.logo_position,
            text_position: config.text_position,
            fgs_size: config.fgs_size,
            logo_size: config.logo_size,
            gap: config.gap,
            has_logo_url: config.has_logo(),
            has_text: config.has_text(),
        }
    }

    pub(crate) fn spinner_centered(&self) -> bool {
        self.fgs_position == Position::CenterCenter
    }

    pub(crate) fn logo_centered(&self) -> bool {
        self.has_logo_url && self.logo_position == Position::CenterCenter
    }

    pub(crate) fn text_centered(&self) -> bool {
        self.has_text && self.text_position == Position::CenterCenter
    }
}

/// Vertical offset (`top`) of one element.
#[derive(Debug, Clone, PartialEq)]
pub enum TopOffset {
    /// Left to the stylesheet (bottom band).
    Initial,
    /// `50%`
    Centered,
    /// `30px` from the top edge.
    Edge,
    Calc(CalcExpr),
}

impl TopOffset {
    pub fn for_band(band: Band) -> Self {
        match band {
            Band::Center => Self::Centered,
            Band::Top => Self::Edge,
            Band::Bottom => Self::Initial,
        }
    }

    /// Convert for injection into a stylesheet.
    pub fn to_trusted(&self) -> Option<TrustedStyle> {
        TrustedStyle::sanitize(&self.to_string())
    }
}

impl fmt::Display for TopOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Centered => f.write_str("50%"),
            Self::Edge => f.write_str("30px"),
            Self::Calc(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl Serialize for TopOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `calc(50% ± a px ± b px ...)`, offsets applied in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalcExpr {
    terms: Vec<f64>,
}

impl CalcExpr {
    pub fn from_center() -> Self {
        Self::default()
    }

    pub fn plus(mut self, px: f64) -> Self {
        self.terms.push(px);
        self
    }

    pub fn minus(mut self, px: f64) -> Self {
        self.terms.push(-px);
        self
    }

    /// Total pixel offset from `50%`.
    pub fn offset_px(&self) -> f64 {
        self.terms.iter().sum()
    }
}

impl fmt::Display for CalcExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("calc(50%")?;
        for term in &self.terms {
            if term.is_sign_negative() {
                write!(f, " - {}px", -term)?;
            } else {
                write!(f, " + {term}px")?;
            }
        }
        f.write_str(")")
    }
}

/// Top offsets of the three movable elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOutputs {
    pub logo_top: TopOffset,
    pub spinner_top: TopOffset,
    pub text_top: TopOffset,
}

/// Which stacking rule produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutCase {
    /// Spinner, logo and text all centered.
    AllCentered,
    /// Logo above a centered spinner.
    LogoAndSpinner,
    /// Centered spinner above the text.
    SpinnerAndText,
    /// Only the spinner is centered.
    SpinnerAlone,
    /// Logo above the text, spinner placed elsewhere.
    LogoAndText,
    /// Spinner elsewhere and nothing stacked.
    Unstacked,
}
