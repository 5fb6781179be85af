//! Spinner resolution: spinner type → cell count and style class.

mod catalogue;

pub use catalogue::{SpinnerCatalogue, SpinnerDescriptor, SPINNER_CATALOGUE};

use serde::Serialize;
use std::ops::Range;
use uiloader_common::{OverlayError, SpinnerType};

/// Structural parameters of a spinner, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSpinner {
    pub kind: SpinnerType,
    pub division_count: usize,
    pub style_class: &'static str,
}

impl ResolvedSpinner {
    /// One placeholder per cell the renderer has to emit.
    pub fn cells(&self) -> Range<usize> {
        0..self.division_count
    }
}

/// Look up `kind` in `catalogue`.
///
/// `kind` is expected to be validated already. A catalogue without an entry
/// for it is a programming error and is reported as
/// [`OverlayError::UnknownSpinner`]; the built-in catalogue covers every
/// spinner type.
pub fn resolve_spinner(
    kind: SpinnerType,
    catalogue: &SpinnerCatalogue,
) -> Result<ResolvedSpinner, OverlayError> {
    let descriptor = catalogue.get(kind).ok_or_else(|| {
        tracing::error!(spinner = %kind, "spinner type missing from catalogue");
        OverlayError::UnknownSpinner(kind)
    })?;
    Ok(ResolvedSpinner {
        kind,
        division_count: descriptor.division_count,
        style_class: descriptor.style_class,
    })
}
