//! Everything the renderer needs to paint the overlay.

use serde::Serialize;
use tracing::warn;
use uiloader_common::{OverlayError, TrustedUrl};
use uiloader_config::LoaderConfig;

use crate::layout::{classify, compute_layout, LayoutCase, LayoutInputs, LayoutOutputs};
use crate::spinner::{resolve_spinner, ResolvedSpinner, SpinnerCatalogue, SPINNER_CATALOGUE};

/// Validated configuration plus derived spinner structure and offsets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderView {
    pub config: LoaderConfig,
    pub foreground: ResolvedSpinner,
    pub background: ResolvedSpinner,
    /// Sanitized logo source; `None` without a logo or when the URL was refused.
    pub logo_src: Option<TrustedUrl>,
    pub layout: LayoutOutputs,
    pub layout_case: LayoutCase,
}

impl LoaderView {
    /// Build the view from a validated config using the built-in catalogue.
    pub fn build(config: LoaderConfig) -> Result<Self, OverlayError> {
        Self::build_with(config, &SPINNER_CATALOGUE)
    }

    pub fn build_with(
        config: LoaderConfig,
        catalogue: &SpinnerCatalogue,
    ) -> Result<Self, OverlayError> {
        let foreground = resolve_spinner(config.fgs_type, catalogue)?;
        let background = resolve_spinner(config.bgs_type, catalogue)?;
        let inputs = LayoutInputs::from_config(&config);

        Ok(Self {
            logo_src: trusted_logo(&config.logo_url),
            layout: compute_layout(&inputs),
            layout_case: classify(&inputs),
            config,
            foreground,
            background,
        })
    }
}

fn trusted_logo(url: &str) -> Option<TrustedUrl> {
    if url.is_empty() {
        return None;
    }
    let trusted = TrustedUrl::sanitize(url);
    if trusted.is_none() {
        warn!("refusing unsafe logo URL {url:?}");
    }
    trusted
}
