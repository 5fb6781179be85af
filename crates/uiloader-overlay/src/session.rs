//! Long-lived loader state that is recomputed on every option update.

use tracing::debug;
use uiloader_common::OverlayError;
use uiloader_config::{resolve, Diagnostics, LoaderConfig, LoaderOptions};

use crate::spinner::{SpinnerCatalogue, SPINNER_CATALOGUE};
use crate::view::LoaderView;

/// Holds the current [`LoaderView`] for one overlay.
///
/// Every update resolves the complete options again; nothing is patched
/// incrementally. Diagnostics already reported for the previous options are
/// not logged a second time.
#[derive(Debug)]
pub struct LoaderSession {
    defaults: LoaderConfig,
    catalogue: &'static SpinnerCatalogue,
    view: LoaderView,
    diagnostics: Diagnostics,
}

impl LoaderSession {
    pub fn new(defaults: LoaderConfig) -> Result<Self, OverlayError> {
        Self::with_catalogue(defaults, &SPINNER_CATALOGUE)
    }

    pub fn with_catalogue(
        defaults: LoaderConfig,
        catalogue: &'static SpinnerCatalogue,
    ) -> Result<Self, OverlayError> {
        let view = LoaderView::build_with(defaults.clone(), catalogue)?;
        Ok(Self {
            defaults,
            catalogue,
            view,
            diagnostics: Diagnostics::default(),
        })
    }

    /// Apply a new set of options.
    ///
    /// Returns the diagnostics that were logged by this update, i.e. those
    /// not already present after the previous one. On error the previous
    /// view is kept.
    pub fn update(&mut self, options: &LoaderOptions) -> Result<Diagnostics, OverlayError> {
        let resolution = resolve(options, &self.defaults);
        let view = LoaderView::build_with(resolution.config, self.catalogue)?;

        let mut fresh = Diagnostics::default();
        for diagnostic in &resolution.diagnostics {
            if !self.diagnostics.contains(diagnostic) {
                fresh.push(diagnostic.clone());
            }
        }
        fresh.emit();
        debug!(
            layout = ?view.layout_case,
            rejected = resolution.diagnostics.len(),
            "loader view recomputed"
        );

        self.view = view;
        self.diagnostics = resolution.diagnostics;
        Ok(fresh)
    }

    pub fn view(&self) -> &LoaderView {
        &self.view
    }

    /// Diagnostics for the options currently applied.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn defaults(&self) -> &LoaderConfig {
        &self.defaults
    }
}
