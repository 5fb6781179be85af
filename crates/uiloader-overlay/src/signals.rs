//! Read side of the overlay visibility signals.
//!
//! Whoever starts and stops loaders owns the senders; the overlay only
//! reads the latest value of each flag.

use serde::Serialize;
use tokio::sync::watch;

/// Current visibility state of the overlay layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub show_foreground: bool,
    pub show_background: bool,
    /// The foreground is playing its closing animation.
    pub foreground_closing: bool,
    pub background_closing: bool,
}

/// Receivers for the four visibility flags.
#[derive(Debug, Clone)]
pub struct OverlaySignals {
    show_foreground: watch::Receiver<bool>,
    show_background: watch::Receiver<bool>,
    foreground_closing: watch::Receiver<bool>,
    background_closing: watch::Receiver<bool>,
}

impl OverlaySignals {
    pub fn new(
        show_foreground: watch::Receiver<bool>,
        show_background: watch::Receiver<bool>,
        foreground_closing: watch::Receiver<bool>,
        background_closing: watch::Receiver<bool>,
    ) -> Self {
        Self {
            show_foreground,
            show_background,
            foreground_closing,
            background_closing,
        }
    }

    /// Latest published value of every flag.
    pub fn snapshot(&self) -> Visibility {
        Visibility {
            show_foreground: *self.show_foreground.borrow(),
            show_background: *self.show_background.borrow(),
            foreground_closing: *self.foreground_closing.borrow(),
            background_closing: *self.background_closing.borrow(),
        }
    }

    /// Return the new state if any flag was published since the last call,
    /// marking all flags as seen. A closed sender counts as unchanged.
    pub fn refresh(&mut self) -> Option<Visibility> {
        let receivers = [
            &self.show_foreground,
            &self.show_background,
            &self.foreground_closing,
            &self.background_closing,
        ];
        let changed = receivers
            .iter()
            .any(|rx| rx.has_changed().unwrap_or(false));
        if !changed {
            return None;
        }
        Some(Visibility {
            show_foreground: *self.show_foreground.borrow_and_update(),
            show_background: *self.show_background.borrow_and_update(),
            foreground_closing: *self.foreground_closing.borrow_and_update(),
            background_closing: *self.background_closing.borrow_and_update(),
        })
    }
}
