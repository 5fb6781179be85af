//! Static spinner catalogue.

use serde::Serialize;
use uiloader_common::SpinnerType;

/// Structure of one spinner style: how many cells it is drawn with and
/// which stylesheet class animates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinnerDescriptor {
    pub division_count: usize,
    pub style_class: &'static str,
}

impl SpinnerDescriptor {
    pub const fn new(division_count: usize, style_class: &'static str) -> Self {
        assert!(division_count >= 1, "a spinner has at least one cell");
        Self {
            division_count,
            style_class,
        }
    }
}

/// Read-only mapping from spinner type to its descriptor.
#[derive(Debug)]
pub struct SpinnerCatalogue {
    entries: &'static [(SpinnerType, SpinnerDescriptor)],
}

impl SpinnerCatalogue {
    pub const fn new(entries: &'static [(SpinnerType, SpinnerDescriptor)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, kind: SpinnerType) -> Option<&SpinnerDescriptor> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, descriptor)| descriptor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpinnerType, &SpinnerDescriptor)> {
        self.entries.iter().map(|(k, descriptor)| (*k, descriptor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every built-in spinner style.
pub static SPINNER_CATALOGUE: SpinnerCatalogue = SpinnerCatalogue::new(&BUILT_IN);

static BUILT_IN: [(SpinnerType, SpinnerDescriptor); 22] = [
    (SpinnerType::BallScaleMultiple, SpinnerDescriptor::new(3, "sk-ball-scale-multiple")),
    (SpinnerType::BallSpin, SpinnerDescriptor::new(8, "sk-ball-spin")),
    (SpinnerType::BallSpinClockwise, SpinnerDescriptor::new(8, "sk-ball-spin-clockwise")),
    (
        SpinnerType::BallSpinClockwiseFadeRotating,
        SpinnerDescriptor::new(8, "sk-ball-spin-clockwise-fade-rotating"),
    ),
    (SpinnerType::BallSpinFadeRotating, SpinnerDescriptor::new(8, "sk-ball-spin-fade-rotating")),
    (SpinnerType::ChasingDots, SpinnerDescriptor::new(2, "sk-chasing-dots")),
    (SpinnerType::Circle, SpinnerDescriptor::new(12, "sk-circle")),
    (SpinnerType::CubeGrid, SpinnerDescriptor::new(9, "sk-cube-grid")),
    (SpinnerType::DoubleBounce, SpinnerDescriptor::new(2, "sk-double-bounce")),
    (SpinnerType::FadingCircle, SpinnerDescriptor::new(12, "sk-fading-circle")),
    (SpinnerType::FoldingCube, SpinnerDescriptor::new(4, "sk-folding-cube")),
    (SpinnerType::Pulse, SpinnerDescriptor::new(1, "sk-pulse")),
    (SpinnerType::RectangleBounce, SpinnerDescriptor::new(5, "sk-rectangle-bounce")),
    (SpinnerType::RectangleBounceParty, SpinnerDescriptor::new(5, "sk-rectangle-bounce-party")),
    (
        SpinnerType::RectangleBouncePulseOut,
        SpinnerDescriptor::new(5, "sk-rectangle-bounce-pulse-out"),
    ),
    (
        SpinnerType::RectangleBouncePulseOutRapid,
        SpinnerDescriptor::new(5, "sk-rectangle-bounce-pulse-out-rapid"),
    ),
    (SpinnerType::RotatingPlane, SpinnerDescriptor::new(1, "sk-rotating-plane")),
    (SpinnerType::SquareJellyBox, SpinnerDescriptor::new(2, "sk-square-jelly-box")),
    (SpinnerType::SquareLoader, SpinnerDescriptor::new(1, "sk-square-loader")),
    (SpinnerType::ThreeBounce, SpinnerDescriptor::new(3, "sk-three-bounce")),
    (SpinnerType::ThreeStrings, SpinnerDescriptor::new(3, "sk-three-strings")),
    (SpinnerType::WanderingCubes, SpinnerDescriptor::new(2, "sk-wandering-cubes")),
];
