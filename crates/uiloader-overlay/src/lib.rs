//! Loader overlay model: spinner structure, vertical layout, and the view a
//! renderer paints from a validated [`uiloader_config::LoaderConfig`].

pub mod layout;
pub mod session;
pub mod signals;
pub mod spinner;
pub mod view;

pub use layout::{classify, compute_layout, LayoutCase, LayoutInputs, LayoutOutputs, TopOffset};
pub use session::LoaderSession;
pub use signals::{OverlaySignals, Visibility};
pub use spinner::{resolve_spinner, ResolvedSpinner, SpinnerCatalogue, SPINNER_CATALOGUE};
pub use view::LoaderView;
