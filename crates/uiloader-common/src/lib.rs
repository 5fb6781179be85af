pub mod errors;
pub mod types;

pub use errors::{ConfigError, LoaderError, OverlayError, UnknownToken};
pub use types::{Band, Position, ProgressDirection, SpinnerType, Token, TrustedStyle, TrustedUrl};

pub type Result<T> = std::result::Result<T, LoaderError>;
