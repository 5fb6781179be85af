mod token;

mod position;
mod spinner;
mod style;

pub use position::*;
pub use spinner::*;
pub use style::*;
pub use token::Token;
