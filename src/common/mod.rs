pub mod cast;
pub mod color;
pub mod error;

pub use color::*;
pub use error::*;
