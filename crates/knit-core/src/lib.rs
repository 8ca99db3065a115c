pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod stmt;

/// A Result type alias that uses Knit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
