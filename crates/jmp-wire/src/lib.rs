#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod format;
pub mod scalar;

pub use cursor::ByteCursor;
pub use error::WireError;
pub use format::{FormatCode, Width};
