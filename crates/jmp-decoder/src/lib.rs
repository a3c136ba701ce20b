#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;

mod dispatch;

pub use config::{DEFAULT_MAX_DEPTH, DecoderConfig, UnknownKeys};
pub use decoder::{Decoder, decode};
pub use error::DecodeError;
pub use jmp_types::{Destination, KeyMatch, Record, record};
