#![warn(clippy::pedantic)]

pub mod error;
pub mod macros;
pub mod resolver;
pub mod schema;

pub use error::TypeError;
pub use resolver::{FieldEntry, FieldMap, KeyMatch};
pub use schema::{Destination, FieldDef, IntSlot, Record, SKIP_TAG, Slot};
