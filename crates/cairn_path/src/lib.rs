//! # Cairn Path
//!
//! A pure value type for file system locations. `Location` wraps the
//! identifier text of a path and derives related values (name, extension,
//! parent, children) without touching the file system; existence checks
//! delegate to the host and are explicitly separate from identity.

mod error;
mod location;

pub use error::{Error, Result};
pub use location::Location;
