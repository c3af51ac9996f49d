//! # Cairn Walker
//!
//! Deterministic directory listing and enumeration on top of
//! [`cairn_fs`]. Listings partition children into directories and files,
//! each sorted by name, so the same tree always produces the same result
//! no matter what order the host hands entries back in.

mod listing;
mod walker;

pub use listing::Listing;
pub use walker::Walker;
