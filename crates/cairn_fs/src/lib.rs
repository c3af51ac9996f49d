//! # CairnFS
//!
//! A file system service layer that standardizes error handling for host
//! file operations.
//!
//! CairnFS wraps blocking std::fs calls with consistent error context using
//! anyhow::Context. Each method reports failures in the format "Failed to
//! [operation] [path]", preserving the original error cause. On top of the
//! plain wrappers it adds guarded file creation, trash-style removal, a
//! typed projection of host attributes and a catalog of platform special
//! directories.

mod attributes;
mod create;
mod error;
mod meta;
mod read;
mod remove;
mod special;
mod transfer;
mod trash;
mod write;

pub use attributes::{AttributeKey, AttributeValue, Attributes, EntryKind};
pub use error::Error;
pub use special::{Domain, SpecialDirectory};

pub struct CairnFS;
