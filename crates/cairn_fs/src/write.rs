use std::path::Path;

use anyhow::{Context, Result};

impl crate::CairnFS {
    /// Writes `contents` to `path`, replacing whatever was there.
    pub fn write<T: AsRef<Path>, U: AsRef<[u8]>>(path: T, contents: U) -> Result<()> {
        std::fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write file {}", path.as_ref().display()))
    }
}
