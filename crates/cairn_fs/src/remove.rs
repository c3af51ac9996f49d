use std::path::Path;

use anyhow::{Context, Result};

impl crate::CairnFS {
    pub fn remove_file<T: AsRef<Path>>(path: T) -> Result<()> {
        std::fs::remove_file(path.as_ref())
            .with_context(|| format!("Failed to remove file {}", path.as_ref().display()))
    }

    pub fn remove_dir_all<T: AsRef<Path>>(path: T) -> Result<()> {
        std::fs::remove_dir_all(path.as_ref())
            .with_context(|| format!("Failed to remove dir {}", path.as_ref().display()))
    }

    /// Removes the entry whatever it is. Directories go away with their
    /// whole subtree; a symlink is unlinked itself, its target stays.
    pub fn remove<T: AsRef<Path>>(path: T) -> Result<()> {
        let meta = std::fs::symlink_metadata(path.as_ref())
            .with_context(|| format!("Failed to remove {}", path.as_ref().display()))?;
        if meta.is_dir() {
            Self::remove_dir_all(path)
        } else {
            Self::remove_file(path)
        }
    }
}
