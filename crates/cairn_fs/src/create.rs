use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::Error;

impl crate::CairnFS {
    pub fn create_dir<T: AsRef<Path>>(path: T) -> Result<()> {
        std::fs::create_dir(path.as_ref())
            .with_context(|| format!("Failed to create dir {}", path.as_ref().display()))
    }

    pub fn create_dir_all<T: AsRef<Path>>(path: T) -> Result<()> {
        std::fs::create_dir_all(path.as_ref())
            .with_context(|| format!("Failed to create dir {}", path.as_ref().display()))
    }

    /// Creates a new file holding `contents`.
    ///
    /// Unlike [`CairnFS::write`](crate::CairnFS::write) this never replaces
    /// an existing entry: an occupied path fails with
    /// [`Error::AlreadyExists`] and the entry keeps its contents.
    pub fn create_file<T: AsRef<Path>, U: AsRef<[u8]>>(path: T, contents: U) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::AlreadyExists { path: path.display().to_string() }.into());
        }

        // create_new keeps the check-then-create window closed on the host
        // side as well.
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .with_context(|| format!("Failed to create file {}", path.display()))?;
        file.write_all(contents.as_ref())
            .with_context(|| format!("Failed to write file {}", path.display()))
    }
}
