use std::path::Path;

use anyhow::{Context, Result};

impl crate::CairnFS {
    pub fn read_utf8<T: AsRef<Path>>(path: T) -> Result<String> {
        Self::read(path).map(|bytes| String::from_utf8_lossy(&bytes).to_string())
    }

    pub fn read<T: AsRef<Path>>(path: T) -> Result<Vec<u8>> {
        std::fs::read(path.as_ref())
            .with_context(|| format!("Failed to read file {}", path.as_ref().display()))
    }
}
