use std::path::Path;

use anyhow::{Context, Result};

impl crate::CairnFS {
    pub fn exists<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().exists()
    }

    pub fn is_file<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_file()
    }

    pub fn is_dir<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_dir()
    }

    /// Bare names of the immediate children of `path`, in host order.
    pub fn read_dir_names<T: AsRef<Path>>(path: T) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(path.as_ref())
            .with_context(|| format!("Failed to read directory {}", path.as_ref().display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("Failed to read directory {}", path.as_ref().display())
            })?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }
}
