use std::path::Path;

use anyhow::{Context, Result};
use cairn_path::Location;

impl crate::CairnFS {
    /// Gives the entry a new final name inside its current parent and
    /// returns the resulting location.
    pub fn rename(location: &Location, new_name: &str) -> Result<Location> {
        let target = location.parent().join(new_name);
        std::fs::rename(location, &target)
            .with_context(|| format!("Failed to rename {location} to {target}"))?;
        Ok(target)
    }

    pub fn move_item<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Result<()> {
        std::fs::rename(source.as_ref(), destination.as_ref()).with_context(|| {
            format!(
                "Failed to move {} to {}",
                source.as_ref().display(),
                destination.as_ref().display()
            )
        })
    }

    /// Copies a single file. The source is left in place.
    pub fn copy_item<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Result<()> {
        std::fs::copy(source.as_ref(), destination.as_ref())
            .map(|_| ())
            .with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    source.as_ref().display(),
                    destination.as_ref().display()
                )
            })
    }
}
