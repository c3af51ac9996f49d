use anyhow::{Context, Result};
use cairn_path::Location;
use tracing::debug;
use uuid::Uuid;

use crate::error::Error;
use crate::special::{Domain, SpecialDirectory};

impl crate::CairnFS {
    /// Moves the entry into the user trash directory and returns where it
    /// ended up.
    ///
    /// A name already present in the trash gets a random suffix, so nothing
    /// in the trash is ever replaced.
    pub fn trash(location: &Location) -> Result<Location> {
        let bin = Self::special_directory(SpecialDirectory::Trash, Domain::User, true).ok_or(
            Error::SpecialDirectoryUnavailable { kind: SpecialDirectory::Trash },
        )?;
        Self::create_dir_all(&bin)?;
        Self::move_into_bin(location, &bin)
    }

    fn move_into_bin(location: &Location, bin: &Location) -> Result<Location> {
        let mut target = bin.join(location.name());
        if target.exists() {
            target = bin.join(format!("{}-{}", location.name(), Uuid::new_v4()));
        }
        std::fs::rename(location, &target)
            .with_context(|| format!("Failed to trash {location} to {target}"))?;
        debug!(from = %location, to = %target, "Trashed an entry");
        Ok(target)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use cairn_path::Location;
    use pretty_assertions::assert_eq;

    use crate::CairnFS;

    #[test]
    fn test_move_into_bin_keeps_the_name_when_free() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let bin = Location::from(dir.path().join("bin"));
        let doomed = Location::from(dir.path().join("junk.txt"));
        CairnFS::create_dir(&bin)?;
        CairnFS::create_file(&doomed, "x")?;

        let resting = CairnFS::move_into_bin(&doomed, &bin)?;

        assert_eq!(resting, bin.join("junk.txt"));
        assert!(!doomed.exists());
        assert!(resting.is_file());
        Ok(())
    }

    #[test]
    fn test_move_into_bin_never_replaces_an_occupant() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let bin = Location::from(dir.path().join("bin"));
        CairnFS::create_dir(&bin)?;
        CairnFS::create_file(bin.join("junk.txt"), "first")?;

        let doomed = Location::from(dir.path().join("junk.txt"));
        CairnFS::create_file(&doomed, "second")?;

        let resting = CairnFS::move_into_bin(&doomed, &bin)?;

        assert_ne!(resting, bin.join("junk.txt"));
        assert!(resting.name().starts_with("junk.txt-"));
        assert_eq!(CairnFS::read_utf8(bin.join("junk.txt"))?, "first");
        assert_eq!(CairnFS::read_utf8(&resting)?, "second");
        Ok(())
    }

    #[test]
    fn test_move_into_bin_takes_whole_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let bin = Location::from(dir.path().join("bin"));
        let doomed = Location::from(dir.path().join("project"));
        CairnFS::create_dir(&bin)?;
        CairnFS::create_dir_all(doomed.join("src"))?;
        CairnFS::create_file(doomed.join("src/main.rs"), "fn main() {}")?;

        let resting = CairnFS::move_into_bin(&doomed, &bin)?;

        assert!(resting.join("src/main.rs").is_file());
        assert!(!doomed.exists());
        Ok(())
    }
}
