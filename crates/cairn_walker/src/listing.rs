use cairn_path::Location;

/// A two-part partition of a directory's immediate children.
///
/// Directories and files are kept apart, each sorted ascending by bare name
/// under ordinal comparison. Every child lands in exactly one of the two
/// parts; iteration yields directories first, files second.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub directories: Vec<Location>,
    pub files: Vec<Location>,
}

impl Listing {
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.directories.iter().chain(self.files.iter())
    }

    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    /// Flattens the partition into one vector, directories first.
    pub fn into_locations(self) -> Vec<Location> {
        let mut all = self.directories;
        all.extend(self.files);
        all
    }
}
