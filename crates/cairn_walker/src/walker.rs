use std::collections::HashSet;

use anyhow::Result;
use cairn_fs::CairnFS;
use cairn_path::Location;
use derive_setters::Setters;
use tracing::{debug, warn};

use crate::listing::Listing;

/// Deterministic directory traversal rooted at a single location.
///
/// Ignored names are matched against the bare final name of each child,
/// exactly and case-sensitively. There is no globbing and no path-aware
/// matching: `"node_modules"` excludes every entry of that name at every
/// level, while `"a/node_modules"` matches nothing.
#[derive(Debug, Clone, Default, Setters)]
pub struct Walker {
    /// Directory the walk starts from
    root: Location,

    /// Bare names excluded wherever they appear along the walk
    ignored: HashSet<String>,
}

/// Pending work of an enumeration. Sibling files of a level are grouped so
/// they surface only after every subtree of that level is done.
enum Task {
    Dir(Location),
    Files(Vec<Location>),
}

impl Walker {
    /// Creates a walker over `root` with an empty ignore set.
    pub fn new(root: impl Into<Location>) -> Self {
        Self { root: root.into(), ignored: HashSet::new() }
    }

    /// Adds one name to the ignore set.
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.ignored.insert(name.into());
        self
    }

    /// Immediate children of the root, partitioned into directories and
    /// files and sorted by name.
    ///
    /// A root that does not exist is an empty directory as far as listing
    /// is concerned; a failure on an existing one is an error. Listing
    /// never mutates anything, so repeated calls over an unchanged tree
    /// return identical results.
    pub fn list(&self) -> Result<Listing> {
        self.list_dir(&self.root)
    }

    fn list_dir(&self, dir: &Location) -> Result<Listing> {
        if !CairnFS::exists(dir) {
            return Ok(Listing::default());
        }

        let mut listing = Listing::default();
        for name in CairnFS::read_dir_names(dir)? {
            if self.ignored.contains(&name) {
                continue;
            }
            let child = dir.join(&name);
            if child.is_dir() {
                listing.directories.push(child);
            } else {
                listing.files.push(child);
            }
        }
        listing.directories.sort_by(|a, b| a.name().cmp(b.name()));
        listing.files.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(listing)
    }

    /// Visits every entry under the root, in listing order.
    ///
    /// Directories of a level come first; with `recursive` set, each
    /// directory's whole subtree is visited before its next sibling
    /// directory. Files of a level come after all of its directories. The
    /// first listing failure below the root aborts the walk; entries
    /// already visited stay visited.
    pub fn enumerate<F>(&self, recursive: bool, mut visit: F) -> Result<()>
    where
        F: FnMut(&Location),
    {
        let mut stack = Vec::new();
        push_level(&mut stack, self.list()?);

        let mut visited = 0usize;
        while let Some(task) = stack.pop() {
            match task {
                Task::Dir(dir) => {
                    visit(&dir);
                    visited += 1;
                    if recursive {
                        push_level(&mut stack, self.list_dir(&dir)?);
                    }
                }
                Task::Files(files) => {
                    for file in &files {
                        visit(file);
                    }
                    visited += files.len();
                }
            }
        }

        debug!("Visited {visited} entries under {}", self.root);
        Ok(())
    }

    /// Whether no immediate child of the root carries `candidate` as its
    /// name.
    ///
    /// With `case_sensitive` unset both sides are lowercased first. The
    /// walker's ignore set does not apply here: every child counts. A root
    /// that is not an existing directory is an error, while a listing
    /// failure after that check conservatively reports the name as taken.
    pub fn is_name_unique(&self, candidate: &str, case_sensitive: bool) -> Result<bool> {
        if !CairnFS::is_dir(&self.root) {
            return Err(
                cairn_fs::Error::NotADirectory { path: self.root.to_string() }.into(),
            );
        }

        let listing = match Walker::new(self.root.clone()).list() {
            Ok(listing) => listing,
            Err(err) => {
                warn!("Could not verify name {candidate:?} under {}: {err:#}", self.root);
                return Ok(false);
            }
        };

        let wanted = normalize(candidate, case_sensitive);
        let taken = listing
            .iter()
            .any(|entry| normalize(entry.name(), case_sensitive) == wanted);
        Ok(!taken)
    }
}

fn push_level(stack: &mut Vec<Task>, level: Listing) {
    stack.push(Task::Files(level.files));
    for dir in level.directories.into_iter().rev() {
        stack.push(Task::Dir(dir));
    }
}

fn normalize(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}
